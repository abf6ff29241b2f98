//! Service Catalog
//!
//! Source of the connectable services shown in the toolbar. Stands in for a
//! backend-provided catalog: the token set is fixed and the interface
//! schemas are empty placeholder objects until the real catalog exists.

use serde_json::Value;

use super::slots::ServiceToken;

#[derive(Clone, Debug)]
pub struct ServiceCatalog {
    services: Vec<ServiceToken>,
}

impl ServiceCatalog {
    /// The built-in service set.
    pub fn builtin() -> Self {
        Self {
            services: vec![
                ServiceToken::new("left-api", "Left API"),
                ServiceToken::new("right-api", "Right API"),
            ],
        }
    }

    pub fn services(&self) -> &[ServiceToken] {
        &self.services
    }

    /// Interface schema for a service, used to populate `app_schemas` in the
    /// submission payload.
    pub fn schema_for(&self, _token_id: &str) -> Value {
        Value::Object(serde_json::Map::new())
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
