//! UI Components
//!
//! Reusable Leptos components for the app.

pub mod api_credentials_modal;
pub mod loading;
pub mod modal;
pub mod nav;
pub mod toast;
pub mod tools_modal;

pub use api_credentials_modal::ApiCredentialsModal;
pub use loading::InlineLoading;
pub use modal::Modal;
pub use nav::Nav;
pub use toast::Toast;
pub use tools_modal::ToolsModal;
