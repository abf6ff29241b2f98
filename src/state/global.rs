//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use super::catalog::ServiceCatalog;
use super::workflow::ConnectionWorkflow;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Connection Builder state behind the connections page
    pub workflow: RwSignal<ConnectionWorkflow>,
    /// Result of the startup backend health check; `None` until it resolves
    pub backend_online: RwSignal<Option<bool>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    /// Error message (for toasts)
    pub error: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        workflow: create_rw_signal(ConnectionWorkflow::new(ServiceCatalog::builtin())),
        backend_online: create_rw_signal(None),
        success: create_rw_signal(None),
        error: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error.set(None);
        })
        .forget();
    }
}
