//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{Nav, Toast};
use crate::pages::{Connections, Landing, Profile, ProfileUpdate};
use crate::state::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Probe the backend once on startup; the nav indicator shows the result.
    create_effect(move |_| {
        spawn_local(async move {
            match api::check_health().await {
                Ok(health) => {
                    web_sys::console::log_1(&format!("backend status: {}", health.status).into());
                    state.backend_online.set(Some(true));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("backend health check failed: {e}").into());
                    state.backend_online.set(Some(false));
                }
            }
        });
    });

    view! {
        <Router>
            <div class="min-h-screen gradient-bg text-gray-900 flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Landing />
                        <Route path="/connections" view=Connections />
                        <Route path="/profile" view=Profile />
                        <Route path="/profile/update" view=ProfileUpdate />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-600 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-pink-100 hover:bg-pink-200 rounded-lg font-medium transition-colors"
            >
                "Go home"
            </A>
        </div>
    }
}
