//! Navigation Component
//!
//! Header bar with brand, page links, and the backend status indicator.

use leptos::*;
use leptos_router::*;

use crate::state::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-white/80 border-b border-gray-200">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"⏳"</span>
                        <span class="text-xl font-bold">"Chronologic"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="Home" />
                        <NavLink href="/connections" label="Connections" />
                        <NavLink href="/profile" label="Profile" />
                    </div>

                    <BackendStatus />
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-600 hover:text-black hover:bg-pink-100 transition-colors"
            active_class="bg-pink-100 text-black"
        >
            {label}
        </A>
    }
}

/// Result of the startup health check.
#[component]
fn BackendStatus() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="flex items-center space-x-2 text-sm">
            {move || match state.backend_online.get() {
                None => view! {
                    <span class="flex items-center space-x-1 text-gray-400">
                        <span class="w-2 h-2 bg-gray-400 rounded-full" />
                        <span>"Checking..."</span>
                    </span>
                }
                .into_view(),
                Some(true) => view! {
                    <span class="flex items-center space-x-1 text-green-600">
                        <span class="w-2 h-2 bg-green-500 rounded-full" />
                        <span>"Backend online"</span>
                    </span>
                }
                .into_view(),
                Some(false) => view! {
                    <span class="flex items-center space-x-1 text-red-600">
                        <span class="w-2 h-2 bg-red-500 rounded-full" />
                        <span>"Backend offline"</span>
                    </span>
                }
                .into_view(),
            }}
        </div>
    }
}
