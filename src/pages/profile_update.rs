//! Profile Update Page
//!
//! Edit the display name and the backend connection settings.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::state::GlobalState;

/// Profile update page component
#[component]
pub fn ProfileUpdate() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let navigate = use_navigate();

    let finish = move |_| {
        let entered = name.get();
        let entered = entered.trim();
        if !entered.is_empty() {
            state.show_success(&format!("Profile updated, {entered}"));
        }
        navigate("/profile", Default::default());
    };

    view! {
        <div class="max-w-6xl mx-auto bg-[#fde4cf]/90 rounded-xl p-6">
            <div class="grid md:grid-cols-2 gap-8">
                // Left column
                <div class="space-y-6">
                    <div>
                        <h1 class="text-4xl font-bold mb-6">"Updating Profile"</h1>

                        <div class="mb-4">
                            <label for="name" class="block mb-2">"Name"</label>
                            <input
                                type="text"
                                id="name"
                                class="w-full rounded-xl p-2"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </div>
                        <p class="text-xl text-gray-600">"User name: guest"</p>
                    </div>

                    <BackendSettings />

                    <button
                        class="px-4 py-2 bg-pink-100 hover:bg-pink-200 rounded-lg font-medium transition-colors"
                        on:click=finish
                    >
                        "Finish"
                    </button>
                </div>

                // Right column
                <div class="relative h-[400px] rounded-xl overflow-hidden bg-gradient-to-br from-blue-200 via-cyan-200 to-green-200" />
            </div>
        </div>
    }
}

/// Backend connection settings
#[component]
fn BackendSettings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (testing, set_testing) = create_signal(false);

    let test_connection = move |_| {
        set_testing.set(true);

        let url = api_url.get();
        api::set_api_base(&url);

        spawn_local(async move {
            match api::check_health().await {
                Ok(_) => {
                    state.backend_online.set(Some(true));
                    state.show_success("Connection successful!");
                }
                Err(e) => {
                    state.backend_online.set(Some(false));
                    state.show_error(&format!("Connection failed: {e}"));
                }
            }
            set_testing.set(false);
        });
    };

    let save_url = move |_| {
        api::set_api_base(&api_url.get());
        state.show_success("Backend URL saved");
    };

    view! {
        <div class="p-6 bg-[#f1c0e8]/90 rounded-xl space-y-2">
            <label class="block font-medium">"Backend URL"</label>
            <div class="flex gap-2">
                <input
                    type="text"
                    class="flex-1 rounded-xl p-2"
                    prop:value=move || api_url.get()
                    on:input=move |ev| set_api_url.set(event_target_value(&ev))
                />
                <button
                    class="px-4 py-2 bg-pink-100 hover:bg-pink-200 disabled:opacity-50 rounded-lg transition-colors"
                    disabled=move || testing.get()
                    on:click=test_connection
                >
                    {move || if testing.get() { "Testing..." } else { "Test" }}
                </button>
                <button
                    class="px-4 py-2 bg-pink-100 hover:bg-pink-200 rounded-lg transition-colors"
                    on:click=save_url
                >
                    "Save"
                </button>
            </div>
        </div>
    }
}
