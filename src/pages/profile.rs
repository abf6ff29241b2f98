//! Profile Page
//!
//! Account overview: tools created, join date, and connected services.

use leptos::*;
use leptos_router::*;

use crate::components::ApiCredentialsModal;
use crate::state::GlobalState;

/// Profile page component
#[component]
pub fn Profile() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (show_credentials, set_show_credentials) = create_signal(false);

    view! {
        <div class="max-w-6xl mx-auto bg-[#fde4cf]/90 rounded-xl p-6">
            <div class="grid md:grid-cols-2 gap-8">
                // Left column
                <div class="space-y-6">
                    <div>
                        <h1 class="text-4xl font-bold mb-6">"Profile"</h1>
                        <p class="text-2xl mb-2">"Hello, Guest"</p>
                        <p class="text-xl text-gray-600">"User name: guest"</p>
                    </div>

                    <div class="p-6 bg-[#f1c0e8]/90 rounded-xl space-y-4">
                        <div>
                            <h3 class="font-medium">"Tools created"</h3>
                            <p>{move || state.workflow.with(|w| w.log().completed_count())}</p>
                        </div>
                        <div>
                            <h3 class="font-medium">"Date joined"</h3>
                            <p>"January 1, 2024"</p>
                        </div>
                        <div>
                            <h3 class="font-medium">"Connected services"</h3>
                            <p>
                                {move || {
                                    let names: Vec<String> = state.workflow.with(|w| {
                                        w.slots().placed().map(|(_, t)| t.name.clone()).collect()
                                    });
                                    if names.is_empty() {
                                        "None".to_string()
                                    } else {
                                        names.join(", ")
                                    }
                                }}
                            </p>
                            <button
                                class="mt-2 text-sm text-gray-700 underline hover:text-black"
                                on:click=move |_| set_show_credentials.set(true)
                            >
                                "Why does Chronologic need access?"
                            </button>
                        </div>
                    </div>

                    <A
                        href="/profile/update"
                        class="inline-block px-4 py-2 bg-pink-100 hover:bg-pink-200 rounded-lg font-medium transition-colors"
                    >
                        "Update"
                    </A>
                </div>

                // Right column
                <div class="relative h-[400px] rounded-xl overflow-hidden bg-gradient-to-br from-blue-200 via-cyan-200 to-green-200" />
            </div>

            <ApiCredentialsModal
                open=show_credentials
                on_close=move |_: ()| set_show_credentials.set(false)
            />
        </div>
    }
}
