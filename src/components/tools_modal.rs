//! Tools Modal
//!
//! Lists the tools the backend has built from completed submissions.

use leptos::*;

use super::Modal;
use crate::state::GlobalState;

#[component]
pub fn ToolsModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <Modal open=open on_close=on_close title="Tools">
            {move || {
                let tools: Vec<String> = state
                    .workflow
                    .with(|w| w.log().completed().map(|e| e.text.clone()).collect());

                if tools.is_empty() {
                    view! {
                        <p class="text-gray-600">
                            "No tools yet. Connect two services and describe a task to build one."
                        </p>
                    }
                    .into_view()
                } else {
                    view! {
                        <div class="space-y-1">
                            {tools
                                .into_iter()
                                .map(|name| view! {
                                    <div class="flex justify-between items-center py-2 border-b border-gray-200">
                                        <span class="truncate pr-4">{name}</span>
                                        <span class="text-sm text-green-600 font-medium">"Ready"</span>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_view()
                }
            }}
        </Modal>
    }
}
