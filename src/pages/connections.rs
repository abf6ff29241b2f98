//! Connections Page
//!
//! The Connection Builder: place two services on the canvas, describe how
//! they should work together, and submit the pairing to the backend.

use leptos::*;

use crate::api;
use crate::components::{InlineLoading, ToolsModal};
use crate::state::slots::{ServiceToken, Slot};
use crate::state::submissions::{SubmissionEntry, SubmissionStatus};
use crate::state::GlobalState;

/// Canvas anchor for a slot, in pixels.
fn anchor_for(slot: Slot) -> (i32, i32) {
    match slot {
        Slot::First => (250, 100),
        Slot::Second => (550, 100),
    }
}

/// Connections page component
#[component]
pub fn Connections() -> impl IntoView {
    let (show_tools, set_show_tools) = create_signal(false);

    view! {
        <div class="max-w-4xl mx-auto space-y-6 pb-24">
            <ProgressList />
            <Canvas />
            <InstructionBar />
            <Toolbar on_tools=move |_: ()| set_show_tools.set(true) />
            <ToolsModal open=show_tools on_close=move |_: ()| set_show_tools.set(false) />
        </div>
    }
}

/// Submission history with live status.
#[component]
fn ProgressList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Re-render only when the log itself changes, not on every keystroke
    // into the instruction input.
    let entries = create_memo(move |_| state.workflow.with(|w| w.log().entries().to_vec()));

    view! {
        <section class="bg-white/90 rounded-xl p-6 shadow-lg">
            <h2 class="text-lg font-semibold mb-4">"Progress"</h2>
            {move || {
                if entries.with(|e| e.is_empty()) {
                    view! {
                        <p class="text-gray-500">"Nothing submitted yet."</p>
                    }
                    .into_view()
                } else {
                    view! {
                        <div class="space-y-3">
                            {entries
                                .get()
                                .into_iter()
                                .map(|entry| view! { <ProgressRow entry=entry /> })
                                .collect_view()}
                        </div>
                    }
                    .into_view()
                }
            }}
        </section>
    }
}

/// One submission with its status and a delete control.
#[component]
fn ProgressRow(entry: SubmissionEntry) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let id = entry.id;

    let status_view = match entry.status {
        SubmissionStatus::Running => view! { <InlineLoading /> }.into_view(),
        SubmissionStatus::Completed => view! {
            <span class="text-green-600 font-semibold">"Done"</span>
        }
        .into_view(),
        SubmissionStatus::Failed => view! {
            <span class="text-red-600 font-semibold">"Failed"</span>
        }
        .into_view(),
    };

    view! {
        <div
            class="flex items-center gap-2"
            title=entry.submitted_at.format("Submitted %H:%M:%S").to_string()
        >
            <div class="flex-1 h-8 bg-gray-100 rounded flex items-center px-3 truncate">
                {entry.text.clone()}
            </div>
            <div class="flex items-center gap-3">
                {status_view}
                <button
                    class="text-red-500 hover:text-red-600 font-bold"
                    on:click=move |_| state.workflow.update(|w| w.delete_entry(id))
                >
                    "×"
                </button>
            </div>
        </div>
    }
}

/// Placement canvas: placed tokens at their slot anchors, with a connecting
/// arrow once both slots are filled.
#[component]
fn Canvas() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Track slot contents only; instruction keystrokes and log updates run
    // through the same workflow signal and must not redraw the canvas.
    let slots = create_memo(move |_| state.workflow.with(|w| w.slots().clone()));

    view! {
        <div class="relative h-[200px] bg-[#fcfbef]/90 rounded-xl overflow-hidden">
            {move || {
                slots
                    .with(|s| s.is_complete())
                    .then(|| view! { <ConnectionArrow /> })
            }}
            {move || {
                slots.with(|s| {
                    s.placed()
                        .map(|(slot, token)| {
                            let (x, y) = anchor_for(slot);
                            let name = token.name.clone();
                            view! {
                                <div
                                    class="absolute p-4 bg-[#8eecf5]/90 rounded-lg -translate-x-1/2 -translate-y-1/2"
                                    style=format!("left: {x}px; top: {y}px;")
                                >
                                    {name}
                                </div>
                            }
                        })
                        .collect_view()
                })
            }}
        </div>
    }
}

/// Arrow from the first slot to the second.
#[component]
fn ConnectionArrow() -> impl IntoView {
    let (x1, y1) = anchor_for(Slot::First);
    let (x2, y2) = anchor_for(Slot::Second);

    view! {
        <svg class="absolute inset-0 w-full h-full pointer-events-none">
            <defs>
                <marker
                    id="arrowhead"
                    viewBox="0 0 10 10"
                    refX="5"
                    refY="5"
                    markerWidth="6"
                    markerHeight="6"
                    orient="auto-start-reverse"
                >
                    <path d="M 0 0 L 10 5 L 0 10 z" fill="black" />
                </marker>
            </defs>
            <path
                d=format!("M {} {} L {} {}", x1 + 60, y1, x2 - 60, y2)
                stroke="black"
                stroke-width="2"
                marker-end="url(#arrowhead)"
                fill="none"
            />
        </svg>
    }
}

/// Instruction input and submit control, shown once both slots are filled.
#[component]
fn InstructionBar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let submit = move || {
        // Preconditions and all pre-call state changes happen synchronously
        // in begin_submission; a None means the attempt was not admitted.
        let pending = state
            .workflow
            .try_update(|w| w.begin_submission())
            .flatten();
        let Some(pending) = pending else {
            return;
        };

        spawn_local(async move {
            let result = api::submit_graph(&pending.payload).await;
            if let Err(e) = &result {
                web_sys::console::error_1(
                    &format!("connection submission failed: {e}").into(),
                );
            }
            state
                .workflow
                .update(|w| w.finish_submission(pending.id, result.is_ok()));
        });
    };

    // Memoized so keystrokes into the input (which update the workflow
    // signal) do not recreate the input element and drop focus.
    let complete = create_memo(move |_| state.workflow.with(|w| w.slots().is_complete()));

    view! {
        {move || {
            complete.get().then(|| view! {
                <div class="bg-[#fcfbef]/90 rounded-xl p-4">
                    <div class="flex items-center gap-2">
                        <input
                            type="text"
                            class="flex-1 bg-[#90dbf4]/90 rounded-lg px-4 py-2 focus:outline-none"
                            placeholder="Enter your connection here..."
                            prop:value=move || state.workflow.with(|w| w.instruction().to_string())
                            on:input=move |ev| {
                                state
                                    .workflow
                                    .update(|w| w.set_instruction(&event_target_value(&ev)))
                            }
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" {
                                    submit();
                                }
                            }
                        />
                        <button
                            class="px-4 py-2 bg-pink-100 hover:bg-pink-200 disabled:opacity-50
                                   disabled:cursor-not-allowed rounded-lg font-medium transition-colors"
                            disabled=move || state.workflow.with(|w| !w.can_submit())
                            on:click=move |_| submit()
                        >
                            {move || {
                                if state.workflow.with(|w| w.in_flight()) {
                                    view! { <InlineLoading /> }.into_view()
                                } else {
                                    view! { "Submit" }.into_view()
                                }
                            }}
                        </button>
                    </div>
                </div>
            })
        }}
    }
}

/// Bottom toolbar: tools dialog, service chips, and the Clear action.
#[component]
fn Toolbar(#[prop(into)] on_tools: Callback<()>) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let services = state.workflow.with_untracked(|w| w.services().to_vec());

    view! {
        <div class="fixed bottom-0 left-0 right-0 p-4 bg-white border-t">
            <div class="max-w-4xl mx-auto flex justify-between items-center">
                <button
                    class="px-4 py-2 border rounded-lg hover:bg-gray-50 transition-colors"
                    on:click=move |_| on_tools.call(())
                >
                    "Tools"
                </button>
                <div class="flex gap-4">
                    {services
                        .into_iter()
                        .map(|token| view! { <ServiceChip token=token /> })
                        .collect_view()}
                </div>
                <button
                    class="px-4 py-2 border rounded-lg hover:bg-gray-50 transition-colors"
                    on:click=move |_| state.workflow.update(|w| w.clear_canvas())
                >
                    "Clear"
                </button>
            </div>
        </div>
    }
}

/// A service from the catalog. Click places it on the canvas; clicking
/// again while placed retrieves it.
#[component]
fn ServiceChip(token: ServiceToken) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let id = token.id.clone();
    let placed = create_memo(move |_| state.workflow.with(|w| w.slots().is_placed(&id)));
    let name = token.name.clone();

    view! {
        <button
            class=move || {
                if placed.get() {
                    "p-2 bg-gray-200 rounded-lg transition-colors"
                } else {
                    "p-2 bg-[#fbf8cc] hover:bg-[#f7f4b9] rounded-lg transition-colors"
                }
            }
            on:click=move |_| state.workflow.update(|w| w.toggle_token(&token))
        >
            {name}
        </button>
    }
}
