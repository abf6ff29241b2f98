//! Modal Dialog Shell
//!
//! Shared overlay and chrome for the app's dialogs.

use leptos::*;

/// Overlay dialog. Rendered only while `open` is true; the close button and
/// clicks on the backdrop invoke `on_close`.
#[component]
pub fn Modal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
    title: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        {move || {
            if open.get() {
                view! {
                    <div
                        class="fixed inset-0 z-40 bg-black/40 flex items-center justify-center p-4"
                        on:click=move |_| on_close.call(())
                    >
                        <div
                            class="bg-[#fcfbef] rounded-xl shadow-lg w-full max-w-md p-6"
                            on:click=|ev| ev.stop_propagation()
                        >
                            <div class="flex items-center justify-between mb-4">
                                <h2 class="text-lg font-semibold">{title}</h2>
                                <button
                                    class="text-gray-500 hover:text-black text-xl leading-none"
                                    on:click=move |_| on_close.call(())
                                >
                                    "×"
                                </button>
                            </div>
                            {children()}
                        </div>
                    </div>
                }
                .into_view()
            } else {
                view! {}.into_view()
            }
        }}
    }
}
