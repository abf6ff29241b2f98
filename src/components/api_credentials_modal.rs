//! API Credentials Modal
//!
//! Explains why Chronologic needs access to the services a user connects.

use leptos::*;
use leptos_router::*;

use super::Modal;

#[component]
pub fn ApiCredentialsModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal open=open on_close=on_close title="API Credentials">
            <div class="space-y-4">
                <p class="text-gray-700">
                    "Chronologic only requests the credentials it needs to read from and \
                     write to the services you connect. Keys stay with the backend and are \
                     never shared with third parties."
                </p>
                <A
                    href="/profile/update"
                    class="block w-full text-center px-4 py-2 bg-pink-100 hover:bg-pink-200 rounded-lg font-medium transition-colors"
                >
                    "Go to settings"
                </A>
            </div>
        </Modal>
    }
}
