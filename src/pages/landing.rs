//! Landing Page
//!
//! What Chronologic is, how to use it, and the way in.

use leptos::*;
use leptos_router::*;

/// Landing page component
#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <div class="max-w-4xl mx-auto space-y-8">
            <section class="bg-[#90dbf4]/90 rounded-xl p-6">
                <h1 class="text-2xl font-bold mb-4">"What is Chronologic?"</h1>
                <p>
                    "Chronologic connects to the software products you already use and \
                     automatically builds a tool for you, so you can disconnect from \
                     technology without giving up the benefits of being connected."
                </p>
            </section>

            <section class="bg-[#fde4cf]/90 rounded-xl p-6">
                <h2 class="text-2xl font-bold mb-4">"How do I use Chronologic?"</h2>
                <p>
                    "On the Connections page, pick two services to place them on the \
                     canvas. Once both are connected, describe the task you want in the \
                     input bar that appears."
                </p>
                <p class="mt-4">
                    "After the services are connected and the task is provided, \
                     Chronologic handles building the tool and performing the task."
                </p>
            </section>

            <section class="bg-[#b9fbc0]/90 rounded-xl p-6">
                <h2 class="text-2xl font-bold mb-4">"Why use Chronologic?"</h2>
                <p>
                    "The modern world is full of software that helps with your work or \
                     just consumes your attention. Life does not wait for the mundane \
                     tasks to finish. Chronologic takes them over so you can get back to \
                     living."
                </p>
            </section>

            <section class="bg-[#98f5e1]/90 rounded-xl p-6 text-center">
                <h2 class="text-2xl font-bold mb-4">"Get started with Chronologic!"</h2>
                <A
                    href="/connections"
                    class="inline-block px-6 py-3 bg-white hover:bg-gray-100 rounded-lg font-medium transition-colors"
                >
                    "Connections"
                </A>
            </section>
        </div>
    }
}
