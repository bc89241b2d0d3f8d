use dioxus::prelude::*;

use crate::routes::Route;
use crate::state::{self, AUTH_STATE};

/// Landing page at `/`, the redirect target after registering
#[component]
pub fn HomePage() -> Element {
    let signed_in = AUTH_STATE.read().is_authenticated();

    rsx! {
        div { class: "min-h-screen flex items-center justify-center bg-gray-100",
            div { class: "bg-white rounded-lg shadow-lg p-8 w-full max-w-md text-center",
                h1 { class: "text-2xl font-bold mb-4", "Admin Dashboard" }

                if signed_in {
                    p { class: "text-gray-600 mb-6", "Your account is ready." }
                    button {
                        class: "px-4 py-2 text-gray-600 hover:bg-gray-100 rounded-lg",
                        onclick: move |_| state::clear_auth(),
                        "Sign out"
                    }
                } else {
                    p { class: "text-gray-500 mb-6", "You are not signed in." }
                    Link {
                        class: "px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700",
                        to: Route::Register {},
                        "Create an account"
                    }
                }
            }
        }
    }
}
