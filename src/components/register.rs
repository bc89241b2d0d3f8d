use std::collections::HashMap;
use std::rc::Rc;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::api::api_client;
use crate::config::config;
use crate::form::{
    finish_registration, register_and_store, settle_after, Field, FormHandle, RegisterForm,
    RegistrationFeedback, SubmitAttempt, SubmitStatus, Ticket,
};
use crate::routes::Route;
use crate::state::{self, NotificationType};
use crate::storage::token_store;

impl FormHandle for Signal<RegisterForm> {
    fn is_current(&self, ticket: Ticket) -> bool {
        self.peek().is_current(ticket)
    }

    fn settle(&mut self, ticket: Ticket) -> bool {
        self.write().settle(ticket)
    }
}

/// Reports through the global signals and the router
struct PageFeedback {
    nav: Navigator,
}

impl RegistrationFeedback for PageFeedback {
    fn signed_in(&self, token: String) {
        state::set_auth(token);
    }

    fn notify(&self, message: &str, kind: NotificationType) {
        state::show_notification(message, kind);
    }

    fn clear_notification(&self) {
        state::clear_notification();
    }

    fn redirect_home(&self) {
        self.nav.push(Route::Home {});
    }
}

#[component]
pub fn RegisterPage() -> Element {
    let nav = use_navigator();
    let mut form = use_signal(RegisterForm::new);
    let mut inputs = use_signal(HashMap::<Field, Rc<MountedData>>::new);

    // Each edit restarts the quiet window; only the latest timer settles it
    let mut edit = move |field: Field, value: String| {
        let ticket = form.write().edit(field, value);
        let delay = config().debounce;
        spawn(async move {
            if settle_after(form, ticket, delay).await {
                tracing::debug!("Registration draft settled");
            }
        });
    };

    let mut submit = move || {
        let attempt = form.write().begin_submit();

        match attempt {
            SubmitAttempt::Blocked { focus } => {
                tracing::debug!("Submit blocked, {} is empty", focus.name());
                let target = inputs.read().get(&focus).cloned();
                if let Some(element) = target {
                    spawn(async move {
                        if let Err(e) = element.set_focus(true).await {
                            tracing::warn!("Could not focus {}: {:?}", focus.name(), e);
                        }
                    });
                }
            }
            SubmitAttempt::Busy => {}
            SubmitAttempt::Proceed(request) => {
                state::clear_notification();

                spawn(async move {
                    let settings = config();
                    let outcome =
                        register_and_store(api_client(), token_store(), &settings.token_key, &request).await;
                    form.write().finish_submit();

                    // Not tied to this page, so leaving early still clears the toast
                    spawn_forever(finish_registration(
                        outcome,
                        settings.redirect_delay,
                        PageFeedback { nav },
                    ));
                });
            }
        }
    };

    let current = form();
    let is_loading = current.status() == SubmitStatus::Loading;

    rsx! {
        div { class: "min-h-screen flex items-center justify-center bg-gray-100 py-8",
            div { class: "bg-white rounded-lg shadow-lg p-8 w-full max-w-md",
                h3 { class: "text-2xl font-bold mb-6 text-center", "Register" }

                form {
                    onsubmit: move |e| {
                        e.prevent_default();
                        submit();
                    },

                    for (field, name) in Field::ALL.into_iter().map(|f| (f, f.name())) {
                        div { key: "{name}", class: "mb-4",
                            label { class: "block text-sm font-medium text-gray-700 mb-1",
                                {field.label()}
                            }
                            input {
                                class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500",
                                r#type: field.input_type(current.show_password()),
                                name: name,
                                value: current.draft.get(field).to_string(),
                                oninput: move |e| edit(field, e.value()),
                                onmounted: move |e| {
                                    inputs.write().insert(field, e.data());
                                },
                            }
                            if current.shows_required(field) {
                                span { class: "text-sm text-red-600", "This field is required" }
                            }
                        }
                    }

                    div {
                        class: "mb-6 text-sm text-blue-600 cursor-pointer select-none",
                        onclick: move |_| form.write().toggle_password(),
                        if current.show_password() { "Hide Password" } else { "Show Password" }
                    }

                    button {
                        class: "w-full py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 font-medium disabled:opacity-50 transition-colors",
                        r#type: "submit",
                        disabled: is_loading,
                        {current.status().button_label()}
                    }
                }

                div { class: "mt-6 text-center text-sm text-gray-600",
                    small {
                        "Already have an account? "
                        Link {
                            class: "text-blue-600 hover:text-blue-700 font-medium",
                            to: Route::Home {},
                            "Login"
                        }
                    }
                }
            }
        }
    }
}
