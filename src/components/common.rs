use dioxus::prelude::*;
use crate::state::UI_STATE;

/// Toast for the current notification; stays until dismissed or replaced
#[component]
pub fn Notification() -> Element {
    let notification = UI_STATE.read().notification.clone();

    if let Some(notif) = notification {
        let color_class = notif.notification_type.color_class();
        let icon = notif.notification_type.icon();
        rsx! {
            div {
                class: "fixed top-4 right-4 z-50 {color_class} text-white px-6 py-4 rounded-lg shadow-xl max-w-sm animate-slide-in",
                div { class: "flex items-start gap-3",
                    span { class: "text-xl flex-shrink-0", "{icon}" }
                    div { class: "flex-1",
                        p { class: "font-medium", "{notif.message}" }
                    }
                    button {
                        class: "ml-2 text-white hover:text-gray-200 flex-shrink-0",
                        onclick: move |_| {
                            crate::state::clear_notification();
                        },
                        "\u{2715}"
                    }
                }
            }
        }
    } else {
        rsx! {}
    }
}
