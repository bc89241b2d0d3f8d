use dioxus::prelude::*;

/// Global UI state
pub static UI_STATE: GlobalSignal<UiState> = Signal::global(UiState::default);

#[derive(Clone, Default, PartialEq)]
pub struct UiState {
    pub notification: Option<Notification>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub message: String,
    pub notification_type: NotificationType,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NotificationType {
    Success,
    Error,
}

impl NotificationType {
    pub fn color_class(&self) -> &str {
        match self {
            NotificationType::Success => "bg-green-500",
            NotificationType::Error => "bg-red-500",
        }
    }

    pub fn icon(&self) -> &str {
        match self {
            NotificationType::Success => "\u{2705}",
            NotificationType::Error => "\u{274C}",
        }
    }
}

pub fn show_notification(message: &str, notification_type: NotificationType) {
    UI_STATE.write().notification = Some(Notification {
        message: message.to_string(),
        notification_type,
    });
}

pub fn clear_notification() {
    UI_STATE.write().notification = None;
}
