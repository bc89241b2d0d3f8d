use dioxus::prelude::*;

use crate::config::config;
use crate::storage::{token_store, TokenStore};

/// Global authentication state
pub static AUTH_STATE: GlobalSignal<AuthState> = Signal::global(AuthState::default);

#[derive(Clone, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Pick up a token saved by an earlier session
pub fn restore_auth() {
    if let Some(token) = token_store().load(&config().token_key) {
        tracing::debug!("Restored access token from storage");
        AUTH_STATE.write().token = Some(token);
    }
}

pub fn set_auth(token: String) {
    AUTH_STATE.write().token = Some(token);
}

pub fn clear_auth() {
    if let Err(e) = token_store().remove(&config().token_key) {
        tracing::warn!("Could not remove access token: {}", e);
    }
    AUTH_STATE.write().token = None;
}
