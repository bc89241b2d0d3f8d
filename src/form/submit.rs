use std::time::Duration;

use crate::api::Registrar;
use crate::models::RegisterRequest;
use crate::state::NotificationType;
use crate::storage::TokenStore;
use crate::timer;

pub const SUCCESS_MESSAGE: &str = "Registration successful! Redirecting to login...";

#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationOutcome {
    Registered { token: String },
    Failed { message: String },
}

/// Send the request and persist the returned token under `token_key`.
///
/// A token that cannot be persisted is logged but still counts as a
/// successful registration.
pub async fn register_and_store<R, S>(
    registrar: &R,
    store: &S,
    token_key: &str,
    request: &RegisterRequest,
) -> RegistrationOutcome
where
    R: Registrar,
    S: TokenStore,
{
    tracing::info!("Submitting registration for {}", request.email);

    match registrar.register(request).await {
        Ok(response) => {
            if let Err(e) = store.save(token_key, &response.access_token) {
                tracing::warn!("Could not persist access token: {}", e);
            }
            tracing::info!("Registration succeeded for {}", request.email);
            RegistrationOutcome::Registered {
                token: response.access_token,
            }
        }
        Err(e) => {
            tracing::warn!("Registration failed for {}: {}", request.email, e);
            RegistrationOutcome::Failed {
                message: e.user_message(),
            }
        }
    }
}

/// Where the page reports the result of a registration
pub trait RegistrationFeedback {
    fn signed_in(&self, token: String);
    fn notify(&self, message: &str, kind: NotificationType);
    fn clear_notification(&self);
    fn redirect_home(&self);
}

/// Announce the outcome; on success hold the notification for
/// `redirect_delay`, then clear it and leave for `/`.
pub async fn finish_registration<F>(outcome: RegistrationOutcome, redirect_delay: Duration, feedback: F)
where
    F: RegistrationFeedback,
{
    match outcome {
        RegistrationOutcome::Registered { token } => {
            feedback.signed_in(token);
            feedback.notify(SUCCESS_MESSAGE, NotificationType::Success);
            timer::sleep(redirect_delay).await;
            feedback.clear_notification();
            feedback.redirect_home();
        }
        RegistrationOutcome::Failed { message } => {
            feedback.notify(&message, NotificationType::Error);
        }
    }
}
