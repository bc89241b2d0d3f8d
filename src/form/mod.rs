//! Registration form state
//!
//! Everything here is plain data so the rules can be exercised without a
//! renderer; `components::register` wires it to signals and timers.

pub mod debounce;
pub mod field;
pub mod submit;

pub use debounce::{Debounce, Ticket};
pub use field::Field;
pub use submit::*;

use std::time::Duration;

use crate::models::RegisterRequest;
use crate::timer;

/// Unsaved field values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterDraft {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub contact_no: String,
}

impl RegisterDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::FirstName => &self.first_name,
            Field::MiddleName => &self.middle_name,
            Field::LastName => &self.last_name,
            Field::ContactNo => &self.contact_no,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::FirstName => &mut self.first_name,
            Field::MiddleName => &mut self.middle_name,
            Field::LastName => &mut self.last_name,
            Field::ContactNo => &mut self.contact_no,
        };
        *slot = value;
    }

    /// Required fields that are still empty, in display order
    pub fn missing_required(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.get(*f).is_empty())
            .collect()
    }

    pub fn to_request(&self) -> RegisterRequest {
        RegisterRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            first_name: self.first_name.clone(),
            middle_name: self.middle_name.clone(),
            last_name: self.last_name.clone(),
            contact_no: self.contact_no.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Loading,
}

impl SubmitStatus {
    pub fn button_label(&self) -> &'static str {
        match self {
            SubmitStatus::Idle => "Register",
            SubmitStatus::Loading => "Loading",
        }
    }
}

/// Result of pressing the submit button
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAttempt {
    /// A required field is empty; nothing is sent
    Blocked { focus: Field },
    Proceed(RegisterRequest),
    /// A request is already in flight
    Busy,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub draft: RegisterDraft,
    dirty: bool,
    debounce: Debounce,
    status: SubmitStatus,
    show_password: bool,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn edit(&mut self, field: Field, value: String) -> Ticket {
        self.dirty = true;
        self.draft.set(field, value);
        self.debounce.touch()
    }

    /// Called when the debounce timer for `ticket` fires
    pub fn settle(&mut self, ticket: Ticket) -> bool {
        self.debounce.settle(ticket)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.debounce.is_current(ticket)
    }

    pub fn shows_required(&self, field: Field) -> bool {
        field.is_required()
            && self.dirty
            && self.debounce.is_settled()
            && self.draft.get(field).is_empty()
    }

    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.status == SubmitStatus::Loading {
            return SubmitAttempt::Busy;
        }

        if let Some(focus) = self.draft.missing_required().into_iter().next() {
            self.dirty = true;
            return SubmitAttempt::Blocked { focus };
        }

        self.status = SubmitStatus::Loading;
        SubmitAttempt::Proceed(self.draft.to_request())
    }

    pub fn finish_submit(&mut self) {
        self.status = SubmitStatus::Idle;
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    pub fn toggle_password(&mut self) {
        self.show_password = !self.show_password;
    }
}

/// Shared access to a form that outlives a single event handler
pub trait FormHandle {
    /// Read-only check, so a stale timer does not touch the form
    fn is_current(&self, ticket: Ticket) -> bool;
    fn settle(&mut self, ticket: Ticket) -> bool;
}

/// Wait out the debounce window for `ticket` and settle the form if no
/// newer edit arrived meanwhile.
pub async fn settle_after<H: FormHandle>(mut handle: H, ticket: Ticket, delay: Duration) -> bool {
    timer::sleep(delay).await;
    if !handle.is_current(ticket) {
        return false;
    }
    handle.settle(ticket)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedForm(Arc<Mutex<RegisterForm>>);

    impl FormHandle for SharedForm {
        fn is_current(&self, ticket: Ticket) -> bool {
            self.0.lock().unwrap().is_current(ticket)
        }

        fn settle(&mut self, ticket: Ticket) -> bool {
            self.0.lock().unwrap().settle(ticket)
        }
    }

    impl SharedForm {
        fn edit(&self, field: Field, value: &str) -> Ticket {
            self.0.lock().unwrap().edit(field, value.to_string())
        }

        fn shows_required(&self, field: Field) -> bool {
            self.0.lock().unwrap().shows_required(field)
        }
    }

    fn filled_form() -> RegisterForm {
        let mut form = RegisterForm::new();
        form.edit(Field::FirstName, "Ana".to_string());
        form.edit(Field::LastName, "Reyes".to_string());
        form.edit(Field::Email, "ana@example.com".to_string());
        form.edit(Field::Password, "s3cret!".to_string());
        form
    }

    #[test]
    fn test_fresh_form_shows_no_errors() {
        let form = RegisterForm::new();
        for field in Field::ALL {
            assert!(!form.shows_required(field));
        }
        assert_eq!(form.status(), SubmitStatus::Idle);
    }

    #[test]
    fn test_required_errors_wait_for_debounce() {
        let mut form = RegisterForm::new();
        let ticket = form.edit(Field::FirstName, "Ana".to_string());

        assert!(!form.shows_required(Field::Email));
        assert!(!form.shows_required(Field::Password));

        assert!(form.settle(ticket));
        assert!(form.shows_required(Field::Email));
        assert!(form.shows_required(Field::Password));
        // Optional fields never show the message
        assert!(!form.shows_required(Field::MiddleName));
    }

    #[test]
    fn test_newer_edit_restarts_debounce_window() {
        let mut form = RegisterForm::new();
        let first = form.edit(Field::Email, "a".to_string());
        let second = form.edit(Field::Email, String::new());

        assert!(!form.settle(first));
        assert!(!form.shows_required(Field::Email));

        assert!(form.settle(second));
        assert!(form.shows_required(Field::Email));
    }

    #[test]
    fn test_filled_required_field_hides_error() {
        let mut form = RegisterForm::new();
        let ticket = form.edit(Field::Email, "ana@example.com".to_string());
        form.settle(ticket);

        assert!(!form.shows_required(Field::Email));
        assert!(form.shows_required(Field::Password));
    }

    #[test]
    fn test_submit_blocked_on_empty_email_focuses_email() {
        let mut form = RegisterForm::new();
        assert_eq!(form.begin_submit(), SubmitAttempt::Blocked { focus: Field::Email });
        assert_eq!(form.status(), SubmitStatus::Idle);

        // Untouched form is settled, so the inline messages show right away
        assert!(form.shows_required(Field::Email));
        assert!(form.shows_required(Field::Password));
    }

    #[test]
    fn test_submit_blocked_on_empty_password_focuses_password() {
        let mut form = RegisterForm::new();
        form.edit(Field::Email, "ana@example.com".to_string());

        assert_eq!(form.begin_submit(), SubmitAttempt::Blocked { focus: Field::Password });
    }

    #[test]
    fn test_submit_proceeds_with_all_fields() {
        let mut form = filled_form();
        form.edit(Field::ContactNo, "0917".to_string());

        match form.begin_submit() {
            SubmitAttempt::Proceed(request) => {
                assert_eq!(request.email, "ana@example.com");
                assert_eq!(request.password, "s3cret!");
                assert_eq!(request.first_name, "Ana");
                assert_eq!(request.middle_name, "");
                assert_eq!(request.last_name, "Reyes");
                assert_eq!(request.contact_no, "0917");
            }
            other => panic!("expected Proceed, got {:?}", other),
        }
        assert_eq!(form.status(), SubmitStatus::Loading);
        assert_eq!(form.status().button_label(), "Loading");
    }

    #[test]
    fn test_second_submit_while_loading_is_busy() {
        let mut form = filled_form();
        assert!(matches!(form.begin_submit(), SubmitAttempt::Proceed(_)));
        assert_eq!(form.begin_submit(), SubmitAttempt::Busy);

        form.finish_submit();
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert!(matches!(form.begin_submit(), SubmitAttempt::Proceed(_)));
    }

    #[test]
    fn test_toggle_password_visibility() {
        let mut form = RegisterForm::new();
        assert!(!form.show_password());
        form.toggle_password();
        assert!(form.show_password());
        assert_eq!(Field::Password.input_type(form.show_password()), "text");
    }

    #[tokio::test(start_paused = true)]
    async fn test_required_errors_appear_once_debounce_delay_elapses() {
        let form = SharedForm::default();
        let delay = Duration::from_millis(2000);

        let ticket = form.edit(Field::FirstName, "Ana");
        let timer = tokio::spawn(settle_after(form.clone(), ticket, delay));
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_millis(1999)).await;
        tokio::task::yield_now().await;
        assert!(!form.shows_required(Field::Email));
        assert!(!form.shows_required(Field::Password));

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(timer.await.unwrap());
        assert!(form.shows_required(Field::Email));
        assert!(form.shows_required(Field::Password));
    }

    #[tokio::test(start_paused = true)]
    async fn test_edit_during_window_restarts_the_delay() {
        let form = SharedForm::default();
        let delay = Duration::from_millis(2000);

        let first = form.edit(Field::Email, "a");
        let first_timer = tokio::spawn(settle_after(form.clone(), first, delay));
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_millis(1500)).await;
        let second = form.edit(Field::Email, "");
        let second_timer = tokio::spawn(settle_after(form.clone(), second, delay));
        tokio::task::yield_now().await;

        // The first timer fires but its ticket is stale
        tokio::time::advance(Duration::from_millis(500)).await;
        assert!(!first_timer.await.unwrap());
        assert!(!form.shows_required(Field::Email));

        tokio::time::advance(Duration::from_millis(1500)).await;
        assert!(second_timer.await.unwrap());
        assert!(form.shows_required(Field::Email));
    }
}
