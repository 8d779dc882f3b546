//! src/form.rs

use crate::domain::{SubscriberEmail, ValidationError};
use crate::page::{EmailInput, ErrorMessage, ErrorVisibility, Notifier, SubmitEvent};

/// Class that makes the error container visible.
pub const ERROR_VISIBLE_CLASS: &str = "cta-form__error--visible";

/// What a single submission ended with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted(SubscriberEmail),
    Rejected(ValidationError),
}

/// Handles submissions of the email-capture form.
///
/// The input element, both parts of the error display and the acknowledgment
/// channel are handed in on construction; pass `&mut` references to keep
/// ownership with the page.
pub struct FormValidator<I, V, M, N> {
    input: I,
    error_visibility: V,
    error_message: M,
    notifier: N,
    visible_class: String,
}

impl<I, V, M, N> FormValidator<I, V, M, N>
where
    I: EmailInput,
    V: ErrorVisibility,
    M: ErrorMessage,
    N: Notifier,
{
    pub fn new(input: I, error_visibility: V, error_message: M, notifier: N) -> Self {
        Self {
            input,
            error_visibility,
            error_message,
            notifier,
            visible_class: ERROR_VISIBLE_CLASS.to_owned(),
        }
    }

    pub fn with_visible_class(mut self, class: impl Into<String>) -> Self {
        self.visible_class = class.into();
        self
    }

    #[tracing::instrument(
        name = "Handling email form submission.",
        skip(self, event),
        fields(subscriber_email = %self.input.value())
    )]
    pub fn handle_submit(&mut self, event: &mut SubmitEvent) -> SubmitOutcome {
        event.prevent_default();
        self.clear_error();
        match SubscriberEmail::parse(self.input.value().to_owned()) {
            Ok(email) => {
                self.submit(&email);
                self.input.set_value("");
                tracing::info!("Email submitted");
                SubmitOutcome::Submitted(email)
            }
            Err(err) => {
                self.show_error(err.user_message());
                tracing::warn!(error.message = %err, "Email rejected");
                SubmitOutcome::Rejected(err)
            }
        }
    }

    fn show_error(&mut self, message: &str) {
        self.error_visibility.add_class(&self.visible_class);
        self.error_message.set_text(message);
    }

    fn clear_error(&mut self) {
        self.error_visibility.remove_class(&self.visible_class);
        self.error_message.set_text("");
    }

    fn submit(&mut self, email: &SubscriberEmail) {
        self.clear_error();
        self.notifier
            .notify(&format!("Submitted email address: {}", email.as_ref()));
        self.input.blur();
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn error_visibility(&self) -> &V {
        &self.error_visibility
    }

    pub fn error_message(&self) -> &M {
        &self.error_message
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// true if the error container currently carries the visible class
    pub fn error_shown(&self) -> bool {
        self.error_visibility.contains_class(&self.visible_class)
    }

    pub fn into_parts(self) -> (I, V, M, N) {
        (
            self.input,
            self.error_visibility,
            self.error_message,
            self.notifier,
        )
    }
}
