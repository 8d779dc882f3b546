//! src/domain/mod.rs

mod subscriber_email;

pub use subscriber_email::SubscriberEmail;

/// Message shown when the form is submitted without an email.
pub const EMPTY_INPUT_MESSAGE: &str = "Oops! Please add your email";
/// Message shown when the submitted email does not look like an address.
pub const MALFORMED_INPUT_MESSAGE: &str = "Oops! Please check your email";

/// Validation error for the email field
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No email was entered.")]
    EmptyInput,
    #[error("`{0}` is not a valid subscriber email.")]
    MalformedInput(String),
}

impl ValidationError {
    /// Fixed text displayed next to the form.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::EmptyInput => EMPTY_INPUT_MESSAGE,
            ValidationError::MalformedInput(_) => MALFORMED_INPUT_MESSAGE,
        }
    }
}
