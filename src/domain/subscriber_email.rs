//! src/domain/subscriber_email.rs

use crate::domain::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

// local-part@label(.label)*, a single label domain is accepted
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9-]+(?:\.[a-zA-Z0-9-]+)*$")
        .expect("email pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    /// Checks emptiness first, then the address pattern.
    pub fn parse(s: String) -> Result<SubscriberEmail, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::EmptyInput);
        }
        if !EMAIL_REGEX.is_match(&s) {
            return Err(ValidationError::MalformedInput(s));
        }
        Ok(Self(s))
    }
}

impl TryFrom<String> for SubscriberEmail {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl From<SubscriberEmail> for String {
    fn from(value: SubscriberEmail) -> Self {
        value.0
    }
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubscriberEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
