//! tests/form/helpers.rs

use email_capture::form::{FormValidator, SubmitOutcome};
use email_capture::page::{
    ClassList, EmailInput, ErrorMessage, ErrorVisibility, RecordingNotifier, SubmitEvent,
    TextInput, TextNode,
};
use email_capture::telemetry::{get_subscriber, init_subscriber};
use once_cell::sync::Lazy;

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    // The sink is part of the type returned by `get_subscriber`, so both
    // branches have to initialise on their own.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub const VISIBLE: &str = "cta-form__error--visible";

/// The elements of the capture form as a page would own them.
#[derive(Default)]
pub struct TestPage {
    pub input: TextInput,
    pub error_classes: ClassList,
    pub error_text: TextNode,
    pub alerts: RecordingNotifier,
}

impl TestPage {
    pub fn new() -> Self {
        Lazy::force(&TRACING);
        Self::default()
    }

    /// Types `value` into the input and submits the form.
    pub fn submit(&mut self, value: &str) -> (SubmitOutcome, SubmitEvent) {
        self.input.type_in(value);
        self.submit_as_is()
    }

    /// Submits whatever the input currently holds.
    pub fn submit_as_is(&mut self) -> (SubmitOutcome, SubmitEvent) {
        let mut event = SubmitEvent::new();
        let mut validator = FormValidator::new(
            &mut self.input,
            &mut self.error_classes,
            &mut self.error_text,
            &mut self.alerts,
        );
        let outcome = validator.handle_submit(&mut event);
        (outcome, event)
    }

    pub fn error_visible(&self) -> bool {
        self.error_classes.contains_class(VISIBLE)
    }

    pub fn error_message(&self) -> &str {
        self.error_text.text()
    }

    pub fn input_value(&self) -> &str {
        self.input.value()
    }
}
