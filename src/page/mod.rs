//! src/page/mod.rs
//!
//! Collaborators the form validator works against. The traits describe the
//! handful of element operations it needs, so the validator can be driven by
//! a real page, a terminal session, or a test.

mod console;
mod elements;
mod event;

pub use console::ConsoleNotifier;
pub use elements::{ClassList, RecordingNotifier, TextInput, TextNode};
pub use event::SubmitEvent;

/// A text input holding the email.
pub trait EmailInput {
    fn value(&self) -> &str;
    fn set_value(&mut self, value: &str);
    /// Removes input focus.
    fn blur(&mut self);
}

/// Presentational classes of the error container.
pub trait ErrorVisibility {
    fn add_class(&mut self, class: &str);
    fn remove_class(&mut self, class: &str);
    fn contains_class(&self, class: &str) -> bool;
}

/// Text node holding the error message.
pub trait ErrorMessage {
    fn set_text(&mut self, text: &str);
    fn text(&self) -> &str;
}

/// One-shot acknowledgment shown to the user.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

impl<T: EmailInput + ?Sized> EmailInput for &mut T {
    fn value(&self) -> &str {
        (**self).value()
    }

    fn set_value(&mut self, value: &str) {
        (**self).set_value(value)
    }

    fn blur(&mut self) {
        (**self).blur()
    }
}

impl<T: ErrorVisibility + ?Sized> ErrorVisibility for &mut T {
    fn add_class(&mut self, class: &str) {
        (**self).add_class(class)
    }

    fn remove_class(&mut self, class: &str) {
        (**self).remove_class(class)
    }

    fn contains_class(&self, class: &str) -> bool {
        (**self).contains_class(class)
    }
}

impl<T: ErrorMessage + ?Sized> ErrorMessage for &mut T {
    fn set_text(&mut self, text: &str) {
        (**self).set_text(text)
    }

    fn text(&self) -> &str {
        (**self).text()
    }
}

impl<T: Notifier + ?Sized> Notifier for &mut T {
    fn notify(&mut self, message: &str) {
        (**self).notify(message)
    }
}
