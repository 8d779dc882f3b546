//! src/page/elements.rs

use crate::page::{EmailInput, ErrorMessage, ErrorVisibility, Notifier};

/// In-memory text input.
#[derive(Debug, Default, Clone)]
pub struct TextInput {
    value: String,
    focused: bool,
}

impl TextInput {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            focused: false,
        }
    }

    /// Simulates the user typing into the field.
    pub fn type_in(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.focused = true;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

impl EmailInput for TextInput {
    fn value(&self) -> &str {
        &self.value
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_owned();
    }

    fn blur(&mut self) {
        self.focused = false;
    }
}

/// Ordered set of class names, adding a present class does nothing.
#[derive(Debug, Default, Clone)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}

impl ErrorVisibility for ClassList {
    fn add_class(&mut self, class: &str) {
        if !self.contains_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    fn contains_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

#[derive(Debug, Default, Clone)]
pub struct TextNode {
    text: String,
}

impl TextNode {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ErrorMessage for TextNode {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_owned();
    }

    fn text(&self) -> &str {
        &self.text
    }
}

/// Keeps every acknowledgment instead of showing it.
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    messages: Vec<String>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }
}
