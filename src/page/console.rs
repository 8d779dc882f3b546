//! src/page/console.rs

use crate::page::Notifier;
use std::io::Write;

/// Writes acknowledgments as lines to a writer, usually stdout.
pub struct ConsoleNotifier<W: Write> {
    writer: W,
}

impl<W: Write> ConsoleNotifier<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Notifier for ConsoleNotifier<W> {
    fn notify(&mut self, message: &str) {
        // A lost acknowledgment must not abort the submission.
        if let Err(e) = writeln!(self.writer, "{}", message).and_then(|_| self.writer.flush()) {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Failed to write acknowledgment"
            );
        }
    }
}
