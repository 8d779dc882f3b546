//! src/terminal.rs

use crate::configuration::FormSettings;
use crate::error::AppResult;
use crate::form::{FormValidator, SubmitOutcome};
use crate::page::{ClassList, ConsoleNotifier, ErrorMessage, SubmitEvent, TextInput, TextNode};
use anyhow::Context;
use std::io::{BufRead, Write};

/// Counts of what happened during one terminal session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub submitted: usize,
    pub rejected: usize,
}

/// Drives the form from a line-based reader.
///
/// Every line is typed into the input and submitted. A visible error is
/// rendered on `errors`, acknowledgments go to `output`.
#[tracing::instrument(name = "Running terminal form session.", skip_all)]
pub fn run_form<R, W, E>(
    reader: R,
    output: W,
    mut errors: E,
    settings: &FormSettings,
) -> AppResult<SessionSummary>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut validator = FormValidator::new(
        TextInput::default(),
        ClassList::new(),
        TextNode::new(),
        ConsoleNotifier::new(output),
    )
    .with_visible_class(settings.visible_class.clone());
    let mut summary = SessionSummary::default();

    if settings.show_prompt {
        write!(errors, "{}", settings.prompt)?;
        errors.flush()?;
    }
    for line in reader.lines() {
        let line = line.context("Failed to read a line from the terminal")?;
        validator
            .input_mut()
            .type_in(line.trim_end_matches('\r'));

        match validator.handle_submit(&mut SubmitEvent::new()) {
            SubmitOutcome::Submitted(_) => summary.submitted += 1,
            SubmitOutcome::Rejected(_) => summary.rejected += 1,
        }
        if validator.error_shown() {
            writeln!(errors, "{}", validator.error_message().text())?;
        }
        if settings.show_prompt {
            write!(errors, "{}", settings.prompt)?;
            errors.flush()?;
        }
    }
    tracing::info!(
        submitted = summary.submitted,
        rejected = summary.rejected,
        "Terminal session finished"
    );
    Ok(summary)
}
