//! tests/form/terminal.rs

use claims::assert_ok;
use email_capture::configuration::FormSettings;
use email_capture::terminal::run_form;

fn form_settings() -> FormSettings {
    FormSettings {
        visible_class: "cta-form__error--visible".to_string(),
        prompt: String::new(),
        show_prompt: false,
    }
}

#[test]
fn terminal_session_reports_errors_and_acknowledgments() {
    let input = "not-an-email\n\ntest@example.com\na@b\n";
    let mut output = Vec::new();
    let mut errors = Vec::new();

    let summary = assert_ok!(run_form(
        input.as_bytes(),
        &mut output,
        &mut errors,
        &form_settings()
    ));

    assert_eq!(summary.submitted, 2);
    assert_eq!(summary.rejected, 2);
    assert_eq!(
        String::from_utf8(output).unwrap(),
        "Submitted email address: test@example.com\nSubmitted email address: a@b\n"
    );
    assert_eq!(
        String::from_utf8(errors).unwrap(),
        "Oops! Please check your email\nOops! Please add your email\n"
    );
}

#[test]
fn empty_session_submits_nothing() {
    let summary = assert_ok!(run_form(
        "".as_bytes(),
        std::io::sink(),
        std::io::sink(),
        &form_settings()
    ));
    assert_eq!(summary.submitted + summary.rejected, 0);
}
