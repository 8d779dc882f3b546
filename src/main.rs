//! main.rs

use email_capture::configuration::get_configuration;
use email_capture::error::AppResult;
use email_capture::telemetry::{get_subscriber, init_subscriber};
use email_capture::terminal::run_form;

fn main() -> AppResult<()> {
    let configuration = get_configuration()?;
    // Logs go to stderr, stdout only carries acknowledgments
    let subscriber = get_subscriber(
        configuration.application.name.clone(),
        configuration.application.log_level.clone(),
        std::io::stderr,
    );
    init_subscriber(subscriber);

    let stdin = std::io::stdin();
    match run_form(
        stdin.lock(),
        std::io::stdout(),
        std::io::stderr(),
        &configuration.form,
    ) {
        Ok(summary) => {
            tracing::info!(
                submitted = summary.submitted,
                rejected = summary.rejected,
                "Email form has exited"
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Email form failed"
            );
            Err(e)
        }
    }
}
