//! Autopr entrypoint: one pull request workflow run per invocation.

use std::io;
use std::process::ExitCode;

use autopr::{
    ActionConfig, ActionError, OctocrabGateway, PullRequestWorkflow, RunStatus,
    WorkflowCommandReporter, WorkflowOutcome, report_result,
};
use ortho_config::OrthoConfig;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "autopr=info";

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let mut reporter = WorkflowCommandReporter::for_runner();
    match report_result(run().await, &mut reporter) {
        RunStatus::Succeeded => ExitCode::SUCCESS,
        RunStatus::Failed => ExitCode::FAILURE,
    }
}

async fn run() -> Result<WorkflowOutcome, ActionError> {
    let config = load_config()?;
    let settings = config.to_settings()?;

    let gateway = OctocrabGateway::for_token(&settings.token, &settings.locator)?;
    let workflow = PullRequestWorkflow::new(&gateway);
    workflow.run(&settings).await
}

/// Logs go to stderr so stdout carries only workflow commands.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Loads inputs from CLI, environment, and configuration files.
///
/// # Errors
///
/// Returns [`ActionError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ActionConfig, ActionError> {
    ActionConfig::load().map_err(|error| ActionError::Configuration {
        message: error.to_string(),
    })
}
