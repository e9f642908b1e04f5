//! Reporting a run's result through the CI host.
//!
//! The workflow returns a `Result`; this module turns it into the host's
//! conventions: named outputs on success, a single failure message
//! otherwise. [`WorkflowCommandReporter`] speaks GitHub Actions workflow
//! commands.

mod commands;

pub use commands::{WorkflowCommandReporter, escape_data, escape_property};

use crate::github::error::ActionError;
use crate::workflow::WorkflowOutcome;

/// Output carrying the created pull request's URL.
pub const URL_OUTPUT: &str = "url";

/// Output carrying the created pull request's title.
pub const TITLE_OUTPUT: &str = "title";

/// A named output value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutput {
    /// Output name declared by the action.
    pub name: &'static str,
    /// Output value.
    pub value: String,
}

impl ActionOutput {
    /// Creates an output entry.
    #[must_use]
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// A sink for action outputs and failures.
#[cfg_attr(test, mockall::automock)]
pub trait ActionReporter {
    /// Records every output in `outputs`, in order, as one batch.
    ///
    /// Implementations write the batch in a single operation so a failure
    /// does not leave some of the outputs behind.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Io`] when the outputs cannot be written.
    fn set_outputs(&mut self, outputs: &[ActionOutput]) -> Result<(), ActionError>;

    /// Marks the run as failed with `message`.
    fn set_failed(&mut self, message: &str);
}

/// Final status after reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Nothing to do, or the pull request was created and reported.
    Succeeded,
    /// A failure was reported.
    Failed,
}

/// Reports `result` through `reporter`.
///
/// A created pull request yields the `url` output followed by `title`, both
/// in one batch. An error yields exactly one failure carrying the error's
/// message, and no outputs.
pub fn report_result<Reporter>(
    result: Result<WorkflowOutcome, ActionError>,
    reporter: &mut Reporter,
) -> RunStatus
where
    Reporter: ActionReporter + ?Sized,
{
    let outputs = result.and_then(|outcome| match outcome {
        WorkflowOutcome::NoChanges => Ok(()),
        WorkflowOutcome::Created(created) => reporter.set_outputs(&[
            ActionOutput::new(URL_OUTPUT, created.html_url),
            ActionOutput::new(TITLE_OUTPUT, created.title),
        ]),
    });

    match outputs {
        Ok(()) => RunStatus::Succeeded,
        Err(error) => {
            reporter.set_failed(&error.to_string());
            RunStatus::Failed
        }
    }
}
