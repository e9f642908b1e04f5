//! Autopr library crate: opens a pull request between two branches from a
//! CI step.
//!
//! The library compares the branches through Octocrab, opens a pull request
//! when the source has changes, optionally labels it and requests
//! reviewers, and reports the result through GitHub Actions workflow
//! commands.

pub mod actions;
pub mod config;
pub mod github;
pub mod workflow;

pub use actions::{
    ActionOutput, ActionReporter, RunStatus, WorkflowCommandReporter, report_result,
};
pub use config::{ActionConfig, InvocationSettings};
pub use github::{
    ActionError, CreatedPullRequest, OctocrabGateway, PersonalAccessToken, RepositoryGateway,
    RepositoryLocator,
};
pub use workflow::{PullRequestWorkflow, ReviewerList, WorkflowOutcome};
