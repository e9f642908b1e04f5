//! Gateways for talking to the hosting service through Octocrab.
//!
//! [`RepositoryGateway`] is the narrow capability the workflow depends on:
//! exactly the six repository operations needed to open, label, and route a
//! pull request for review. [`OctocrabGateway`] issues the real HTTP
//! requests; tests substitute the generated mock.

mod client;
mod compare;
mod error_mapping;
mod labels;
mod pull_request;

pub use pull_request::OctocrabGateway;

use async_trait::async_trait;

use crate::github::error::ActionError;
use crate::github::models::{BranchComparison, CreatedPullRequest, Label, NewLabel, NewPullRequest};
use crate::github::repository::{BranchName, PullRequestNumber, RepositoryLocator};

/// Repository operations used while promoting one branch into another.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositoryGateway: Send + Sync {
    /// Compare `base...head` and return the files the head changes.
    async fn compare_branches(
        &self,
        locator: &RepositoryLocator,
        base: &BranchName,
        head: &BranchName,
    ) -> Result<BranchComparison, ActionError>;

    /// Open a pull request.
    async fn create_pull_request(
        &self,
        locator: &RepositoryLocator,
        request: &NewPullRequest,
    ) -> Result<CreatedPullRequest, ActionError>;

    /// Look up a label by name. Fails when the label does not exist.
    async fn label(&self, locator: &RepositoryLocator, name: &str) -> Result<Label, ActionError>;

    /// Create a repository label.
    async fn create_label(
        &self,
        locator: &RepositoryLocator,
        label: &NewLabel,
    ) -> Result<Label, ActionError>;

    /// Attach labels to an issue or pull request.
    async fn add_labels(
        &self,
        locator: &RepositoryLocator,
        issue: PullRequestNumber,
        labels: &[String],
    ) -> Result<(), ActionError>;

    /// Request reviews from the given users on a pull request.
    async fn request_reviewers(
        &self,
        locator: &RepositoryLocator,
        pull: PullRequestNumber,
        reviewers: &[String],
    ) -> Result<(), ActionError>;
}
