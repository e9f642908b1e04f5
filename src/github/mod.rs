//! GitHub access for the pull request workflow.
//!
//! This module wraps Octocrab behind the [`RepositoryGateway`] trait, parses
//! the repository identity the runner provides, and maps Octocrab failures
//! into [`ActionError`] variants that carry GitHub's own message.

pub mod error;
pub mod gateway;
pub mod models;
pub mod repository;

pub use error::ActionError;
pub use gateway::{OctocrabGateway, RepositoryGateway};
pub use models::{
    BranchComparison, ChangedFile, CreatedPullRequest, Label, NewLabel, NewPullRequest,
};
pub use repository::{
    BranchName, PersonalAccessToken, PullRequestNumber, RepositoryLocator, RepositoryName,
    RepositoryOwner,
};

#[cfg(test)]
pub use gateway::MockRepositoryGateway;

#[cfg(test)]
mod tests;
