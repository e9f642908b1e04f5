//! Octocrab implementation of the repository gateway.

use async_trait::async_trait;
use octocrab::Octocrab;

use crate::github::error::ActionError;
use crate::github::models::{
    ApiPullRequest, ApiReviewersRequest, BranchComparison, CreatedPullRequest, Label, NewLabel,
    NewPullRequest,
};
use crate::github::repository::{
    BranchName, PersonalAccessToken, PullRequestNumber, RepositoryLocator,
};

use super::RepositoryGateway;
use super::client::build_octocrab_client;
use super::error_mapping::map_octocrab_error;
use super::{compare, labels};

/// Octocrab-backed gateway.
pub struct OctocrabGateway {
    client: Octocrab,
}

impl OctocrabGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab client for the given token, addressed at the
    /// locator's API base.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::InvalidUrl` when the base URI cannot be parsed or
    /// `ActionError::Api` when Octocrab fails to construct a client.
    pub fn for_token(
        token: &PersonalAccessToken,
        locator: &RepositoryLocator,
    ) -> Result<Self, ActionError> {
        let octocrab = build_octocrab_client(token, locator.api_base().as_str())?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl RepositoryGateway for OctocrabGateway {
    async fn compare_branches(
        &self,
        locator: &RepositoryLocator,
        base: &BranchName,
        head: &BranchName,
    ) -> Result<BranchComparison, ActionError> {
        compare::compare_branches(&self.client, locator, base, head).await
    }

    async fn create_pull_request(
        &self,
        locator: &RepositoryLocator,
        request: &NewPullRequest,
    ) -> Result<CreatedPullRequest, ActionError> {
        let created: ApiPullRequest = self
            .client
            .post(locator.pulls_path(), Some(request))
            .await
            .map_err(|error| map_octocrab_error("create pull request", &error))?;
        CreatedPullRequest::try_from(created)
    }

    async fn label(&self, locator: &RepositoryLocator, name: &str) -> Result<Label, ActionError> {
        labels::fetch_label(&self.client, locator, name).await
    }

    async fn create_label(
        &self,
        locator: &RepositoryLocator,
        label: &NewLabel,
    ) -> Result<Label, ActionError> {
        labels::create_label(&self.client, locator, label).await
    }

    async fn add_labels(
        &self,
        locator: &RepositoryLocator,
        issue: PullRequestNumber,
        labels: &[String],
    ) -> Result<(), ActionError> {
        labels::add_labels(&self.client, locator, issue, labels).await
    }

    async fn request_reviewers(
        &self,
        locator: &RepositoryLocator,
        pull: PullRequestNumber,
        reviewers: &[String],
    ) -> Result<(), ActionError> {
        let body = ApiReviewersRequest { reviewers };
        let _updated: serde_json::Value = self
            .client
            .post(locator.requested_reviewers_path(pull), Some(&body))
            .await
            .map_err(|error| map_octocrab_error("request reviewers", &error))?;
        Ok(())
    }
}
