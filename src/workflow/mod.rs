//! The pull request workflow executed once per action run.
//!
//! A run compares the target branch with the source branch and, when the
//! source introduces changes, opens a pull request, then optionally labels
//! it and requests reviewers. Every gateway call is awaited in turn; the
//! first rejection ends the run and is returned to the caller unchanged.

mod reviewers;

pub use reviewers::ReviewerList;

use std::slice;

use crate::config::InvocationSettings;
use crate::github::error::ActionError;
use crate::github::gateway::RepositoryGateway;
use crate::github::models::{CreatedPullRequest, NewLabel, NewPullRequest};
use crate::github::repository::{BranchName, RepositoryLocator};

/// Color given to a label the workflow has to create.
pub const LABEL_COLOR: &str = "27ff28";

/// Description given to a label the workflow has to create.
pub const LABEL_DESCRIPTION: &str =
    "Pull requests marked with this label will be automatically merged on approval";

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowOutcome {
    /// The source branch has no file changes relative to the target.
    NoChanges,
    /// A pull request was opened (and labelled / routed when configured).
    Created(CreatedPullRequest),
}

/// Builds the pull request opened for `source` into `target`.
#[must_use]
pub fn pull_request_for(source: &BranchName, target: &BranchName) -> NewPullRequest {
    NewPullRequest {
        title: format!("Merge {source} into {target}"),
        body: format!("Automated pull request merging `{source}` into `{target}`."),
        head: source.as_str().to_owned(),
        base: target.as_str().to_owned(),
    }
}

/// Runs the workflow against a gateway.
pub struct PullRequestWorkflow<'client, Gateway>
where
    Gateway: RepositoryGateway,
{
    client: &'client Gateway,
}

impl<'client, Gateway> PullRequestWorkflow<'client, Gateway>
where
    Gateway: RepositoryGateway,
{
    /// Create a workflow using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway) -> Self {
        Self { client }
    }

    /// Execute the run described by `settings`.
    ///
    /// # Errors
    ///
    /// Propagates the first failure from the gateway. A failed label lookup
    /// is not a failure: it means the label is absent and gets created.
    pub async fn run(&self, settings: &InvocationSettings) -> Result<WorkflowOutcome, ActionError> {
        let locator = &settings.locator;

        let comparison = self
            .client
            .compare_branches(locator, &settings.target, &settings.source)
            .await?;
        if comparison.is_empty() {
            tracing::info!(
                "no file changes between {} and {}; skipping pull request",
                settings.target,
                settings.source
            );
            return Ok(WorkflowOutcome::NoChanges);
        }
        tracing::info!(
            "{} changed file(s) between {} and {}",
            comparison.changed_files.len(),
            settings.target,
            settings.source
        );

        let request = pull_request_for(&settings.source, &settings.target);
        let created = self.client.create_pull_request(locator, &request).await?;
        tracing::info!(
            "opened pull request #{}: {}",
            created.number.get(),
            created.html_url
        );

        if let Some(label) = settings.label.as_ref() {
            self.ensure_label(locator, label).await?;
            self.client
                .add_labels(locator, created.number, slice::from_ref(label))
                .await?;
            tracing::info!("labelled pull request #{} with {label}", created.number.get());
        }

        if !settings.reviewers.is_empty() {
            self.client
                .request_reviewers(locator, created.number, settings.reviewers.as_slice())
                .await?;
            tracing::info!(
                "requested review from {} on pull request #{}",
                settings.reviewers.as_slice().join(", "),
                created.number.get()
            );
        }

        Ok(WorkflowOutcome::Created(created))
    }

    async fn ensure_label(
        &self,
        locator: &RepositoryLocator,
        name: &str,
    ) -> Result<(), ActionError> {
        match self.client.label(locator, name).await {
            Ok(_existing) => Ok(()),
            Err(error) => {
                tracing::debug!("label {name} treated as absent: {error}");
                let label = NewLabel {
                    name: name.to_owned(),
                    color: LABEL_COLOR.to_owned(),
                    description: LABEL_DESCRIPTION.to_owned(),
                };
                self.client.create_label(locator, &label).await?;
                tracing::info!("created label {name}");
                Ok(())
            }
        }
    }
}
