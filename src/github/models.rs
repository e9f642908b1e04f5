//! Data models for branch comparisons, pull requests, and labels.

use serde::{Deserialize, Serialize};

use super::error::ActionError;
use super::repository::PullRequestNumber;

/// A file that differs between the compared branches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedFile {
    /// Path of the file within the repository.
    pub filename: String,
    /// Change kind reported by GitHub (e.g. `added`, `modified`).
    pub status: Option<String>,
}

/// Result of comparing a base branch with a head branch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchComparison {
    /// Files changed on the head relative to the base.
    pub changed_files: Vec<ChangedFile>,
}

impl BranchComparison {
    /// Returns `true` when the head introduces no file changes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.changed_files.is_empty()
    }
}

/// Request body for opening a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPullRequest {
    /// Pull request title.
    pub title: String,
    /// Pull request description.
    pub body: String,
    /// Branch containing the changes.
    pub head: String,
    /// Branch the changes merge into.
    pub base: String,
}

/// The pull request GitHub created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPullRequest {
    /// Pull request number, shared with its issue.
    pub number: PullRequestNumber,
    /// HTML URL for displaying to a user.
    pub html_url: String,
    /// Title as stored by GitHub.
    pub title: String,
}

/// A repository label as returned by GitHub.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Label {
    /// Label name.
    pub name: String,
    /// Hex color without the leading `#`.
    #[serde(default)]
    pub color: Option<String>,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Request body for creating a repository label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewLabel {
    /// Label name.
    pub name: String,
    /// Hex color without the leading `#`.
    pub color: String,
    /// Label description.
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiComparison {
    #[serde(default)]
    pub(super) files: Option<Vec<ApiChangedFile>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiChangedFile {
    #[serde(default)]
    pub(super) filename: String,
    pub(super) status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiPullRequest {
    pub(super) number: u64,
    pub(super) title: Option<String>,
    pub(super) html_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub(super) struct ApiLabelsRequest<'a> {
    pub(super) labels: &'a [String],
}

#[derive(Debug, Clone, Serialize)]
pub(super) struct ApiReviewersRequest<'a> {
    pub(super) reviewers: &'a [String],
}

impl From<ApiComparison> for BranchComparison {
    fn from(value: ApiComparison) -> Self {
        let changed_files = value
            .files
            .unwrap_or_default()
            .into_iter()
            .map(|file| ChangedFile {
                filename: file.filename,
                status: file.status,
            })
            .collect();
        Self { changed_files }
    }
}

impl TryFrom<ApiPullRequest> for CreatedPullRequest {
    type Error = ActionError;

    fn try_from(value: ApiPullRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            number: PullRequestNumber::new(value.number)?,
            html_url: value.html_url.unwrap_or_default(),
            title: value.title.unwrap_or_default(),
        })
    }
}
