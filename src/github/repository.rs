//! Identity wrappers for the repository, branches, and credentials the
//! action works against.

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use url::Url;

use super::error::ActionError;

/// Default REST endpoint for github.com.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Characters left untouched when a value is placed in a single path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Result<Self, ActionError> {
        if value.is_empty() {
            return Err(ActionError::InvalidRepository(value.to_owned()));
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Result<Self, ActionError> {
        if value.is_empty() {
            return Err(ActionError::InvalidRepository(value.to_owned()));
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// A branch reference used as the head or base of a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchName(String);

impl BranchName {
    /// Validates that the branch reference is non-blank and trims it.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidBranch`] when the value is blank or
    /// contains whitespace.
    pub fn new(value: impl AsRef<str>) -> Result<Self, ActionError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() || trimmed.chars().any(char::is_whitespace) {
            return Err(ActionError::InvalidBranch(value.as_ref().to_owned()));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the branch name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

/// Pull request (and issue) number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullRequestNumber(u64);

impl PullRequestNumber {
    /// Wraps a number returned by GitHub.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidPullRequestNumber`] for zero.
    pub const fn new(value: u64) -> Result<Self, ActionError> {
        if value == 0 {
            return Err(ActionError::InvalidPullRequestNumber);
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Personal access token wrapper enforcing presence.
///
/// `Debug` output never includes the token value.
#[derive(Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, ActionError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ActionError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

impl fmt::Debug for PersonalAccessToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("PersonalAccessToken(***)")
    }
}

/// Repository identity and API base every call is addressed to.
///
/// # Example
///
/// ```
/// use autopr::github::repository::RepositoryLocator;
///
/// let locator = RepositoryLocator::from_identifier("octo/repo", "https://api.github.com")
///     .expect("should parse repository identifier");
/// assert_eq!(locator.owner().as_str(), "octo");
/// assert_eq!(locator.repository().as_str(), "repo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    api_base: Url,
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl RepositoryLocator {
    /// Parses an `owner/name` identifier such as the runner's
    /// `GITHUB_REPOSITORY`.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidRepository`] unless the identifier splits
    /// into exactly two non-empty components, or [`ActionError::InvalidUrl`]
    /// when `api_base` cannot be parsed.
    pub fn from_identifier(identifier: &str, api_base: &str) -> Result<Self, ActionError> {
        let trimmed = identifier.trim();
        let (owner_part, name_part) = trimmed
            .split_once('/')
            .ok_or_else(|| ActionError::InvalidRepository(identifier.to_owned()))?;
        if name_part.contains('/') {
            return Err(ActionError::InvalidRepository(identifier.to_owned()));
        }

        let owner = RepositoryOwner::new(owner_part)
            .map_err(|_| ActionError::InvalidRepository(identifier.to_owned()))?;
        let repository = RepositoryName::new(name_part)
            .map_err(|_| ActionError::InvalidRepository(identifier.to_owned()))?;
        let api_base =
            Url::parse(api_base).map_err(|error| ActionError::InvalidUrl(error.to_string()))?;

        Ok(Self {
            api_base,
            owner,
            repository,
        })
    }

    /// API base URL the client is built against.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    fn repo_path(&self) -> String {
        format!(
            "/repos/{}/{}",
            encode_segment(self.owner.as_str()),
            encode_segment(self.repository.as_str())
        )
    }

    pub(crate) fn compare_path(&self, base: &BranchName, head: &BranchName) -> String {
        format!(
            "{}/compare/{}...{}",
            self.repo_path(),
            encode_segment(base.as_str()),
            encode_segment(head.as_str())
        )
    }

    pub(crate) fn pulls_path(&self) -> String {
        format!("{}/pulls", self.repo_path())
    }

    pub(crate) fn labels_path(&self) -> String {
        format!("{}/labels", self.repo_path())
    }

    pub(crate) fn label_path(&self, name: &str) -> String {
        format!("{}/labels/{}", self.repo_path(), encode_segment(name))
    }

    pub(crate) fn issue_labels_path(&self, number: PullRequestNumber) -> String {
        format!("{}/issues/{}/labels", self.repo_path(), number.get())
    }

    pub(crate) fn requested_reviewers_path(&self, number: PullRequestNumber) -> String {
        format!(
            "{}/pulls/{}/requested_reviewers",
            self.repo_path(),
            number.get()
        )
    }
}
