//! Action inputs loaded from the runner environment, CLI, and files.
//!
//! The GitHub Actions runner exports every `with:` input as an
//! `INPUT_<NAME>` environment variable, so [`ActionConfig`] uses the `INPUT`
//! prefix and picks them up without any glue. The same fields can be set
//! with CLI flags when running the binary locally.
//!
//! # Precedence
//!
//! Values are merged with the following precedence (lowest to highest):
//!
//! 1. **Defaults** – every input unset
//! 2. **Configuration file** – `.autopr.toml` in the current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `INPUT_SOURCE_BRANCH`, `INPUT_TARGET_BRANCH`,
//!    `INPUT_GITHUB_TOKEN`, `INPUT_LABEL`, `INPUT_REVIEWERS`
//! 4. **Command-line arguments** – `--source-branch`, `--target-branch`,
//!    `--github-token`, `--label`, `--reviewers`
//!
//! The repository identifier and API base are ambient: they come from
//! `GITHUB_REPOSITORY` and `GITHUB_API_URL` unless `repository` / `api_url`
//! are set through one of the layers above.

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::error::ActionError;
use crate::github::repository::{
    BranchName, DEFAULT_API_BASE, PersonalAccessToken, RepositoryLocator,
};
use crate::workflow::ReviewerList;

mod input;

/// Raw action inputs, declared in the order the action reads them.
///
/// The runner exports optional inputs that were not supplied as empty
/// strings; blank values are treated as absent throughout. Values the
/// environment layer parsed as lists, numbers, or booleans are read back as
/// text.
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "INPUT",
    discovery(
        dotfile_name = ".autopr.toml",
        config_file_name = "autopr.toml",
        app_name = "autopr"
    )
)]
pub struct ActionConfig {
    /// Head branch for the comparison and the pull request. Required.
    #[ortho_config(cli_short = 's')]
    #[serde(deserialize_with = "input::text_input")]
    pub source_branch: Option<String>,

    /// Base branch for the comparison and the pull request. Required.
    #[ortho_config(cli_short = 't')]
    #[serde(deserialize_with = "input::text_input")]
    pub target_branch: Option<String>,

    /// Token used to authenticate against GitHub. Required.
    ///
    /// Falls back to `GITHUB_TOKEN` when no other source provides it.
    #[ortho_config(cli_short = 'g')]
    #[serde(deserialize_with = "input::text_input")]
    pub github_token: Option<String>,

    /// Label to ensure exists and attach to the created pull request.
    #[ortho_config(cli_short = 'l')]
    #[serde(deserialize_with = "input::text_input")]
    pub label: Option<String>,

    /// Comma-separated reviewer logins.
    #[ortho_config(cli_short = 'r')]
    #[serde(deserialize_with = "input::text_input")]
    pub reviewers: Option<String>,

    /// `owner/name` identifier overriding `GITHUB_REPOSITORY`.
    #[ortho_config()]
    #[serde(deserialize_with = "input::text_input")]
    pub repository: Option<String>,

    /// REST API base overriding `GITHUB_API_URL`.
    #[ortho_config()]
    #[serde(deserialize_with = "input::text_input")]
    pub api_url: Option<String>,
}

/// Validated configuration for a single run. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationSettings {
    /// Repository every request is addressed to.
    pub locator: RepositoryLocator,
    /// Credential for the client.
    pub token: PersonalAccessToken,
    /// Head branch.
    pub source: BranchName,
    /// Base branch.
    pub target: BranchName,
    /// Label to ensure and attach, if any.
    pub label: Option<String>,
    /// Reviewers to request; empty skips the request.
    pub reviewers: ReviewerList,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|trimmed| !trimmed.is_empty())
}

fn non_blank_env(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .filter(|value| !value.trim().is_empty())
}

impl ActionConfig {
    /// Returns the source branch or an error if it was not supplied.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::MissingInput`] for `source_branch`.
    pub fn require_source_branch(&self) -> Result<&str, ActionError> {
        non_blank(self.source_branch.as_deref()).ok_or(ActionError::MissingInput {
            name: "source_branch",
        })
    }

    /// Returns the target branch or an error if it was not supplied.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::MissingInput`] for `target_branch`.
    pub fn require_target_branch(&self) -> Result<&str, ActionError> {
        non_blank(self.target_branch.as_deref()).ok_or(ActionError::MissingInput {
            name: "target_branch",
        })
    }

    /// Resolves the token from configuration or the `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::MissingToken`] when no source provides a value.
    pub fn resolve_token(&self) -> Result<String, ActionError> {
        non_blank(self.github_token.as_deref())
            .map(ToOwned::to_owned)
            .or_else(|| non_blank_env("GITHUB_TOKEN"))
            .ok_or(ActionError::MissingToken)
    }

    /// Label name, if one was supplied.
    #[must_use]
    pub fn label_name(&self) -> Option<&str> {
        non_blank(self.label.as_deref())
    }

    /// Reviewer logins parsed from the comma-separated input.
    #[must_use]
    pub fn reviewer_list(&self) -> ReviewerList {
        self.reviewers
            .as_deref()
            .map(ReviewerList::parse)
            .unwrap_or_default()
    }

    /// Resolves the `owner/name` identifier from configuration or
    /// `GITHUB_REPOSITORY`.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Configuration`] when neither is set.
    pub fn resolve_repository(&self) -> Result<String, ActionError> {
        non_blank(self.repository.as_deref())
            .map(ToOwned::to_owned)
            .or_else(|| non_blank_env("GITHUB_REPOSITORY"))
            .ok_or_else(|| ActionError::Configuration {
                message: "GITHUB_REPOSITORY is not set (use --repository outside a runner)"
                    .to_owned(),
            })
    }

    /// Resolves the REST API base from configuration, `GITHUB_API_URL`, or
    /// the public github.com endpoint.
    #[must_use]
    pub fn resolve_api_base(&self) -> String {
        non_blank(self.api_url.as_deref())
            .map(ToOwned::to_owned)
            .or_else(|| non_blank_env("GITHUB_API_URL"))
            .unwrap_or_else(|| DEFAULT_API_BASE.to_owned())
    }

    /// Validates the inputs into the settings for one run.
    ///
    /// Inputs are checked in declaration order, so the first missing
    /// required input is the one reported.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::MissingInput`] or [`ActionError::MissingToken`]
    /// for absent required inputs, [`ActionError::InvalidBranch`] for
    /// malformed branch names, and [`ActionError::InvalidRepository`] or
    /// [`ActionError::Configuration`] when the repository cannot be resolved.
    pub fn to_settings(&self) -> Result<InvocationSettings, ActionError> {
        let source = BranchName::new(self.require_source_branch()?)?;
        let target = BranchName::new(self.require_target_branch()?)?;
        let token = PersonalAccessToken::new(self.resolve_token()?)?;
        let label = self.label_name().map(ToOwned::to_owned);
        let reviewers = self.reviewer_list();

        let identifier = self.resolve_repository()?;
        let locator = RepositoryLocator::from_identifier(&identifier, &self.resolve_api_base())?;

        Ok(InvocationSettings {
            locator,
            token,
            source,
            target,
            label,
            reviewers,
        })
    }
}

#[cfg(test)]
mod tests;
