//! Error types exposed by the GitHub layer and the action boundary.

use thiserror::Error;

/// Errors surfaced while reading inputs or communicating with GitHub.
///
/// Rejections from the hosting service (`Authentication`, `Api`, `Network`)
/// display as their bare message so the failure report carries the
/// rejection text unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionError {
    /// A required action input was not supplied.
    #[error("input required and not supplied: {name}")]
    MissingInput {
        /// Input name as declared by the action (e.g. `source_branch`).
        name: &'static str,
    },

    /// The authentication token was missing or blank.
    #[error("github_token is required")]
    MissingToken,

    /// The ambient repository identifier is not `owner/name`.
    #[error("repository must be in the form owner/name: {0}")]
    InvalidRepository(String),

    /// A branch reference was blank or malformed.
    #[error("invalid branch name: {0}")]
    InvalidBranch(String),

    /// The pull request number returned by GitHub is not positive.
    #[error("pull request number must be a positive integer")]
    InvalidPullRequestNumber,

    /// The API base URL could not be parsed.
    #[error("GitHub API URL is invalid: {0}")]
    InvalidUrl(String),

    /// The authentication token was rejected by GitHub.
    #[error("{message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("{message}")]
    Api {
        /// Response detail from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("{message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Writing an output or workflow command failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}
