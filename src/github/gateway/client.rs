//! Octocrab client construction for the gateway.

use http::Uri;
use octocrab::Octocrab;

use crate::github::error::ActionError;
use crate::github::repository::PersonalAccessToken;

use super::error_mapping::map_octocrab_error;

/// Builds an Octocrab client authenticated with the action's token.
///
/// `api_base` is the locator's REST base: `https://api.github.com` by
/// default, or the runner's `GITHUB_API_URL` (e.g.
/// `https://ghes.example.com/api/v3`) on GitHub Enterprise Server. Routes
/// built by the locator are relative to it.
///
/// # Errors
///
/// Returns `ActionError::InvalidUrl` when the base URI cannot be parsed or
/// `ActionError::Api` when Octocrab fails to construct a client.
pub(super) fn build_octocrab_client(
    token: &PersonalAccessToken,
    api_base: &str,
) -> Result<Octocrab, ActionError> {
    let base_uri: Uri = api_base
        .parse::<Uri>()
        .map_err(|error| ActionError::InvalidUrl(error.to_string()))?;

    Octocrab::builder()
        .personal_token(token.as_ref())
        .base_uri(base_uri)
        .map_err(|error| ActionError::Api {
            message: format!("build client failed: {error}"),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}
