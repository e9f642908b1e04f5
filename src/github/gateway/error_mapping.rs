//! Error mapping helpers for the Octocrab gateway.

use http::StatusCode;

use crate::github::error::ActionError;

/// Checks if a GitHub error status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

/// Flattens the `errors` array GitHub attaches to validation failures
/// (e.g. "A pull request already exists for octo:feature.").
fn validation_details(source: &octocrab::GitHubError) -> Option<String> {
    let details: Vec<&str> = source
        .errors
        .as_deref()?
        .iter()
        .filter_map(|entry| {
            entry
                .get("message")
                .and_then(serde_json::Value::as_str)
                .or_else(|| entry.get("code").and_then(serde_json::Value::as_str))
        })
        .collect();

    if details.is_empty() {
        None
    } else {
        Some(details.join("; "))
    }
}

/// Maps an Octocrab failure onto [`ActionError`].
///
/// The error message is the text GitHub sent (plus any validation details)
/// so the failure report matches the rejection. The operation and status
/// are only logged.
pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> ActionError {
    if let octocrab::Error::GitHub { source, .. } = error {
        let status = source.status_code;
        tracing::warn!("{operation} rejected with status {status}: {}", source.message);

        let message = match validation_details(source) {
            Some(details) => format!("{} ({details})", source.message),
            None => source.message.clone(),
        };
        return if is_auth_failure(status) {
            ActionError::Authentication { message }
        } else {
            ActionError::Api { message }
        };
    }

    tracing::warn!("{operation} failed: {error}");
    if is_network_error(error) {
        return ActionError::Network {
            message: error.to_string(),
        };
    }

    ActionError::Api {
        message: error.to_string(),
    }
}
