//! Label lookup, creation, and assignment requests.

use octocrab::Octocrab;

use crate::github::error::ActionError;
use crate::github::models::{ApiLabelsRequest, Label, NewLabel};
use crate::github::repository::{PullRequestNumber, RepositoryLocator};

use super::error_mapping::map_octocrab_error;

pub(super) async fn fetch_label(
    client: &Octocrab,
    locator: &RepositoryLocator,
    name: &str,
) -> Result<Label, ActionError> {
    client
        .get::<Label, _, _>(locator.label_path(name), None::<&()>)
        .await
        .map_err(|error| map_octocrab_error("get label", &error))
}

pub(super) async fn create_label(
    client: &Octocrab,
    locator: &RepositoryLocator,
    label: &NewLabel,
) -> Result<Label, ActionError> {
    let created: Label = client
        .post(locator.labels_path(), Some(label))
        .await
        .map_err(|error| map_octocrab_error("create label", &error))?;
    Ok(created)
}

pub(super) async fn add_labels(
    client: &Octocrab,
    locator: &RepositoryLocator,
    issue: PullRequestNumber,
    labels: &[String],
) -> Result<(), ActionError> {
    let body = ApiLabelsRequest { labels };
    let _assigned: Vec<Label> = client
        .post(locator.issue_labels_path(issue), Some(&body))
        .await
        .map_err(|error| map_octocrab_error("add labels", &error))?;
    Ok(())
}
