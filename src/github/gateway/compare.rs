//! Branch comparison request.

use octocrab::Octocrab;

use crate::github::error::ActionError;
use crate::github::models::{ApiComparison, BranchComparison};
use crate::github::repository::{BranchName, RepositoryLocator};

use super::error_mapping::map_octocrab_error;

pub(super) async fn compare_branches(
    client: &Octocrab,
    locator: &RepositoryLocator,
    base: &BranchName,
    head: &BranchName,
) -> Result<BranchComparison, ActionError> {
    client
        .get::<ApiComparison, _, _>(locator.compare_path(base, head), None::<&()>)
        .await
        .map(ApiComparison::into)
        .map_err(|error| map_octocrab_error("compare branches", &error))
}
