//! Unit tests for repository identity parsing.

use rstest::rstest;

use super::{ActionError, BranchName, PersonalAccessToken, PullRequestNumber, RepositoryLocator};

const API_BASE: &str = "https://api.github.com";

fn sample_locator() -> RepositoryLocator {
    RepositoryLocator::from_identifier("a/b", API_BASE).expect("sample locator should parse")
}

#[rstest]
fn parses_owner_and_repository() {
    let locator = RepositoryLocator::from_identifier("octo/repo", API_BASE)
        .expect("should parse owner/name identifier");
    assert_eq!(locator.owner().as_str(), "octo", "owner mismatch");
    assert_eq!(locator.repository().as_str(), "repo", "repository mismatch");
    assert_eq!(
        locator.api_base().as_str(),
        "https://api.github.com/",
        "api base mismatch"
    );
}

#[rstest]
fn keeps_enterprise_api_base() {
    let locator = RepositoryLocator::from_identifier("octo/repo", "https://ghe.example.com/api/v3")
        .expect("should parse enterprise API base");
    assert_eq!(
        locator.api_base().as_str(),
        "https://ghe.example.com/api/v3",
        "enterprise api base mismatch"
    );
}

#[rstest]
#[case::no_separator("octo")]
#[case::empty_owner("/repo")]
#[case::empty_name("octo/")]
#[case::three_components("octo/repo/extra")]
#[case::blank("")]
fn rejects_malformed_identifier(#[case] identifier: &str) {
    let result = RepositoryLocator::from_identifier(identifier, API_BASE);
    assert!(
        matches!(result, Err(ActionError::InvalidRepository(_))),
        "expected InvalidRepository for {identifier:?}, got {result:?}"
    );
}

#[rstest]
fn rejects_invalid_api_base() {
    let result = RepositoryLocator::from_identifier("octo/repo", "not a url");
    assert!(
        matches!(result, Err(ActionError::InvalidUrl(_))),
        "expected InvalidUrl, got {result:?}"
    );
}

#[rstest]
fn builds_compare_route_with_base_first() {
    let locator = sample_locator();
    let base = BranchName::new("main").expect("base should be valid");
    let head = BranchName::new("develop").expect("head should be valid");
    assert_eq!(
        locator.compare_path(&base, &head),
        "/repos/a/b/compare/main...develop"
    );
}

#[rstest]
fn encodes_branch_names_with_slashes() {
    let locator = sample_locator();
    let base = BranchName::new("main").expect("base should be valid");
    let head = BranchName::new("release/1.2").expect("head should be valid");
    assert_eq!(
        locator.compare_path(&base, &head),
        "/repos/a/b/compare/main...release%2F1.2"
    );
}

#[rstest]
fn encodes_label_names() {
    let locator = sample_locator();
    assert_eq!(
        locator.label_path("auto merge"),
        "/repos/a/b/labels/auto%20merge"
    );
}

#[rstest]
fn builds_issue_and_review_routes() {
    let locator = sample_locator();
    let number = PullRequestNumber::new(1000).expect("number should be valid");
    assert_eq!(locator.pulls_path(), "/repos/a/b/pulls");
    assert_eq!(locator.labels_path(), "/repos/a/b/labels");
    assert_eq!(
        locator.issue_labels_path(number),
        "/repos/a/b/issues/1000/labels"
    );
    assert_eq!(
        locator.requested_reviewers_path(number),
        "/repos/a/b/pulls/1000/requested_reviewers"
    );
}

#[rstest]
#[case::blank("   ")]
#[case::inner_space("feature branch")]
fn rejects_invalid_branch(#[case] value: &str) {
    let result = BranchName::new(value);
    assert!(
        matches!(result, Err(ActionError::InvalidBranch(_))),
        "expected InvalidBranch for {value:?}, got {result:?}"
    );
}

#[rstest]
fn trims_branch_name() {
    let branch = BranchName::new(" develop ").expect("branch should be valid");
    assert_eq!(branch.as_str(), "develop");
}

#[rstest]
fn rejects_zero_pull_request_number() {
    let result = PullRequestNumber::new(0);
    assert!(
        matches!(result, Err(ActionError::InvalidPullRequestNumber)),
        "expected InvalidPullRequestNumber, got {result:?}"
    );
}

#[rstest]
fn rejects_empty_token() {
    let result = PersonalAccessToken::new(String::new());
    assert!(
        matches!(result, Err(ActionError::MissingToken)),
        "expected MissingToken, got {result:?}"
    );
}

#[rstest]
fn token_debug_output_is_redacted() {
    let token = PersonalAccessToken::new("ghp_secret").expect("token should be valid");
    let rendered = format!("{token:?}");
    assert!(
        !rendered.contains("ghp_secret"),
        "debug output leaked the token: {rendered}"
    );
}

#[rstest]
fn rejection_messages_display_unchanged() {
    let error = ActionError::Api {
        message: "Errored".to_owned(),
    };
    assert_eq!(error.to_string(), "Errored");
}
