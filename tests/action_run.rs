//! End-to-end runs of the workflow against a mock GitHub API.

use autopr::{
    ActionConfig, OctocrabGateway, PullRequestWorkflow, RunStatus, WorkflowCommandReporter,
    report_result,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const COMPARE_PATH: &str = "/repos/a/b/compare/main...develop";

fn config_for(server: &MockServer, label: Option<&str>, reviewers: Option<&str>) -> ActionConfig {
    ActionConfig {
        source_branch: Some("develop".to_owned()),
        target_branch: Some("main".to_owned()),
        github_token: Some("ghp_example".to_owned()),
        label: label.map(ToOwned::to_owned),
        reviewers: reviewers.map(ToOwned::to_owned),
        repository: Some("a/b".to_owned()),
        api_url: Some(server.uri()),
    }
}

/// Runs the workflow and returns the reported status plus the workflow
/// commands written.
async fn run_action(config: &ActionConfig) -> (RunStatus, String) {
    let settings = config.to_settings().expect("settings should build");
    let gateway =
        OctocrabGateway::for_token(&settings.token, &settings.locator).expect("gateway builds");
    let result = PullRequestWorkflow::new(&gateway).run(&settings).await;

    let mut reporter = WorkflowCommandReporter::new(Vec::new(), None);
    let status = report_result(result, &mut reporter);
    let written = String::from_utf8(reporter.into_inner()).expect("commands should be UTF-8");
    (status, written)
}

async fn mount_changed_files(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(COMPARE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "files": [{ "filename": "src/lib.rs", "status": "modified" }]
        })))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_pull_request_creation(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/repos/a/b/pulls"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "number": 1000,
            "html_url": "https://github.com/a/b/pull/1000",
            "title": "Merge develop into main"
        })))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn identical_branches_report_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COMPARE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "files": [] })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let (status, written) = run_action(&config_for(&server, None, None)).await;

    assert_eq!(status, RunStatus::Succeeded);
    assert!(written.is_empty(), "no outputs expected, got {written:?}");
}

#[tokio::test]
async fn created_pull_request_is_labelled_and_routed() {
    let server = MockServer::start().await;
    mount_changed_files(&server).await;
    mount_pull_request_creation(&server).await;
    Mock::given(method("GET"))
        .and(path("/repos/a/b/labels/automerge-label"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Not Found" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/repos/a/b/labels"))
        .and(body_json(json!({
            "name": "automerge-label",
            "color": "27ff28",
            "description": "Pull requests marked with this label will be automatically merged on approval"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "name": "automerge-label",
            "color": "27ff28"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/repos/a/b/issues/1000/labels"))
        .and(body_json(json!({ "labels": ["automerge-label"] })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{ "name": "automerge-label" }])),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/repos/a/b/pulls/1000/requested_reviewers"))
        .and(body_json(json!({ "reviewers": ["user1", "user2"] })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "number": 1000 })))
        .expect(1)
        .mount(&server)
        .await;

    let config = config_for(&server, Some("automerge-label"), Some("user1,user2"));
    let (status, written) = run_action(&config).await;

    assert_eq!(status, RunStatus::Succeeded);
    assert_eq!(
        written,
        "::set-output name=url::https://github.com/a/b/pull/1000\n\
         ::set-output name=title::Merge develop into main\n"
    );
}

#[tokio::test]
async fn existing_label_is_not_recreated() {
    let server = MockServer::start().await;
    mount_changed_files(&server).await;
    mount_pull_request_creation(&server).await;
    Mock::given(method("GET"))
        .and(path("/repos/a/b/labels/automerge-label"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "automerge-label",
            "color": "ededed"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/repos/a/b/labels"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/repos/a/b/issues/1000/labels"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{ "name": "automerge-label" }])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (status, _written) =
        run_action(&config_for(&server, Some("automerge-label"), None)).await;

    assert_eq!(status, RunStatus::Succeeded);
}

#[tokio::test]
async fn comparison_rejection_is_reported_as_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(COMPARE_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "message": "Not Found" })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    let (status, written) = run_action(&config_for(&server, Some("label"), Some("user1"))).await;

    assert_eq!(status, RunStatus::Failed);
    assert_eq!(
        written, "::error::Not Found\n",
        "the failure should carry GitHub's message unchanged"
    );
}
