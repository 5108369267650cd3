//! Tests for `sealdrop key`.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::support::github::{self, MockGitHub, KEY_ID};
use crate::support::*;

#[tokio::test(flavor = "multi_thread")]
async fn test_key_shows_id_and_fingerprint() {
    let gh = MockGitHub::start().await;
    let t = Test::new();

    let mut cmd = t.cmd();
    cmd.env("SEALDROP_TOKEN", TEST_TOKEN)
        .args(["key", "--repo", TEST_REPO, "--api-url", &gh.uri()]);
    let output = github::run(cmd).await;
    assert_success(&output);
    assert_stdout_contains(&output, KEY_ID);
    assert_stdout_contains(&output, "fingerprint");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_key_not_found_hints_at_repository() {
    let server = MockGitHub::rejecting_key(404).await;
    let t = Test::new();

    let mut cmd = t.cmd();
    cmd.env("SEALDROP_TOKEN", TEST_TOKEN)
        .args(["key", "--repo", TEST_REPO, "--api-url", &server.uri()]);
    let output = github::run(cmd).await;
    assert_failure(&output);
    assert_stderr_contains(&output, "HTTP 404");
    assert_stderr_contains(&output, "check the repository name");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_key_malformed_response_is_not_a_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/public-key", SECRETS_PATH)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
        .mount(&server)
        .await;
    let t = Test::new();

    let mut cmd = t.cmd();
    cmd.env("SEALDROP_TOKEN", TEST_TOKEN)
        .args(["key", "--repo", TEST_REPO, "--api-url", &server.uri()]);
    let output = github::run(cmd).await;
    assert_failure(&output);
    assert_stderr_contains(&output, "unexpected response body from GitHub");
    assert_stderr_contains(&output, "GitHub REST API");
    let err = stderr(&output);
    assert!(!err.contains("network error"), "got: {err}");
    assert!(!err.contains("check network access"), "got: {err}");
}
