//! Tests for `sealdrop push` against a mock GitHub API.

use std::time::Duration;

use crate::support::github::{self, MockGitHub, KEY_ID};
use crate::support::*;

#[tokio::test(flavor = "multi_thread")]
async fn test_push_seals_values_for_repository_key() {
    let gh = MockGitHub::start().await;
    let t = Test::with_env(SAMPLE_ENV);

    let output = github::run(t.push_cmd(&gh.uri())).await;
    assert_success(&output);

    let mut uploads = gh.uploads().await;
    uploads.sort_by(|a, b| a.name.cmp(&b.name));
    let names: Vec<&str> = uploads.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["OPENAI_API_KEY", "STRIPE_SECRET_KEY"]);

    for upload in &uploads {
        assert_eq!(upload.key_id, KEY_ID);
    }
    assert_eq!(uploads[0].plaintext, "sk-proj-123");
    assert_eq!(uploads[1].plaintext, "sk_test_51abcdef");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_push_reports_summary() {
    let gh = MockGitHub::start().await;
    let t = Test::with_env(SAMPLE_ENV);

    let output = github::run(t.push_cmd(&gh.uri())).await;
    assert_success(&output);

    let out = stdout(&output);
    assert!(out.contains("public key retrieved"));
    assert!(out.contains("STRIPE_SECRET_KEY created"));
    assert!(out.contains("ANTHROPIC_API_KEY (placeholder value)"));
    assert!(out.contains("succeeded  2"));
    assert!(out.contains("skipped    1"));
    assert!(out.contains("failed     0"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_push_never_uploads_placeholders() {
    let gh = MockGitHub::start().await;
    let t = Test::with_env("ANTHROPIC_API_KEY=your-key-here\n");

    let output = github::run(t.push_cmd(&gh.uri())).await;
    assert_success(&output);
    assert!(gh.uploads().await.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_push_continues_after_failed_upload() {
    let gh = MockGitHub::start().await;
    gh.fail_upload("OPENAI_API_KEY", 500).await;
    let t = Test::with_env(
        "STRIPE_SECRET_KEY=one\nOPENAI_API_KEY=two\nRESEND_API_KEY=three\n",
    );

    let output = github::run(t.push_cmd(&gh.uri())).await;
    assert_success(&output);
    assert_stderr_contains(&output, "OPENAI_API_KEY: GitHub returned HTTP 500");

    let out = stdout(&output);
    assert!(out.contains("succeeded  2"));
    assert!(out.contains("failed     1"));

    let requests = gh.server.received_requests().await.unwrap();
    let puts = requests.iter().filter(|r| r.method.as_str() == "PUT").count();
    assert_eq!(puts, 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_push_continues_after_network_error() {
    let gh = MockGitHub::start().await;
    gh.stall_upload("OPENAI_API_KEY", Duration::from_secs(3)).await;
    let t = Test::with_env(
        "STRIPE_SECRET_KEY=one\nOPENAI_API_KEY=two\nRESEND_API_KEY=three\n",
    );

    let mut cmd = t.push_cmd(&gh.uri());
    cmd.args(["--timeout", "1"]);
    let output = github::run(cmd).await;
    assert_success(&output);
    assert_stderr_contains(&output, "OPENAI_API_KEY: network error");

    let out = stdout(&output);
    assert!(out.contains("STRIPE_SECRET_KEY created"));
    assert!(out.contains("RESEND_API_KEY created"));
    assert!(out.contains("succeeded  2"));
    assert!(out.contains("failed     1"));

    let requests = gh.server.received_requests().await.unwrap();
    let puts = requests.iter().filter(|r| r.method.as_str() == "PUT").count();
    assert_eq!(puts, 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_push_aborts_when_key_rejected() {
    let server = MockGitHub::rejecting_key(401).await;
    let t = Test::with_env(SAMPLE_ENV);

    let output = github::run(t.push_cmd(&server.uri())).await;
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(1));
    assert_stderr_contains(&output, "could not fetch repository public key");
    assert_stderr_contains(&output, "401");
    assert_stderr_contains(&output, "token is valid");

    let requests = server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| r.method.as_str() == "GET"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_push_with_empty_env_uploads_nothing() {
    let gh = MockGitHub::start().await;
    let t = Test::new();

    let output = github::run(t.push_cmd(&gh.uri())).await;
    assert_success(&output);
    assert_stdout_contains(&output, "nothing to upload");
    assert!(gh.uploads().await.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_push_without_yes_needs_terminal() {
    let gh = MockGitHub::start().await;
    let t = Test::with_env(SAMPLE_ENV);

    let mut cmd = t.cmd();
    cmd.env("SEALDROP_TOKEN", TEST_TOKEN).args([
        "push",
        "--repo",
        TEST_REPO,
        "--api-url",
        &gh.uri(),
        "--no-prompt",
    ]);
    let output = github::run(cmd).await;
    assert_failure(&output);
    assert_stderr_contains(&output, "confirmation required");
    assert_stderr_contains(&output, "--yes");
    assert!(gh.uploads().await.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_push_output_has_no_plaintext_or_token() {
    let gh = MockGitHub::start().await;
    let t = Test::with_env(SAMPLE_ENV);

    let mut cmd = t.push_cmd(&gh.uri());
    cmd.env("SEALDROP_LOG", "sealdrop=trace");
    let output = github::run(cmd).await;
    assert_success(&output);
    assert_output_excludes(&output, "sk_test_51abcdef");
    assert_output_excludes(&output, "sk-proj-123");
    assert_output_excludes(&output, TEST_TOKEN);
}
