//! Tests for config file discovery and precedence.

use crate::support::*;

#[test]
fn test_config_file_sets_env_file() {
    let t = Test::new();
    t.write("secrets.env", "STRIPE_SECRET_KEY=sk_live\n");
    t.write_config("[collect]\nenv_file = \"secrets.env\"\n");

    let report = t.check_json();
    assert!(report["env_file"].as_str().unwrap().ends_with("secrets.env"));
    assert_eq!(report["env_file_found"], true);
}

#[test]
fn test_flag_overrides_config_file() {
    let t = Test::new();
    t.write("secrets.env", "STRIPE_SECRET_KEY=sk_live\n");
    t.write("other.env", "");
    t.write_config("[collect]\nenv_file = \"secrets.env\"\n");

    let output = t
        .cmd()
        .args(["check", "--json", "--env-file", "other.env"])
        .output()
        .unwrap();
    assert_success(&output);
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(report["env_file"].as_str().unwrap().ends_with("other.env"));
}

#[test]
fn test_explicit_config_path() {
    let t = Test::new();
    let path = t.write("custom.toml", "[collect]\nplaceholder_prefixes = [\"sk_\"]\n");
    t.write_env("STRIPE_SECRET_KEY=sk_live\n");

    let output = t
        .cmd()
        .args(["--config", path.to_str().unwrap(), "check", "--json"])
        .output()
        .unwrap();
    assert_success(&output);
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let stripe = report["secrets"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["name"] == "STRIPE_SECRET_KEY")
        .cloned()
        .unwrap();
    assert_eq!(stripe["status"], "placeholder");
}

#[test]
fn test_token_in_config_file_rejected() {
    let t = Test::new();
    t.write_config("[api]\ntoken = \"ghp_should_not_be_here\"\n");

    let output = t.check();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config file");
    assert_output_excludes(&output, "ghp_should_not_be_here");
}

#[test]
fn test_zero_timeout_rejected() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("SEALDROP_TOKEN", TEST_TOKEN)
        .args(["key", "--repo", TEST_REPO, "--timeout", "0"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "timeout");
}
