//! Test fixtures and constants.

/// Token the tests hand to the binary; the mock server checks for it.
pub const TEST_TOKEN: &str = "test-token-not-real";

/// Target repository used across tests.
pub const TEST_REPO: &str = "acme/web";

/// Secrets path of [`TEST_REPO`] on the mock API.
pub const SECRETS_PATH: &str = "/repos/acme/web/actions/secrets";

/// Env file with two real values, one placeholder and a comment.
pub const SAMPLE_ENV: &str = r#"
# local development values
STRIPE_SECRET_KEY=sk_test_51abcdef
OPENAI_API_KEY="sk-proj-123"
ANTHROPIC_API_KEY=your-anthropic-key
UNRELATED_VAR=ignored
"#;
