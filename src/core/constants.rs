//! Constants used throughout sealdrop.
//!
//! Centralizes magic strings and default configuration values.

/// Default GitHub REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub API version header value.
pub const GITHUB_API_VERSION: &str = "2022-11-28";

/// GitHub API accept header for JSON responses.
pub const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default env file consulted for secret values.
pub const DEFAULT_ENV_FILE: &str = ".env.local";

/// Config file looked up in the current directory.
pub const CONFIG_FILE: &str = "sealdrop.toml";

/// Config file looked up under the user config directory.
pub const USER_CONFIG_PATH: &str = "sealdrop/config.toml";

/// Value prefixes that mark an unfilled template value.
pub const DEFAULT_PLACEHOLDER_PREFIXES: &[&str] = &["your-"];

/// Environment variables consulted for the API token, in order.
pub const TOKEN_ENV_VARS: &[&str] = &["SEALDROP_TOKEN", "GITHUB_TOKEN", "GH_TOKEN"];

/// Environment variable selecting the log filter.
pub const LOG_ENV: &str = "SEALDROP_LOG";

/// Environment variable selecting the log format (`json` or text).
pub const LOG_FORMAT_ENV: &str = "SEALDROP_LOG_FORMAT";

/// Longest response body kept as a failure diagnostic.
pub const MAX_DIAGNOSTIC_LEN: usize = 512;

/// Page size for listing remote secrets.
pub const LIST_PAGE_SIZE: u32 = 100;
