//! Error types.
//!
//! Each concern has its own error enum; [`Error`] unifies them for the
//! command layer. Per-secret upload failures are not errors: they are
//! recorded as [`Outcome::Failed`](crate::core::types::Outcome) results.

use std::io;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The repository public key could not be obtained. Always fatal.
    #[error("could not fetch repository public key: {0}")]
    KeyFetch(#[source] ApiError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The operator interrupted the run. Not a failure.
    #[error("cancelled")]
    Interrupted,

    #[error("confirmation required but stdin is not a terminal")]
    ConfirmationRequired,

    #[error("prompt failed: {0}")]
    Prompt(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Process exit code for this error.
    ///
    /// Cancellation exits cleanly; everything else is a failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Interrupted => 0,
            _ => 1,
        }
    }

    /// A short suggestion for the operator, when one applies.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::Config(ConfigError::MissingToken) => {
                Some("export SEALDROP_TOKEN (or GITHUB_TOKEN) with a token that can write repository secrets")
            }
            Error::Config(ConfigError::MissingRepository) => {
                Some("pass --repo owner/name or set [repository] in sealdrop.toml")
            }
            Error::KeyFetch(ApiError::Status { status, .. })
            | Error::Api(ApiError::Status { status, .. }) => match status {
                401 => Some("check that the token is valid and not expired"),
                403 => Some("the token needs the `secrets: write` (or `repo`) permission"),
                404 => Some("check the repository name and that the token can see it"),
                _ => None,
            },
            Error::ConfirmationRequired => Some("pass --yes to upload without confirmation"),
            Error::KeyFetch(ApiError::Transport(_)) => {
                Some("check network access and the --api-url setting")
            }
            Error::KeyFetch(ApiError::Decode(_)) => {
                Some("check that --api-url points at the GitHub REST API")
            }
            _ => None,
        }
    }
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        #[allow(unreachable_patterns)]
        match err {
            dialoguer::Error::IO(e) if e.kind() == io::ErrorKind::Interrupted => Error::Interrupted,
            dialoguer::Error::IO(e) => Error::Io(e),
            other => Error::Prompt(other.to_string()),
        }
    }
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no GitHub token found in SEALDROP_TOKEN, GITHUB_TOKEN or GH_TOKEN")]
    MissingToken,

    #[error("no target repository configured")]
    MissingRepository,

    #[error("invalid repository '{value}': {reason}")]
    InvalidRepository { value: String, reason: String },

    #[error("insecure API URL rejected: {0} (http:// is only allowed for localhost)")]
    InsecureApiUrl(String),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Only the parser's message is kept; its source excerpt could echo a
    /// secret pasted into the file.
    #[error("failed to parse config file {path}: {reason}")]
    Parse { path: String, reason: String },
}

/// GitHub API errors.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("GitHub returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected response body from GitHub: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("invalid public key in response: {0}")]
    InvalidKey(#[from] CryptoError),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Sealed-box and key-material errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("public key is not valid base64")]
    InvalidBase64,

    #[error("invalid public key length: expected 32 bytes, got {0}")]
    InvalidKeyLength(usize),

    #[error("sealed box encryption failed")]
    SealFailed,
}

/// Input validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("secret name cannot be empty")]
    EmptyName,

    #[error("invalid secret name '{name}': {reason}")]
    InvalidName { name: String, reason: String },
}
