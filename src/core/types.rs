//! Domain types shared by the collector, the submitter and the CLI.

use std::fmt;
use std::str::FromStr;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::Serialize;
use zeroize::Zeroizing;

use crate::error::{ConfigError, CryptoError};

/// Target repository coordinates (`owner/name`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl Repository {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Result<Self, ConfigError> {
        let owner = owner.into();
        let name = name.into();
        let display = format!("{}/{}", owner, name);

        for part in [&owner, &name] {
            if part.is_empty() {
                return Err(invalid_repo(&display, "owner and name must be non-empty"));
            }
            if !part
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            {
                return Err(invalid_repo(
                    &display,
                    "only letters, digits, '-', '_' and '.' are allowed",
                ));
            }
        }

        Ok(Self { owner, name })
    }
}

fn invalid_repo(value: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidRepository {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

impl FromStr for Repository {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (owner, name) = s
            .trim()
            .split_once('/')
            .ok_or_else(|| invalid_repo(s, "expected 'owner/name'"))?;
        Self::new(owner, name)
    }
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Length in bytes of an X25519 public key.
pub const PUBLIC_KEY_LEN: usize = 32;

/// A repository's current public key, as published by GitHub.
///
/// Fetched once per run and never written to disk.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKeyMaterial {
    key_id: String,
    key_bytes: [u8; PUBLIC_KEY_LEN],
}

impl PublicKeyMaterial {
    /// Build key material from the `key_id` and base64 `key` fields of the API response.
    ///
    /// # Errors
    ///
    /// Returns `CryptoError` if the key is not base64 or not 32 bytes long.
    pub fn from_base64(key_id: impl Into<String>, key_b64: &str) -> Result<Self, CryptoError> {
        let decoded = BASE64
            .decode(key_b64.trim())
            .map_err(|_| CryptoError::InvalidBase64)?;
        let key_bytes: [u8; PUBLIC_KEY_LEN] = decoded
            .as_slice()
            .try_into()
            .map_err(|_| CryptoError::InvalidKeyLength(decoded.len()))?;

        Ok(Self {
            key_id: key_id.into(),
            key_bytes,
        })
    }

    /// Build key material from raw bytes.
    pub fn from_bytes(key_id: impl Into<String>, key_bytes: [u8; PUBLIC_KEY_LEN]) -> Self {
        Self {
            key_id: key_id.into(),
            key_bytes,
        }
    }

    /// Platform identifier of this key version.
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// Raw X25519 public key bytes.
    pub fn key_bytes(&self) -> &[u8; PUBLIC_KEY_LEN] {
        &self.key_bytes
    }
}

impl fmt::Debug for PublicKeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKeyMaterial")
            .field("key_id", &self.key_id)
            .finish_non_exhaustive()
    }
}

/// A static entry of the secret catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub description: &'static str,
}

/// A collected secret awaiting submission.
///
/// The value is wiped from memory on drop and never shown by `Debug`.
#[derive(Clone)]
pub struct SecretEntry {
    pub name: String,
    pub value: Zeroizing<String>,
    pub description: String,
}

impl SecretEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Zeroizing::new(value.into()),
            description: description.into(),
        }
    }

    /// The plaintext value.
    pub fn value(&self) -> &str {
        self.value.as_str()
    }
}

impl fmt::Debug for SecretEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretEntry")
            .field("name", &self.name)
            .field("value", &"<redacted>")
            .field("description", &self.description)
            .finish()
    }
}

/// What happened to one secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Succeeded,
    Skipped,
    Failed,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Succeeded => "succeeded",
            Outcome::Skipped => "skipped",
            Outcome::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Per-secret submission record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionResult {
    pub name: String,
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl SubmissionResult {
    pub fn succeeded(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome: Outcome::Succeeded,
            detail: Some(detail.into()),
        }
    }

    pub fn skipped(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome: Outcome::Skipped,
            detail: Some(detail.into()),
        }
    }

    pub fn failed(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            outcome: Outcome::Failed,
            detail: Some(detail.into()),
        }
    }
}

/// Counts folded from a run's results.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub succeeded: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Summary {
    /// Fold a result list into counts.
    pub fn from_results(results: &[SubmissionResult]) -> Self {
        results.iter().fold(Self::default(), |mut acc, r| {
            match r.outcome {
                Outcome::Succeeded => acc.succeeded += 1,
                Outcome::Skipped => acc.skipped += 1,
                Outcome::Failed => acc.failed += 1,
            }
            acc
        })
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.skipped + self.failed
    }

    /// Whether every attempted secret was uploaded.
    pub fn is_clean(&self) -> bool {
        self.failed == 0
    }
}
