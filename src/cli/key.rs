//! Key command.
//!
//! Fetches the repository public key and prints its id and fingerprint.
//! Useful for checking a token and repository before a full `push`.

use sha2::{Digest, Sha256};

use crate::cli::{self, output};
use crate::core::api::SecretsApi;
use crate::core::config::Settings;
use crate::core::types::PublicKeyMaterial;
use crate::error::{Error, Result};

/// Short SHA-256 fingerprint of the raw key bytes.
pub fn fingerprint(key: &PublicKeyMaterial) -> String {
    let digest = Sha256::digest(key.key_bytes());
    digest
        .iter()
        .take(8)
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(":")
}

/// Fetch and show the public key.
pub fn execute(settings: &Settings) -> Result<()> {
    let client = cli::client(settings)?;
    let key = client.public_key().map_err(Error::KeyFetch)?;

    output::success(&format!("public key for {}", client.repository()));
    output::kv("key id", key.key_id());
    output::kv("fingerprint", fingerprint(&key));
    Ok(())
}
