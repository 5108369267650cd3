//! Sealed-box encryption for GitHub Actions secrets.
//!
//! GitHub expects each secret sealed with libsodium's `crypto_box_seal`
//! (X25519 + XSalsa20-Poly1305) under the repository public key. Every call
//! generates a fresh ephemeral keypair, so the same plaintext never seals to
//! the same ciphertext and the sender stays anonymous.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use crypto_box::aead::OsRng;
use crypto_box::PublicKey;
use serde::Serialize;
use tracing::trace;

use crate::core::types::PublicKeyMaterial;
use crate::error::CryptoError;

/// A secret value sealed under a specific repository key.
///
/// Only [`seal`] produces one, so anything handed to the upload call has
/// been encrypted under the key it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SealedValue {
    encrypted_value: String,
    key_id: String,
}

impl SealedValue {
    /// Base64 ciphertext.
    pub fn encrypted_value(&self) -> &str {
        &self.encrypted_value
    }

    /// Identifier of the key used to seal.
    pub fn key_id(&self) -> &str {
        &self.key_id
    }
}

/// Seal `plaintext` for the holder of `key`'s private half.
///
/// # Errors
///
/// Returns `CryptoError::SealFailed` if the underlying AEAD rejects the input.
pub fn seal(plaintext: &[u8], key: &PublicKeyMaterial) -> Result<SealedValue, CryptoError> {
    trace!(plaintext_len = plaintext.len(), key_id = key.key_id(), "sealing");

    let public_key = PublicKey::from(*key.key_bytes());
    let ciphertext = public_key
        .seal(&mut OsRng, plaintext)
        .map_err(|_| CryptoError::SealFailed)?;

    trace!(ciphertext_len = ciphertext.len(), "sealed");

    Ok(SealedValue {
        encrypted_value: BASE64.encode(ciphertext),
        key_id: key.key_id().to_string(),
    })
}
