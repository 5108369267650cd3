//! Sealing and uploading collected secrets.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, info};

use crate::core::api::SecretsApi;
use crate::core::crypto;
use crate::core::placeholder::PlaceholderPolicy;
use crate::core::types::{PublicKeyMaterial, SecretEntry, SubmissionResult};
use crate::core::validation::validate_secret_name;

/// Results of a submission pass.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub results: Vec<SubmissionResult>,
    /// The operator interrupted before every entry was attempted.
    pub interrupted: bool,
}

/// Seal and upload a single entry.
///
/// Never returns an error: every problem becomes a `Failed` result, and
/// placeholders become `Skipped` without touching the network.
pub fn submit_one(
    api: &dyn SecretsApi,
    key: &PublicKeyMaterial,
    entry: &SecretEntry,
    placeholders: &PlaceholderPolicy,
) -> SubmissionResult {
    let name = entry.name.as_str();

    if placeholders.should_skip(entry.value()) {
        debug!(name, "placeholder value, skipping");
        return SubmissionResult::skipped(name, "placeholder value");
    }

    if let Err(e) = validate_secret_name(name) {
        return SubmissionResult::failed(name, e.to_string());
    }

    let sealed = match crypto::seal(entry.value().as_bytes(), key) {
        Ok(sealed) => sealed,
        Err(e) => return SubmissionResult::failed(name, e.to_string()),
    };

    match api.put_secret(name, &sealed) {
        Ok(status) => {
            info!(name, status = status.as_str(), "secret uploaded");
            SubmissionResult::succeeded(name, status.as_str())
        }
        Err(e) => {
            debug!(name, error = %e, "upload failed");
            SubmissionResult::failed(name, e.to_string())
        }
    }
}

/// Upload every entry in order, one request at a time.
///
/// `interrupted` is checked before each entry; once set, no further entries
/// are attempted. `report` sees each result as soon as it is known.
pub fn submit_all(
    api: &dyn SecretsApi,
    key: &PublicKeyMaterial,
    entries: &[SecretEntry],
    placeholders: &PlaceholderPolicy,
    interrupted: &AtomicBool,
    mut report: impl FnMut(&SubmissionResult),
) -> Submission {
    let mut submission = Submission::default();

    for entry in entries {
        if interrupted.load(Ordering::SeqCst) {
            debug!(remaining = entries.len() - submission.results.len(), "interrupted");
            submission.interrupted = true;
            break;
        }

        let result = submit_one(api, key, entry, placeholders);
        report(&result);
        submission.results.push(result);
    }

    submission
}
