//! Secret collection.
//!
//! Walks the catalog and decides where each value comes from: the env file
//! when it has a non-empty value, otherwise the operator.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::Serialize;
use tracing::debug;

use crate::core::env::EnvFile;
use crate::core::placeholder::PlaceholderPolicy;
use crate::core::types::{CatalogEntry, Repository, SecretEntry};
use crate::error::{Error, Result};

/// Operator interaction used by the collector and the confirmation step.
pub trait Prompter {
    /// Ask for the value of `entry`. An empty answer means "skip".
    fn ask_value(&mut self, entry: &CatalogEntry) -> Result<String>;

    /// Ask whether `entries` should be uploaded to `repository`.
    fn confirm(
        &mut self,
        entries: &[SecretEntry],
        repository: &Repository,
        placeholders: &PlaceholderPolicy,
    ) -> Result<bool>;
}

/// Where a collected value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    EnvFile,
    Prompt,
    /// Nothing supplied; the entry is left out.
    Skipped,
}

/// Collect values for every catalog entry.
///
/// `observe` is told the source of each entry as it is decided, so the
/// caller can report progress between prompts. Entries with an empty value
/// are excluded. Placeholders are kept; the submitter skips them.
///
/// `interrupted` is checked before every prompt, so Ctrl-C during one
/// prompt ends collection instead of moving on to the next.
///
/// # Errors
///
/// `Error::Interrupted` once the flag is set, and prompt errors.
pub fn collect(
    catalog: &[CatalogEntry],
    external: &EnvFile,
    prompter: &mut dyn Prompter,
    interrupted: &AtomicBool,
    mut observe: impl FnMut(&CatalogEntry, ValueSource),
) -> Result<Vec<SecretEntry>> {
    let mut entries = Vec::new();

    for item in catalog {
        let (value, source) = match external.get(item.name) {
            Some(v) if !v.is_empty() => (v.to_string(), ValueSource::EnvFile),
            _ => {
                if interrupted.load(Ordering::SeqCst) {
                    debug!(name = item.name, "interrupted during collection");
                    return Err(Error::Interrupted);
                }
                let answer = prompter.ask_value(item)?;
                let answer = answer.trim().to_string();
                if answer.is_empty() {
                    (answer, ValueSource::Skipped)
                } else {
                    (answer, ValueSource::Prompt)
                }
            }
        };

        debug!(name = item.name, ?source, "collected");
        observe(item, source);

        if source != ValueSource::Skipped {
            entries.push(SecretEntry::new(item.name, value, item.description));
        }
    }

    Ok(entries)
}

/// Readiness of one catalog entry with respect to the env file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanStatus {
    /// The env file has a real value.
    Ready,
    /// The env file has a placeholder value.
    Placeholder,
    /// The env file has nothing; `push` would prompt.
    Missing,
}

/// One line of the offline readiness report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanItem {
    pub name: &'static str,
    pub description: &'static str,
    pub status: PlanStatus,
}

/// Report, without prompting, what `push` would find in the env file.
pub fn plan(catalog: &[CatalogEntry], external: &EnvFile, placeholders: &PlaceholderPolicy) -> Vec<PlanItem> {
    catalog
        .iter()
        .map(|item| {
            let status = match external.get(item.name) {
                Some(v) if v.is_empty() => PlanStatus::Missing,
                Some(v) if placeholders.is_placeholder(v) => PlanStatus::Placeholder,
                Some(_) => PlanStatus::Ready,
                None => PlanStatus::Missing,
            };
            PlanItem {
                name: item.name,
                description: item.description,
                status,
            }
        })
        .collect()
}
