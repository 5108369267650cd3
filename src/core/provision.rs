//! The provisioning run: fetch key, collect, confirm, submit.
//!
//! Everything that talks to the outside world comes in through
//! [`SecretsApi`] and [`Prompter`]; progress goes out through [`Event`]s so
//! the CLI decides how to render it.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::core::api::SecretsApi;
use crate::core::collector::{self, Prompter, ValueSource};
use crate::core::env::EnvFile;
use crate::core::placeholder::PlaceholderPolicy;
use crate::core::submit::{self, Submission};
use crate::core::types::{CatalogEntry, PublicKeyMaterial, Repository, SubmissionResult};
use crate::error::{Error, Result};

/// Inputs of one run.
#[derive(Debug, Clone)]
pub struct Request<'a> {
    pub catalog: &'a [CatalogEntry],
    pub repository: Repository,
    pub env_file: PathBuf,
    pub placeholders: PlaceholderPolicy,
}

/// Progress notifications.
#[derive(Debug)]
pub enum Event<'a> {
    KeyFetched(&'a PublicKeyMaterial),
    EnvFileLoaded { path: &'a Path, entries: usize },
    EnvFileMissing(&'a Path),
    Collected(&'a CatalogEntry, ValueSource),
    Submitting(usize),
    Submitted(&'a SubmissionResult),
}

/// How a run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// The submission pass ran (possibly cut short by an interrupt).
    Completed(Submission),
    /// The operator answered "no" at the confirmation.
    Declined,
    /// No values were collected.
    NothingToSubmit,
}

fn check_interrupt(interrupted: &AtomicBool) -> Result<()> {
    if interrupted.load(Ordering::SeqCst) {
        return Err(Error::Interrupted);
    }
    Ok(())
}

/// Run the whole flow.
///
/// # Errors
///
/// `Error::KeyFetch` if the public key cannot be obtained (nothing is
/// prompted, sealed or sent in that case), `Error::Interrupted` if the
/// operator cancels before submission starts, and I/O or prompt errors.
/// Per-secret upload failures are reported in the returned results.
pub fn run(
    api: &dyn SecretsApi,
    prompter: &mut dyn Prompter,
    request: &Request<'_>,
    interrupted: &AtomicBool,
    events: &mut dyn FnMut(Event<'_>),
) -> Result<RunOutcome> {
    let key = api.public_key().map_err(Error::KeyFetch)?;
    events(Event::KeyFetched(&key));
    check_interrupt(interrupted)?;

    let external = match EnvFile::load_optional(&request.env_file)? {
        Some(env) => {
            events(Event::EnvFileLoaded {
                path: &request.env_file,
                entries: env.len(),
            });
            env
        }
        None => {
            events(Event::EnvFileMissing(&request.env_file));
            EnvFile::default()
        }
    };

    let entries = collector::collect(request.catalog, &external, prompter, interrupted, |entry, source| {
        events(Event::Collected(entry, source))
    })?;
    check_interrupt(interrupted)?;

    if entries.is_empty() {
        debug!("nothing collected");
        return Ok(RunOutcome::NothingToSubmit);
    }

    if !prompter.confirm(&entries, &request.repository, &request.placeholders)? {
        return Ok(RunOutcome::Declined);
    }
    check_interrupt(interrupted)?;

    events(Event::Submitting(entries.len()));
    let submission = submit::submit_all(
        api,
        &key,
        &entries,
        &request.placeholders,
        interrupted,
        |result| events(Event::Submitted(result)),
    );

    Ok(RunOutcome::Completed(submission))
}
