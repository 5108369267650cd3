//! Push command.
//!
//! The interactive provisioning run: fetch the repository key, collect
//! values from the env file and the operator, confirm, then seal and
//! upload each secret and print a summary.

use std::io::IsTerminal;

use tracing::info;

use crate::cli::prompt::TerminalPrompter;
use crate::cli::{self, output, signals};
use crate::core::catalog::CATALOG;
use crate::core::collector::ValueSource;
use crate::core::config::Settings;
use crate::core::constants;
use crate::core::provision::{self, Event, Request, RunOutcome};
use crate::core::types::{Outcome, Repository, SubmissionResult, Summary};
use crate::error::Result;

/// Run the provisioning flow.
pub fn execute(settings: &Settings, no_prompt: bool, yes: bool) -> Result<()> {
    let client = cli::client(settings)?;
    let repository = client.repository().clone();

    if let Err(e) = signals::register() {
        tracing::warn!("{}", e);
    }

    let tty = std::io::stdin().is_terminal();
    let mut prompter = TerminalPrompter::new(!no_prompt, tty, yes);
    let prompting = prompter.asks_values();

    let request = Request {
        catalog: CATALOG,
        repository: repository.clone(),
        env_file: settings.env_file.clone(),
        placeholders: settings.placeholders.clone(),
    };

    output::header(&format!("Uploading GitHub Actions secrets to {}", repository));
    info!(repository = %repository, env_file = %settings.env_file.display(), "starting push");

    let outcome = provision::run(
        &client,
        &mut prompter,
        &request,
        signals::interrupted(),
        &mut |event| render(event, prompting),
    )?;

    match outcome {
        RunOutcome::Completed(submission) => {
            let summary = Summary::from_results(&submission.results);
            print_summary(&summary);
            if submission.interrupted {
                output::warn("cancelled, remaining secrets were not attempted");
            }
            if summary.succeeded > 0 && settings.api_url == constants::DEFAULT_API_URL {
                print_verify_hint(&repository);
            }
        }
        RunOutcome::Declined => output::warn("cancelled, nothing uploaded"),
        RunOutcome::NothingToSubmit => {
            output::warn("no values collected, nothing to upload");
            if !prompting {
                output::hint(&format!(
                    "add values to {} or run in a terminal without --no-prompt",
                    settings.env_file.display()
                ));
            }
        }
    }

    Ok(())
}

fn render(event: Event<'_>, prompting: bool) {
    match event {
        Event::KeyFetched(key) => {
            output::success(&format!("public key retrieved (key id {})", key.key_id()))
        }
        Event::EnvFileLoaded { path, entries } => {
            output::success(&format!("loaded {} entries from {}", entries, output::path(path)));
            output::section("Collecting credentials");
            if prompting {
                output::dimmed("press Enter to skip a secret");
            }
        }
        Event::EnvFileMissing(path) => {
            output::warn(&format!("no env file at {}", output::path(path)));
            output::section("Collecting credentials");
            if prompting {
                output::dimmed("press Enter to skip a secret");
            }
        }
        Event::Collected(entry, ValueSource::EnvFile) => {
            output::success(&format!("using {} from env file", output::key(entry.name)))
        }
        Event::Collected(_, ValueSource::Prompt) => {}
        Event::Collected(entry, ValueSource::Skipped) => {
            output::skipped(&format!("{} (no value)", output::key(entry.name)))
        }
        Event::Submitting(count) => {
            output::section("Uploading");
            output::dimmed(&format!("{} secret(s)", count));
        }
        Event::Submitted(result) => render_result(result),
    }
}

fn render_result(result: &SubmissionResult) {
    let detail = result.detail.as_deref().unwrap_or_default();
    let name = output::key(&result.name);
    match result.outcome {
        Outcome::Succeeded => output::success(&format!("{} {}", name, detail)),
        Outcome::Skipped => output::skipped(&format!("{} ({})", name, detail)),
        Outcome::Failed => output::error(&format!("{}: {}", name, detail)),
    }
}

fn print_summary(summary: &Summary) {
    output::section("Results");
    output::kv("succeeded", summary.succeeded);
    output::kv("skipped  ", summary.skipped);
    output::kv("failed   ", summary.failed);
}

fn print_verify_hint(repository: &Repository) {
    output::blank();
    output::dimmed(&format!(
        "verify at https://github.com/{}/{}/settings/secrets/actions",
        repository.owner, repository.name
    ));
}
