//! Terminal prompts.
//!
//! Hidden input for secret values and a yes/no gate before uploading,
//! both through dialoguer.

use dialoguer::{Confirm, Password};

use crate::cli::output;
use crate::core::collector::Prompter;
use crate::core::placeholder::PlaceholderPolicy;
use crate::core::types::{CatalogEntry, Repository, SecretEntry};
use crate::error::{Error, Result};

/// [`Prompter`] backed by the terminal.
pub struct TerminalPrompter {
    /// Ask for values missing from the env file.
    ask_values: bool,
    /// Stdin is a terminal, so the confirmation can be asked.
    tty: bool,
    /// Skip the confirmation.
    assume_yes: bool,
}

impl TerminalPrompter {
    pub fn new(ask_values: bool, tty: bool, assume_yes: bool) -> Self {
        Self {
            ask_values: ask_values && tty,
            tty,
            assume_yes,
        }
    }

    pub fn asks_values(&self) -> bool {
        self.ask_values
    }
}

impl Prompter for TerminalPrompter {
    fn ask_value(&mut self, entry: &CatalogEntry) -> Result<String> {
        if !self.ask_values {
            return Ok(String::new());
        }

        output::blank();
        output::dimmed(entry.description);
        let value = Password::new()
            .with_prompt(format!("{} (Enter to skip)", output::key(entry.name)))
            .allow_empty_password(true)
            .interact()?;

        Ok(value)
    }

    fn confirm(
        &mut self,
        entries: &[SecretEntry],
        repository: &Repository,
        placeholders: &PlaceholderPolicy,
    ) -> Result<bool> {
        output::section("Summary");
        output::kv("repository", repository);
        output::kv("secrets", entries.len());
        for entry in entries {
            if placeholders.is_placeholder(entry.value()) {
                output::list_item(&format!("{} (placeholder, will be skipped)", entry.name));
            } else {
                output::list_item(&entry.name);
            }
        }
        output::blank();

        if self.assume_yes {
            return Ok(true);
        }
        if !self.tty {
            return Err(Error::ConfirmationRequired);
        }

        output::warn(&format!("this will upload these secrets to {}", repository));
        let proceed = Confirm::new()
            .with_prompt("Proceed?")
            .default(false)
            .interact()?;

        Ok(proceed)
    }
}
