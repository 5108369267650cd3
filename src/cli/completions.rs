//! Completions command.

use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};

use crate::cli::{Cli, Shell};
use crate::error::Result;

/// Write a completion script for `shell` to stdout.
pub fn execute(shell: Shell) -> Result<()> {
    let shell = match shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
    };
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();

    generate(shell, &mut cmd, bin, &mut std::io::stdout());
    Ok(())
}
