//! Command-line interface.

pub mod check;
pub mod completions;
pub mod key;
pub mod output;
pub mod prompt;
pub mod push;
pub mod remote;
pub mod signals;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::api::GitHubClient;
use crate::core::config::{FileConfig, Overrides, Settings};
use crate::error::Result;

/// Sealdrop - seal and upload GitHub Actions secrets.
#[derive(Parser)]
#[command(
    name = "sealdrop",
    about = "Seal and upload a project's GitHub Actions secrets",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a sealdrop.toml config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Collect values and upload them as repository secrets
    Push {
        #[command(flatten)]
        connection: ConnectionArgs,
        #[command(flatten)]
        collect: CollectArgs,
        /// Never prompt; secrets missing from the env file are skipped
        #[arg(long)]
        no_prompt: bool,
        /// Upload without asking for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Show which secrets the env file provides (no network)
    Check {
        #[command(flatten)]
        collect: CollectArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch and show the repository public key
    Key {
        #[command(flatten)]
        connection: ConnectionArgs,
    },

    /// List secrets already stored in the repository
    Remote {
        #[command(flatten)]
        connection: ConnectionArgs,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Where to reach GitHub.
#[derive(Args, Debug, Default, Clone)]
pub struct ConnectionArgs {
    /// Target repository as owner/name
    #[arg(long, env = "SEALDROP_REPO", value_name = "OWNER/NAME")]
    pub repo: Option<String>,

    /// GitHub API base URL
    #[arg(long, env = "SEALDROP_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

/// Where values come from.
#[derive(Args, Debug, Default, Clone)]
pub struct CollectArgs {
    /// Env file to read values from [default: .env.local]
    #[arg(long, env = "SEALDROP_ENV_FILE", value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Value prefix marking an unfilled placeholder (repeatable)
    #[arg(long = "placeholder-prefix", value_name = "PREFIX")]
    pub placeholder_prefixes: Vec<String>,
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Resolve settings from the config file, flags and environment.
pub fn resolve_settings(
    config: Option<&std::path::Path>,
    connection: Option<&ConnectionArgs>,
    collect: Option<&CollectArgs>,
) -> Result<Settings> {
    let (file, path) = FileConfig::discover(config)?;
    let connection = connection.cloned().unwrap_or_default();
    let collect = collect.cloned().unwrap_or_default();

    let overrides = Overrides {
        repository: connection.repo,
        api_url: connection.api_url,
        timeout_secs: connection.timeout,
        env_file: collect.env_file,
        placeholder_prefixes: collect.placeholder_prefixes,
    };

    Settings::resolve(file, path, overrides, |var| std::env::var(var).ok())
}

/// Build a GitHub client for commands that need the network.
pub fn client(settings: &Settings) -> Result<GitHubClient> {
    let repository = settings.require_repository()?.clone();
    let token = settings.require_token()?;
    Ok(GitHubClient::new(
        settings.api_url.clone(),
        repository,
        token,
        settings.timeout,
    )?)
}

/// Execute a command.
pub fn execute(cli: Cli) -> Result<()> {
    let config = cli.config.as_deref();

    match cli.command {
        Command::Push {
            connection,
            collect,
            no_prompt,
            yes,
        } => {
            let settings = resolve_settings(config, Some(&connection), Some(&collect))?;
            push::execute(&settings, no_prompt, yes)
        }
        Command::Check { collect, json } => {
            let settings = resolve_settings(config, None, Some(&collect))?;
            check::execute(&settings, json)
        }
        Command::Key { connection } => {
            let settings = resolve_settings(config, Some(&connection), None)?;
            key::execute(&settings)
        }
        Command::Remote { connection, json } => {
            let settings = resolve_settings(config, Some(&connection), None)?;
            remote::execute(&settings, json)
        }
        Command::Completions { shell } => completions::execute(shell),
    }
}
