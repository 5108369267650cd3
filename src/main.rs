//! Sealdrop - seal and upload a project's GitHub Actions secrets.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sealdrop::cli::output;
use sealdrop::cli::{execute, Cli};
use sealdrop::core::constants::{LOG_ENV, LOG_FORMAT_ENV};
use sealdrop::Error;

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("sealdrop=debug")
        } else {
            EnvFilter::new("sealdrop=warn")
        }
    });

    let json = std::env::var(LOG_FORMAT_ENV).is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    // Logs go to stderr so stdout stays clean for --json output.
    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = execute(cli) {
        if matches!(e, Error::Interrupted) {
            output::warn("cancelled");
            std::process::exit(e.exit_code());
        }

        output::error(&e.to_string());
        if let Some(hint) = e.hint() {
            output::hint(hint);
        }
        std::process::exit(e.exit_code());
    }
}
