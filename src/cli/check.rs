//! Check command.
//!
//! Offline readiness report: which catalog secrets the env file already
//! provides, which hold placeholders and which `push` would prompt for.
//! No token is required and nothing leaves the machine.

use serde::Serialize;

use crate::cli::output;
use crate::core::catalog::CATALOG;
use crate::core::collector::{self, PlanItem, PlanStatus};
use crate::core::config::Settings;
use crate::core::env::EnvFile;
use crate::error::Result;

#[derive(Serialize)]
struct Report<'a> {
    env_file: String,
    env_file_found: bool,
    secrets: &'a [PlanItem],
}

/// Print the readiness report.
pub fn execute(settings: &Settings, json: bool) -> Result<()> {
    let env = EnvFile::load_optional(&settings.env_file)?;
    let found = env.is_some();
    let env = env.unwrap_or_default();
    let items = collector::plan(CATALOG, &env, &settings.placeholders);

    if json {
        let report = Report {
            env_file: settings.env_file.display().to_string(),
            env_file_found: found,
            secrets: &items,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if found {
        output::kv("env file", output::path(&settings.env_file));
    } else {
        output::warn(&format!(
            "no env file at {}",
            output::path(&settings.env_file)
        ));
    }

    output::section("Secrets");
    let width = items.iter().map(|i| i.name.len()).max().unwrap_or(0);
    for item in &items {
        let name = format!("{:width$}", item.name, width = width);
        match item.status {
            PlanStatus::Ready => output::success(&format!("{}  ready", output::key(&name))),
            PlanStatus::Placeholder => {
                output::skipped(&format!("{}  placeholder, will be skipped", output::key(&name)))
            }
            PlanStatus::Missing => output::warn(&format!("{}  missing, push will prompt", output::key(&name))),
        }
    }

    let ready = items.iter().filter(|i| i.status == PlanStatus::Ready).count();
    output::blank();
    output::dimmed(&format!("{} of {} secrets ready", ready, items.len()));
    Ok(())
}
