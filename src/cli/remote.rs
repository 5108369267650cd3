//! Remote command.
//!
//! Lists the secrets GitHub already stores for the repository (names and
//! timestamps only; GitHub never returns values) and flags catalog
//! entries that are not there yet.

use std::collections::HashSet;

use chrono::DateTime;
use serde::Serialize;

use crate::cli::{self, output};
use crate::core::api::{RemoteSecret, SecretsApi};
use crate::core::catalog::CATALOG;
use crate::core::config::Settings;
use crate::error::Result;

#[derive(Serialize)]
struct Report<'a> {
    repository: String,
    secrets: &'a [RemoteSecret],
    missing: Vec<&'static str>,
}

/// Render an RFC 3339 timestamp as `YYYY-MM-DD HH:MM`, or return it as is.
fn format_timestamp(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Catalog names with no remote counterpart.
fn missing_from(remote: &[RemoteSecret]) -> Vec<&'static str> {
    let present: HashSet<&str> = remote.iter().map(|s| s.name.as_str()).collect();
    CATALOG
        .iter()
        .map(|e| e.name)
        .filter(|name| !present.contains(name))
        .collect()
}

/// List remote secrets.
pub fn execute(settings: &Settings, json: bool) -> Result<()> {
    let client = cli::client(settings)?;
    let mut secrets = client.list_secrets()?;
    secrets.sort_by(|a, b| a.name.cmp(&b.name));
    let missing = missing_from(&secrets);

    if json {
        let report = Report {
            repository: client.repository().to_string(),
            secrets: &secrets,
            missing,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    output::section(&format!("Secrets in {}", client.repository()));
    if secrets.is_empty() {
        output::dimmed("none");
    }
    let width = secrets.iter().map(|s| s.name.len()).max().unwrap_or(0);
    for secret in &secrets {
        output::list_item(&format!(
            "{}  updated {}",
            output::key(&format!("{:width$}", secret.name, width = width)),
            format_timestamp(&secret.updated_at)
        ));
    }

    if !missing.is_empty() {
        output::section("Not yet uploaded");
        for name in &missing {
            output::warn(name);
        }
    }
    Ok(())
}
