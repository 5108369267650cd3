//! Shared CLI output helpers for consistent terminal output.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings, skips
//! - Cyan: paths, keys, hints
//! - Bold: headers, important values
//! - Dimmed: secondary info

use std::fmt::Display;

use console::style;

const RULE_WIDTH: usize = 56;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ public key retrieved`
pub fn success(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("✓").green(), msg);
    } else {
        println!("✓ {}", msg);
    }
}

/// Print an error message to stderr (red).
///
/// Example: `✗ could not fetch repository public key`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
pub fn warn(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("⚠").yellow(), msg);
    } else {
        println!("⚠ {}", msg);
    }
}

/// Print a skip notice (yellow).
///
/// Example: `↷ STRIPE_SECRET_KEY (placeholder value)`
pub fn skipped(msg: &str) {
    if colors_enabled() {
        println!("{} {}", style("↷").yellow(), msg);
    } else {
        println!("↷ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ export SEALDROP_TOKEN`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a bold header.
pub fn header(title: &str) {
    if colors_enabled() {
        println!("{}", style(title).bold());
    } else {
        println!("{}", title);
    }
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  repository  acme/web`
pub fn kv(label: &str, value: impl Display) {
    if colors_enabled() {
        println!("  {}  {}", style(label).dim(), style(value).bold());
    } else {
        println!("  {}  {}", label, value);
    }
}

/// Print a list item with bullet.
pub fn list_item(item: &str) {
    println!("  • {}", item);
}

/// Print a horizontal rule separator.
fn rule() {
    let line = "─".repeat(RULE_WIDTH);
    if colors_enabled() {
        println!("{}", style(line).dim());
    } else {
        println!("{}", line);
    }
}

/// Format a secret name in cyan for inline use.
pub fn key(k: &str) -> String {
    if colors_enabled() {
        style(k).cyan().to_string()
    } else {
        k.to_string()
    }
}

/// Format a path in cyan for inline use.
pub fn path(p: &std::path::Path) -> String {
    let p = p.display().to_string();
    if colors_enabled() {
        style(p).cyan().to_string()
    } else {
        p
    }
}

/// Print a dimmed/secondary message.
pub fn dimmed(msg: &str) {
    if colors_enabled() {
        println!("{}", style(msg).dim());
    } else {
        println!("{}", msg);
    }
}

/// Print an empty line.
pub fn blank() {
    println!();
}

/// Print a section header with a separator line.
///
/// ```text
/// Collecting Credentials
/// ────────────────────────────────────────────────────────
/// ```
pub fn section(title: &str) {
    println!();
    header(title);
    rule();
}
