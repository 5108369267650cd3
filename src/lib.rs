//! Sealdrop - seal and upload a project's GitHub Actions secrets.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── push          # Fetch key, collect, confirm, upload
//! │   ├── check         # Offline env file readiness report
//! │   ├── key           # Show the repository public key
//! │   ├── remote        # List secrets already stored on GitHub
//! │   ├── prompt        # dialoguer-backed Prompter
//! │   ├── completions   # Shell completion scripts
//! │   ├── signals       # Ctrl-C handling
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── api           # GitHub REST client (SecretsApi)
//!     ├── crypto        # Sealed-box encryption
//!     ├── collector     # Env file / prompt value collection
//!     ├── submit        # Per-secret seal and upload
//!     ├── provision     # The end-to-end run
//!     ├── config        # sealdrop.toml and settings layering
//!     ├── env           # Env file parsing
//!     ├── placeholder   # Placeholder detection
//!     ├── catalog       # The secrets this tool provisions
//!     └── validation    # Secret name rules
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::catalog::CATALOG;
pub use crate::error::{Error, Result};
