//! Core library components.
//!
//! The provisioning logic lives here, independent of the terminal: key
//! fetching and uploads (`api`), sealing (`crypto`), value collection
//! (`collector`), per-secret submission (`submit`) and the run that ties
//! them together (`provision`).

pub mod api;
pub mod catalog;
pub mod collector;
pub mod config;
pub mod constants;
pub mod crypto;
pub mod env;
pub mod placeholder;
pub mod provision;
pub mod submit;
pub mod types;
pub mod validation;
