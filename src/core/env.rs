//! Env file type.
//!
//! Reads `KEY=value` files such as `.env.local` into an ordered lookup table.

use std::path::{Path, PathBuf};

use tracing::debug;
use zeroize::Zeroizing;

use crate::error::Result;

/// A parsed env file.
#[derive(Clone, Default)]
pub struct EnvFile {
    entries: Vec<(String, Zeroizing<String>)>,
    path: PathBuf,
}

impl EnvFile {
    /// Parse an env file from disk.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = Zeroizing::new(std::fs::read_to_string(path)?);
        let mut env = Self::parse(&contents);
        env.path = path.to_path_buf();

        debug!(path = %path.display(), entries = env.len(), "env file loaded");
        Ok(env)
    }

    /// Parse an env file if it exists; `None` when it does not.
    ///
    /// # Errors
    ///
    /// Returns error if the file exists but cannot be read.
    pub fn load_optional(path: impl AsRef<Path>) -> Result<Option<Self>> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no env file");
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    /// Parse env file contents.
    ///
    /// Skips blank lines, `#` comments and lines without `=`. Splits at the
    /// first `=`, trims both sides and strips surrounding quotes.
    pub fn parse(contents: &str) -> Self {
        let mut entries = Vec::new();

        for line in contents.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                if key.is_empty() {
                    continue;
                }
                let value = value.trim().trim_matches('"').trim_matches('\'');
                entries.push((key.to_string(), Zeroizing::new(value.to_string())));
            }
        }

        Self {
            entries,
            path: PathBuf::new(),
        }
    }

    /// Create from raw key-value pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), Zeroizing::new(v.into())))
                .collect(),
            path: PathBuf::new(),
        }
    }

    /// Get a value by key. The last occurrence wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Keys in file order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of parsed lines.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// File path, empty when parsed from a string.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Debug for EnvFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvFile")
            .field("keys", &self.keys().collect::<Vec<_>>())
            .field("path", &self.path)
            .finish()
    }
}
