//! Placeholder detection.
//!
//! Template env files ship values like `your-stripe-key-here`. Those must
//! never reach the secret store, so both the collector and the submitter
//! consult a [`PlaceholderPolicy`].

use crate::core::constants::DEFAULT_PLACEHOLDER_PREFIXES;

/// Recognized placeholder prefixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderPolicy {
    prefixes: Vec<String>,
}

impl Default for PlaceholderPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER_PREFIXES.iter().copied())
    }
}

impl PlaceholderPolicy {
    /// Build a policy from prefixes. Empty prefixes are dropped, since they
    /// would match every value.
    pub fn new<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut prefixes: Vec<String> = prefixes
            .into_iter()
            .map(Into::into)
            .filter(|p: &String| !p.is_empty())
            .collect();
        prefixes.dedup();
        Self { prefixes }
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Whether `value` is an unfilled placeholder.
    pub fn is_placeholder(&self, value: &str) -> bool {
        self.prefixes.iter().any(|p| value.starts_with(p.as_str()))
    }

    /// Whether `value` should not be submitted at all: empty or a placeholder.
    pub fn should_skip(&self, value: &str) -> bool {
        value.is_empty() || self.is_placeholder(value)
    }
}
