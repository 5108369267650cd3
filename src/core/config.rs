//! Configuration loading.
//!
//! Settings are layered: built-in defaults, then `sealdrop.toml`, then
//! command-line flags (which clap also fills from `SEALDROP_*` variables).
//! The API token is only ever read from the environment; the config file
//! rejects unknown keys, so a stray `token = ...` line is an error.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::core::placeholder::PlaceholderPolicy;
use crate::core::types::Repository;
use crate::error::{ConfigError, Result};

/// Contents of `sealdrop.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub repository: Option<RepositorySection>,
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub collect: CollectSection,
}

/// `[repository]` section.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepositorySection {
    pub owner: String,
    pub name: String,
}

/// `[api]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiSection {
    pub url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// `[collect]` section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectSection {
    pub env_file: Option<PathBuf>,
    pub placeholder_prefixes: Option<Vec<String>>,
}

impl FileConfig {
    /// Parse config file contents.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the TOML is malformed or has unknown keys.
    pub fn parse(contents: &str, path: &Path) -> Result<Self> {
        toml::from_str(contents).map_err(|source| {
            ConfigError::Parse {
                path: path.display().to_string(),
                reason: source.message().to_string(),
            }
            .into()
        })
    }

    /// Load a config file from an explicit path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&contents, path)
    }

    /// Find and load the config file.
    ///
    /// An explicit path must exist. Otherwise `./sealdrop.toml` is tried,
    /// then `<config dir>/sealdrop/config.toml`; neither is required.
    pub fn discover(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }

        let candidates = std::iter::once(PathBuf::from(constants::CONFIG_FILE))
            .chain(dirs::config_dir().map(|d| d.join(constants::USER_CONFIG_PATH)));

        for path in candidates {
            if path.is_file() {
                return Ok((Self::load(&path)?, Some(path)));
            }
        }

        debug!("no config file found, using defaults");
        Ok((Self::default(), None))
    }
}

/// Values supplied on the command line.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub repository: Option<String>,
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub env_file: Option<PathBuf>,
    pub placeholder_prefixes: Vec<String>,
}

/// Fully resolved settings for one run.
pub struct Settings {
    pub repository: Option<Repository>,
    pub api_url: String,
    pub timeout: Duration,
    pub env_file: PathBuf,
    pub placeholders: PlaceholderPolicy,
    pub config_path: Option<PathBuf>,
    token: Option<Zeroizing<String>>,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("repository", &self.repository)
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .field("env_file", &self.env_file)
            .field("placeholders", &self.placeholders)
            .field("config_path", &self.config_path)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Settings {
    /// Merge file config, overrides and the environment.
    ///
    /// `lookup` reads environment variables; tests pass a closure over a map.
    pub fn resolve(
        file: FileConfig,
        config_path: Option<PathBuf>,
        overrides: Overrides,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let repository = match (overrides.repository, file.repository) {
            (Some(flag), _) => Some(flag.parse::<Repository>()?),
            (None, Some(section)) => Some(Repository::new(section.owner, section.name)?),
            (None, None) => None,
        };

        let api_url = overrides
            .api_url
            .or(file.api.url)
            .unwrap_or_else(|| constants::DEFAULT_API_URL.to_string());
        let api_url = validate_api_url(&api_url)?;

        let timeout_secs = overrides
            .timeout_secs
            .or(file.api.timeout_secs)
            .unwrap_or(constants::DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_secs",
                reason: "must be greater than zero".to_string(),
            }
            .into());
        }

        let env_file = overrides
            .env_file
            .or(file.collect.env_file)
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_ENV_FILE));

        let placeholders = if !overrides.placeholder_prefixes.is_empty() {
            PlaceholderPolicy::new(overrides.placeholder_prefixes)
        } else if let Some(prefixes) = file.collect.placeholder_prefixes {
            PlaceholderPolicy::new(prefixes)
        } else {
            PlaceholderPolicy::default()
        };

        let token = constants::TOKEN_ENV_VARS
            .iter()
            .filter_map(|var| lookup(var))
            .map(|t| t.trim().to_string())
            .find(|t| !t.is_empty())
            .map(Zeroizing::new);

        let settings = Self {
            repository,
            api_url,
            timeout: Duration::from_secs(timeout_secs),
            env_file,
            placeholders,
            config_path,
            token,
        };
        debug!(?settings, "settings resolved");

        Ok(settings)
    }

    /// The target repository, or an error if none was configured.
    pub fn require_repository(&self) -> Result<&Repository> {
        self.repository
            .as_ref()
            .ok_or_else(|| ConfigError::MissingRepository.into())
    }

    /// The API token, or an error if none was found.
    pub fn require_token(&self) -> Result<&str> {
        self.token
            .as_ref()
            .map(|t| t.as_str())
            .ok_or_else(|| ConfigError::MissingToken.into())
    }
}

/// Accept `https://` URLs, and `http://` only for localhost.
fn validate_api_url(url: &str) -> Result<String> {
    let url = url.trim().trim_end_matches('/');

    if url.starts_with("https://") {
        return Ok(url.to_string());
    }

    if let Some(rest) = url.strip_prefix("http://") {
        let host = rest.split('/').next().unwrap_or("");
        let host = host.rsplit_once(':').map(|(h, _)| h).unwrap_or(host);
        if matches!(host, "localhost" | "127.0.0.1") {
            return Ok(url.to_string());
        }
    }

    Err(ConfigError::InsecureApiUrl(url.to_string()).into())
}
