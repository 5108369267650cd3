//! GitHub REST API access for repository Actions secrets.
//!
//! [`SecretsApi`] is the seam the provisioning flow talks to;
//! [`GitHubClient`] implements it over `reqwest`'s blocking client. Requests
//! are made one at a time and never retried.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::core::constants;
use crate::core::crypto::SealedValue;
use crate::core::types::{PublicKeyMaterial, Repository};
use crate::error::ApiError;

/// How GitHub acknowledged an upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutStatus {
    /// HTTP 201.
    Created,
    /// HTTP 204.
    Updated,
}

impl PutStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PutStatus::Created => "created",
            PutStatus::Updated => "updated",
        }
    }
}

/// A secret as listed by GitHub (name and timestamps, never the value).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, serde::Serialize)]
pub struct RemoteSecret {
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Repository secret operations.
pub trait SecretsApi {
    /// Fetch the repository's current public key.
    fn public_key(&self) -> Result<PublicKeyMaterial, ApiError>;

    /// Create or replace one secret.
    fn put_secret(&self, name: &str, sealed: &SealedValue) -> Result<PutStatus, ApiError>;

    /// List the secrets currently stored for the repository.
    fn list_secrets(&self) -> Result<Vec<RemoteSecret>, ApiError>;
}

#[derive(Debug, Deserialize)]
struct PublicKeyResponse {
    key_id: String,
    key: String,
}

#[derive(Debug, Deserialize)]
struct ListSecretsResponse {
    total_count: usize,
    secrets: Vec<RemoteSecret>,
}

/// Blocking GitHub client bound to one repository and token.
pub struct GitHubClient {
    http: reqwest::blocking::Client,
    base_url: String,
    repository: Repository,
    token: Zeroizing<String>,
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("base_url", &self.base_url)
            .field("repository", &self.repository)
            .finish_non_exhaustive()
    }
}

impl GitHubClient {
    fn user_agent() -> String {
        format!("sealdrop/{}", env!("CARGO_PKG_VERSION"))
    }

    /// Create a client.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Client` if the TLS backend cannot be initialized.
    pub fn new(
        base_url: impl Into<String>,
        repository: Repository,
        token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(Self::user_agent())
            .timeout(timeout)
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            repository,
            token: Zeroizing::new(token.into()),
        })
    }

    pub fn repository(&self) -> &Repository {
        &self.repository
    }

    fn secrets_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/actions/secrets",
            self.base_url, self.repository.owner, self.repository.name
        )
    }

    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::blocking::RequestBuilder {
        self.http
            .request(method, url)
            .bearer_auth(self.token.as_str())
            .header(reqwest::header::ACCEPT, constants::GITHUB_ACCEPT)
            .header("X-GitHub-Api-Version", constants::GITHUB_API_VERSION)
    }
}

/// Turn a non-success response into `ApiError::Status`, keeping a bounded
/// slice of the body for the operator.
fn status_error(resp: reqwest::blocking::Response) -> ApiError {
    let status = resp.status().as_u16();
    let body = resp.text().unwrap_or_default();
    warn!(status, "unexpected GitHub response");
    ApiError::Status {
        status,
        body: truncate(body.trim(), constants::MAX_DIAGNOSTIC_LEN),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &s[..end])
}

impl SecretsApi for GitHubClient {
    fn public_key(&self) -> Result<PublicKeyMaterial, ApiError> {
        let url = format!("{}/public-key", self.secrets_url());
        debug!(%url, "fetching public key");

        let resp = self
            .request(reqwest::Method::GET, &url)
            .send()
            .map_err(ApiError::Transport)?;

        if resp.status() != reqwest::StatusCode::OK {
            return Err(status_error(resp));
        }

        let body: PublicKeyResponse = resp.json().map_err(ApiError::Decode)?;
        let key = PublicKeyMaterial::from_base64(body.key_id, &body.key)?;
        debug!(key_id = key.key_id(), "public key fetched");
        Ok(key)
    }

    fn put_secret(&self, name: &str, sealed: &SealedValue) -> Result<PutStatus, ApiError> {
        let url = format!("{}/{}", self.secrets_url(), name);
        debug!(%url, key_id = sealed.key_id(), "uploading secret");

        let resp = self
            .request(reqwest::Method::PUT, &url)
            .json(sealed)
            .send()
            .map_err(ApiError::Transport)?;

        match resp.status().as_u16() {
            201 => Ok(PutStatus::Created),
            204 => Ok(PutStatus::Updated),
            _ => Err(status_error(resp)),
        }
    }

    fn list_secrets(&self) -> Result<Vec<RemoteSecret>, ApiError> {
        let mut secrets = Vec::new();
        let mut page = 1u32;

        loop {
            let url = format!(
                "{}?per_page={}&page={}",
                self.secrets_url(),
                constants::LIST_PAGE_SIZE,
                page
            );
            debug!(%url, "listing secrets");

            let resp = self
                .request(reqwest::Method::GET, &url)
                .send()
                .map_err(ApiError::Transport)?;

            if resp.status() != reqwest::StatusCode::OK {
                return Err(status_error(resp));
            }

            let body: ListSecretsResponse = resp.json().map_err(ApiError::Decode)?;
            let fetched = body.secrets.len();
            secrets.extend(body.secrets);

            if fetched == 0 || secrets.len() >= body.total_count {
                break;
            }
            page += 1;
        }

        Ok(secrets)
    }
}
