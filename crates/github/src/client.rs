//! Commit status client.
//!
//! [`StatusClient`] is the seam between the status updater and GitHub.
//! [`OctocrabStatusClient`] is the real implementation; it builds a fresh
//! client for every request so no connection state is shared between chains.

use async_trait::async_trait;
use chainstatus_core::{Error, Result, StatusState};
use octocrab::Octocrab;
use octocrab::models::StatusState as GitHubStatusState;
use secrecy::ExposeSecret;
use std::time::Duration;
use tracing::debug;

use crate::credentials::Credentials;
use crate::repository_id::RepositoryId;

/// Payload of one commit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitStatus {
    /// State to set.
    pub state: StatusState,
    /// Link shown next to the status.
    pub target_url: String,
    /// Short description.
    pub description: Option<String>,
    /// Label distinguishing this status from other integrations.
    pub context: Option<String>,
}

impl CommitStatus {
    /// A status with the given state and target URL.
    pub fn new(state: StatusState, target_url: impl Into<String>) -> Self {
        Self {
            state,
            target_url: target_url.into(),
            description: None,
            context: None,
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the context label.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

/// Creates commit statuses on a hosting service.
#[async_trait]
pub trait StatusClient: Send + Sync {
    /// Create a status for `sha` in `repository`.
    async fn create_status(
        &self,
        credentials: &Credentials,
        repository: &RepositoryId,
        sha: &str,
        status: &CommitStatus,
    ) -> Result<()>;
}

/// [`StatusClient`] backed by octocrab.
#[derive(Debug, Clone, Default)]
pub struct OctocrabStatusClient {
    api_base: Option<String>,
    timeout: Option<Duration>,
}

impl OctocrabStatusClient {
    /// Client for api.github.com with the HTTP client's default timeouts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use another API root, e.g. `https://ghe.example.com/api/v3`.
    #[must_use]
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Apply a connect/read/write timeout to every request.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn octocrab(&self, credentials: &Credentials) -> Result<Octocrab> {
        let mut builder = match credentials {
            Credentials::Basic { username, password } => Octocrab::builder()
                .basic_auth(username.clone(), password.expose_secret().to_owned()),
            Credentials::OAuth2 { token } => {
                Octocrab::builder().personal_token(token.expose_secret().to_owned())
            }
        };

        if let Some(api_base) = &self.api_base {
            builder = builder.base_uri(api_base.as_str()).map_err(|e| {
                Error::configuration(format!("Invalid GitHub API URL '{api_base}': {e}"))
            })?;
        }

        if let Some(timeout) = self.timeout {
            builder = builder
                .set_connect_timeout(Some(timeout))
                .set_read_timeout(Some(timeout))
                .set_write_timeout(Some(timeout));
        }

        builder
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create GitHub client: {e}")))
    }
}

const fn github_state(state: StatusState) -> GitHubStatusState {
    match state {
        StatusState::Pending => GitHubStatusState::Pending,
        StatusState::Success => GitHubStatusState::Success,
        StatusState::Failure => GitHubStatusState::Failure,
        StatusState::Error => GitHubStatusState::Error,
    }
}

#[async_trait]
impl StatusClient for OctocrabStatusClient {
    async fn create_status(
        &self,
        credentials: &Credentials,
        repository: &RepositoryId,
        sha: &str,
        status: &CommitStatus,
    ) -> Result<()> {
        debug!(
            repository = %repository,
            sha,
            state = %status.state,
            auth = credentials.scheme(),
            "Sending commit status"
        );

        let octocrab = self.octocrab(credentials)?;
        let repos = octocrab.repos(&repository.owner, &repository.name);
        let mut request = repos
            .create_status(sha.to_owned(), github_state(status.state))
            .target(status.target_url.clone());

        if let Some(description) = &status.description {
            request = request.description(description.clone());
        }
        if let Some(context) = &status.context {
            request = request.context(context.clone());
        }

        request
            .send()
            .await
            .map_err(|e| Error::status_request(repository.to_string(), sha, e))?;

        Ok(())
    }
}
