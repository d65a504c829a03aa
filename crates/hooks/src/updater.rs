//! The status updater.
//!
//! Every failure mode ends in a log line and a [`StatusOutcome`]. Nothing is
//! retried and nothing is returned as an error, so reporting can never change
//! the result of the build it reports on.

use chainstatus_core::config::{
    ACCESS_KEY_VARIABLE, DEFAULT_STATUS_CONTEXT, DISABLED_KEY, DisabledFlag,
};
use chainstatus_core::url::{normalize_repository_url, result_url};
use chainstatus_core::{
    ApplicationProperties, Chain, ChainExecution, EncryptionService, Error, Repository,
    StatusState, VariableContext,
};
use chainstatus_github::{CommitStatus, Credentials, RepositoryId, StatusClient};
use secrecy::SecretString;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// What [`StatusUpdater::update_status`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusOutcome {
    /// The chain turned reporting off.
    Disabled,
    /// The access key variable is not defined.
    NotOptedIn,
    /// The chain has zero or several repositories.
    AmbiguousRepositories(usize),
    /// No revision is recorded for the repository.
    MissingRevision,
    /// The repository type cannot carry a GitHub status.
    UnsupportedRepository,
    /// No `owner/name` could be derived for the repository.
    InvalidRepository,
    /// The stored repository password could not be decrypted.
    CredentialsUnavailable,
    /// The status was created.
    Published,
    /// The status call failed.
    Failed,
}

impl StatusOutcome {
    /// Whether a status was created.
    #[must_use]
    pub const fn is_published(self) -> bool {
        matches!(self, Self::Published)
    }
}

impl fmt::Display for StatusOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => f.write_str("disabled"),
            Self::NotOptedIn => f.write_str("not opted in"),
            Self::AmbiguousRepositories(count) => write!(f, "{count} repositories"),
            Self::MissingRevision => f.write_str("missing revision"),
            Self::UnsupportedRepository => f.write_str("unsupported repository"),
            Self::InvalidRepository => f.write_str("invalid repository"),
            Self::CredentialsUnavailable => f.write_str("credentials unavailable"),
            Self::Published => f.write_str("published"),
            Self::Failed => f.write_str("failed"),
        }
    }
}

/// Reports chain statuses to GitHub using capabilities supplied by the host.
#[derive(Clone)]
pub struct StatusUpdater {
    variables: Arc<dyn VariableContext>,
    application: Arc<dyn ApplicationProperties>,
    encryption: Arc<dyn EncryptionService>,
    client: Arc<dyn StatusClient>,
    context: String,
}

impl StatusUpdater {
    /// Create an updater. Statuses use the default context label.
    pub fn new(
        variables: Arc<dyn VariableContext>,
        application: Arc<dyn ApplicationProperties>,
        encryption: Arc<dyn EncryptionService>,
        client: Arc<dyn StatusClient>,
    ) -> Self {
        Self {
            variables,
            application,
            encryption,
            client,
            context: DEFAULT_STATUS_CONTEXT.to_string(),
        }
    }

    /// Use another status context label.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// Report `status` for the commit `execution` built.
    #[tracing::instrument(
        name = "update_status",
        skip_all,
        fields(chain = %chain.key, result = %execution.plan_result_key, status = %status)
    )]
    pub async fn update_status(
        &self,
        status: StatusState,
        chain: &Chain,
        execution: &ChainExecution,
    ) -> StatusOutcome {
        let raw_flag = chain.custom_config(DISABLED_KEY);
        match DisabledFlag::parse(raw_flag) {
            flag if flag.is_disabled() => {
                debug!("GitHub status reporting disabled for this chain");
                return StatusOutcome::Disabled;
            }
            DisabledFlag::Unrecognised => {
                warn!(
                    value = raw_flag.unwrap_or_default(),
                    "Unrecognised value for {DISABLED_KEY}, treating it as false"
                );
            }
            DisabledFlag::Unset | DisabledFlag::Value(_) => {}
        }

        let Some(token) = self.variables.variable(ACCESS_KEY_VARIABLE) else {
            debug!("{ACCESS_KEY_VARIABLE} is not defined, skipping GitHub status");
            return StatusOutcome::NotOptedIn;
        };

        let repositories = chain.effective_repository_definitions();
        let [definition] = repositories else {
            warn!(
                "Wanted 1 repo but found {}. Not updating GitHub status.",
                repositories.len()
            );
            return StatusOutcome::AmbiguousRepositories(repositories.len());
        };

        let Some(sha) = execution.vcs_revision_key(definition.id) else {
            warn!(
                repository = %definition.name,
                repository_id = definition.id,
                "No revision recorded for repository. Not updating GitHub status."
            );
            return StatusOutcome::MissingRevision;
        };

        let target_url = result_url(&self.application.base_url(), &execution.plan_result_key);

        let (credentials, repository) = match self.authenticate(&definition.repository, token) {
            Ok(Some(resolved)) => resolved,
            Ok(None) => {
                debug!(
                    kind = definition.repository.kind(),
                    "Repository type has no GitHub identity, skipping GitHub status"
                );
                return StatusOutcome::UnsupportedRepository;
            }
            Err(e @ Error::Decryption { .. }) => {
                error!(error = %e, "Failed to update GitHub status");
                return StatusOutcome::CredentialsUnavailable;
            }
            Err(e) => {
                warn!(error = %e, "Not updating GitHub status");
                return StatusOutcome::InvalidRepository;
            }
        };

        let commit_status = CommitStatus::new(status, target_url)
            .with_description(status.description())
            .with_context(self.context.clone());

        match self
            .client
            .create_status(&credentials, &repository, sha, &commit_status)
            .await
        {
            Ok(()) => {
                info!(repository = %repository, "GitHub status for commit {sha} set to {status}.");
                StatusOutcome::Published
            }
            Err(e) => {
                error!(
                    error = %e,
                    cause = %root_cause(&e),
                    "Failed to update GitHub status"
                );
                StatusOutcome::Failed
            }
        }
    }

    /// Pick credentials and identity for the repository type.
    fn authenticate(
        &self,
        repository: &Repository,
        token: SecretString,
    ) -> chainstatus_core::Result<Option<(Credentials, RepositoryId)>> {
        match repository {
            Repository::GitHub(github) => {
                let id = RepositoryId::from_id(&github.repository)?;
                let password = self.encryption.decrypt(&github.encrypted_password)?;
                Ok(Some((Credentials::basic(github.username.clone(), password), id)))
            }
            Repository::Git(git) => {
                let url = normalize_repository_url(git.repository_url.trim());
                let id = RepositoryId::from_url(url)?;
                Ok(Some((Credentials::oauth2(token), id)))
            }
            Repository::Other { .. } => Ok(None),
        }
    }
}

impl fmt::Debug for StatusUpdater {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusUpdater")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

fn root_cause(error: &(dyn std::error::Error + 'static)) -> String {
    let mut current = error;
    while let Some(source) = current.source() {
        current = source;
    }
    current.to_string()
}
