//! Repository definitions bound to a build chain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One repository attached to a chain, as handed over by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryDefinition {
    /// Host-side repository id, used to look up the revision of an execution.
    pub id: u64,
    /// Display name of the repository.
    #[serde(default)]
    pub name: String,
    /// Type-specific repository data.
    pub repository: Repository,
}

impl RepositoryDefinition {
    /// Create a definition with the given id and repository.
    pub fn new(id: u64, name: impl Into<String>, repository: Repository) -> Self {
        Self {
            id,
            name: name.into(),
            repository,
        }
    }
}

/// Repository reference, tagged by provider type.
///
/// Each variant carries exactly what its authentication path needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Repository {
    /// Repository configured through the GitHub repository type, with its own
    /// stored credentials.
    #[serde(rename = "github")]
    GitHub(GitHubRepository),
    /// Plain Git repository addressed by clone URL.
    Git(GitRepository),
    /// Any other repository type. Statuses are never reported for these.
    Other {
        /// Plugin key of the repository type, for logging.
        plugin_key: String,
    },
}

impl Repository {
    /// Short type name for log output.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::GitHub(_) => "github",
            Self::Git(_) => "git",
            Self::Other { plugin_key } => plugin_key,
        }
    }
}

/// GitHub-typed repository with stored credentials.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitHubRepository {
    /// Repository identity in `owner/name` form.
    pub repository: String,
    /// GitHub user the password belongs to.
    pub username: String,
    /// Password as stored by the host, encrypted at rest.
    pub encrypted_password: String,
}

impl fmt::Debug for GitHubRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubRepository")
            .field("repository", &self.repository)
            .field("username", &self.username)
            .field("encrypted_password", &"[REDACTED]")
            .finish()
    }
}

/// Plain Git repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitRepository {
    /// Clone URL, e.g. `https://github.com/org/repo.git`.
    pub repository_url: String,
}
