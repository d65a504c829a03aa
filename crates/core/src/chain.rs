//! Build chain and chain execution data supplied by the host per invocation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::repository::RepositoryDefinition;
use crate::status::ExecutionState;

/// A configured build chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chain {
    /// Plan key, e.g. `PROJ-PLAN`.
    pub key: String,
    /// Custom configuration of the chain's build definition.
    #[serde(default)]
    pub custom_configuration: BTreeMap<String, String>,
    /// Effective repository definitions of the chain.
    #[serde(default)]
    pub repositories: Vec<RepositoryDefinition>,
}

impl Chain {
    /// Create an empty chain with the given plan key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    /// Add a custom configuration entry.
    #[must_use]
    pub fn with_config(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_configuration.insert(key.into(), value.into());
        self
    }

    /// Add a repository definition.
    #[must_use]
    pub fn with_repository(mut self, repository: RepositoryDefinition) -> Self {
        self.repositories.push(repository);
        self
    }

    /// Look up a custom configuration value.
    #[must_use]
    pub fn custom_config(&self, key: &str) -> Option<&str> {
        self.custom_configuration.get(key).map(String::as_str)
    }

    /// Repository definitions in effect for this chain.
    #[must_use]
    pub fn effective_repository_definitions(&self) -> &[RepositoryDefinition] {
        &self.repositories
    }
}

/// One run of a chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainExecution {
    /// Result key of this run, e.g. `PROJ-PLAN-3`.
    pub plan_result_key: String,
    /// Revision built for each repository, keyed by repository id.
    #[serde(default)]
    pub revisions: BTreeMap<u64, String>,
    /// Final state. Only meaningful once the chain has finished.
    #[serde(default)]
    pub state: ExecutionState,
}

impl ChainExecution {
    /// Create an execution with the given result key.
    pub fn new(plan_result_key: impl Into<String>) -> Self {
        Self {
            plan_result_key: plan_result_key.into(),
            ..Self::default()
        }
    }

    /// Record the revision built for a repository.
    #[must_use]
    pub fn with_revision(mut self, repository_id: u64, revision: impl Into<String>) -> Self {
        self.revisions.insert(repository_id, revision.into());
        self
    }

    /// Set the final state.
    #[must_use]
    pub fn with_state(mut self, state: ExecutionState) -> Self {
        self.state = state;
        self
    }

    /// Revision recorded for a repository in this run.
    #[must_use]
    pub fn vcs_revision_key(&self, repository_id: u64) -> Option<&str> {
        self.revisions.get(&repository_id).map(String::as_str)
    }
}
