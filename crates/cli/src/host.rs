//! Host context read from the environment of a build script step.
//!
//! Bamboo exports build variables to scripts as `bamboo_<name>` with dots
//! replaced by underscores. Repositories are exported as numbered groups:
//!
//! | variable                               | meaning                        |
//! |----------------------------------------|--------------------------------|
//! | `bamboo_planRepository_<n>_type`       | `github`, `git`, anything else |
//! | `bamboo_planRepository_<n>_name`       | display name                   |
//! | `bamboo_planRepository_<n>_revision`   | revision built in this run     |
//! | `bamboo_planRepository_<n>_repositoryUrl` | clone URL (`git`)           |
//! | `bamboo_planRepository_<n>_repository` | `owner/name` (`github`)        |
//! | `bamboo_planRepository_<n>_username`   | user (`github`)                |
//! | `bamboo_planRepository_<n>_password`   | password (`github`)            |
//!
//! Numbering starts at 1 and stops at the first missing `type`.

use chainstatus_core::config::DISABLED_KEY;
use chainstatus_core::{
    ApplicationProperties, Chain, ChainExecution, Error, GitHubRepository, GitRepository,
    Repository, RepositoryDefinition, Result, VariableContext,
};
use secrecy::SecretString;

const PREFIX: &str = "bamboo_";

/// Environment variable name of a build variable.
pub fn env_key(key: &str) -> String {
    format!("{PREFIX}{}", key.replace('.', "_"))
}

/// Variable context backed by the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvVariables;

impl VariableContext for EnvVariables {
    fn variable(&self, key: &str) -> Option<SecretString> {
        std::env::var(env_key(key)).ok().map(SecretString::from)
    }
}

/// Base URL passed on the command line.
#[derive(Debug, Clone)]
pub struct StaticApplication {
    base_url: String,
}

impl StaticApplication {
    /// Create from a base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl ApplicationProperties for StaticApplication {
    fn base_url(&self) -> String {
        self.base_url.clone()
    }
}

/// Read the chain and its execution through `lookup`.
pub fn read_context(
    lookup: impl Fn(&str) -> Option<String>,
    plan_key: &str,
    plan_result_key: &str,
) -> Result<(Chain, ChainExecution)> {
    let mut chain = Chain::new(plan_key);
    let mut execution = ChainExecution::new(plan_result_key);

    if let Some(disabled) = lookup(&env_key(DISABLED_KEY)) {
        chain = chain.with_config(DISABLED_KEY, disabled);
    }

    for id in 1_u64.. {
        let field = |name: &str| lookup(&format!("{PREFIX}planRepository_{id}_{name}"));
        let Some(kind) = field("type") else {
            break;
        };
        let required = |name: &str| {
            field(name).ok_or_else(|| {
                Error::configuration(format!(
                    "{PREFIX}planRepository_{id}_{name} is required for {kind} repositories"
                ))
            })
        };

        let repository = match kind.to_ascii_lowercase().as_str() {
            "github" => Repository::GitHub(GitHubRepository {
                repository: required("repository")?,
                username: required("username")?,
                encrypted_password: required("password")?,
            }),
            "git" => Repository::Git(GitRepository {
                repository_url: required("repositoryUrl")?,
            }),
            _ => Repository::Other {
                plugin_key: kind.clone(),
            },
        };

        let name = field("name").unwrap_or_default();
        chain = chain.with_repository(RepositoryDefinition::new(id, name, repository));
        if let Some(revision) = field("revision") {
            execution = execution.with_revision(id, revision);
        }
    }

    Ok((chain, execution))
}

/// Read the chain and its execution from the process environment.
pub fn read_env_context(plan_key: &str, plan_result_key: &str) -> Result<(Chain, ChainExecution)> {
    read_context(|name| std::env::var(name).ok(), plan_key, plan_result_key)
}
