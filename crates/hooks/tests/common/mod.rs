//! Test doubles for the host capabilities and the status client.

#![allow(dead_code)]

use async_trait::async_trait;
use chainstatus_core::{
    ApplicationProperties, Chain, ChainExecution, EncryptionService, Error, GitHubRepository,
    GitRepository, Repository, RepositoryDefinition, Result, StatusState,
};
use chainstatus_github::{CommitStatus, Credentials, RepositoryId, StatusClient};
use chainstatus_hooks::StatusUpdater;
use secrecy::{ExposeSecret, SecretString};
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

pub const BASE_URL: &str = "http://ci.example.com/";
pub const RESULT_KEY: &str = "PROJ-PLAN-3";
pub const SHA: &str = "6dcb09b5b57875f334f61aebed695e2e4193db5e";
pub const TOKEN: &str = "ghp_test_token";

/// How a recorded call authenticated, with secrets exposed for assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedAuth {
    Basic { username: String, password: String },
    OAuth2 { token: String },
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub auth: RecordedAuth,
    pub repository: RepositoryId,
    pub sha: String,
    pub status: CommitStatus,
}

/// Records calls instead of sending them.
#[derive(Default)]
pub struct RecordingClient {
    calls: Mutex<Vec<RecordedCall>>,
    fail: bool,
}

impl RecordingClient {
    pub fn failing() -> Self {
        Self {
            calls: Mutex::default(),
            fail: true,
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl StatusClient for RecordingClient {
    async fn create_status(
        &self,
        credentials: &Credentials,
        repository: &RepositoryId,
        sha: &str,
        status: &CommitStatus,
    ) -> Result<()> {
        let auth = match credentials {
            Credentials::Basic { username, password } => RecordedAuth::Basic {
                username: username.clone(),
                password: password.expose_secret().to_owned(),
            },
            Credentials::OAuth2 { token } => RecordedAuth::OAuth2 {
                token: token.expose_secret().to_owned(),
            },
        };
        self.calls.lock().unwrap().push(RecordedCall {
            auth,
            repository: repository.clone(),
            sha: sha.to_owned(),
            status: status.clone(),
        });

        if self.fail {
            let cause = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
            return Err(Error::status_request(repository.to_string(), sha, cause));
        }
        Ok(())
    }
}

pub struct StaticApplication(pub String);

impl ApplicationProperties for StaticApplication {
    fn base_url(&self) -> String {
        self.0.clone()
    }
}

/// Decrypts values of the form `enc:<plain>`; anything else fails.
pub struct PrefixEncryption;

impl EncryptionService for PrefixEncryption {
    fn decrypt(&self, encrypted: &str) -> Result<SecretString> {
        encrypted
            .strip_prefix("enc:")
            .map(|plain| SecretString::from(plain.to_owned()))
            .ok_or_else(|| Error::decryption("value was not produced by this key"))
    }
}

pub fn variables_with_token() -> HashMap<String, String> {
    HashMap::from([("github.status_access_key".to_string(), TOKEN.to_string())])
}

pub fn updater(variables: HashMap<String, String>, client: Arc<RecordingClient>) -> StatusUpdater {
    StatusUpdater::new(
        Arc::new(variables),
        Arc::new(StaticApplication(BASE_URL.to_string())),
        Arc::new(PrefixEncryption),
        client,
    )
}

pub fn git_repository(id: u64, url: &str) -> RepositoryDefinition {
    RepositoryDefinition::new(
        id,
        "app",
        Repository::Git(GitRepository {
            repository_url: url.to_string(),
        }),
    )
}

pub fn github_repository(
    id: u64,
    repository: &str,
    encrypted_password: &str,
) -> RepositoryDefinition {
    RepositoryDefinition::new(
        id,
        "app",
        Repository::GitHub(GitHubRepository {
            repository: repository.to_string(),
            username: "u".to_string(),
            encrypted_password: encrypted_password.to_string(),
        }),
    )
}

pub fn chain_with(repositories: Vec<RepositoryDefinition>) -> Chain {
    repositories
        .into_iter()
        .fold(Chain::new("PROJ-PLAN"), Chain::with_repository)
}

pub fn execution() -> ChainExecution {
    ChainExecution::new(RESULT_KEY).with_revision(1, SHA)
}

pub fn pending() -> StatusState {
    StatusState::Pending
}

/// Collects formatted log output of the current thread.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    /// Install as the thread's default subscriber until the guard drops.
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
