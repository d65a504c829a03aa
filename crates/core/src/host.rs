//! Capabilities provided by the host build server.
//!
//! The status updater owns no configuration of its own. Everything it reads
//! comes through these traits, injected by whoever embeds it.

use secrecy::SecretString;
use std::collections::HashMap;

use crate::Result;

/// Resolves named build variables, including secret ones.
pub trait VariableContext: Send + Sync {
    /// Value of the variable, or `None` when it is not defined.
    fn variable(&self, key: &str) -> Option<SecretString>;
}

/// Server-wide application settings.
pub trait ApplicationProperties: Send + Sync {
    /// Base URL of the build server, e.g. `https://ci.example.com/`.
    fn base_url(&self) -> String;
}

/// Decrypts values the host stores encrypted at rest.
pub trait EncryptionService: Send + Sync {
    /// Decrypt a stored value.
    fn decrypt(&self, encrypted: &str) -> Result<SecretString>;
}

impl VariableContext for HashMap<String, String> {
    fn variable(&self, key: &str) -> Option<SecretString> {
        self.get(key).map(|value| SecretString::from(value.clone()))
    }
}

/// Encryption service for hosts that hand over passwords in clear text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaintextEncryption;

impl EncryptionService for PlaintextEncryption {
    fn decrypt(&self, encrypted: &str) -> Result<SecretString> {
        Ok(SecretString::from(encrypted.to_owned()))
    }
}
