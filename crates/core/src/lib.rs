//! Core types for chainstatus.
//!
//! This crate holds everything the status updater needs that is not tied to a
//! hosting provider:
//! - [`Chain`] and [`ChainExecution`], the per-invocation data from the host
//! - [`Repository`], the tagged repository reference
//! - [`StatusState`] and [`ExecutionState`]
//! - the host capability traits in [`host`]
//! - the crate-wide [`Error`] type

pub mod chain;
pub mod config;
pub mod error;
pub mod host;
pub mod repository;
pub mod status;
pub mod url;

pub use chain::{Chain, ChainExecution};
pub use error::{Error, Result};
pub use host::{ApplicationProperties, EncryptionService, PlaintextEncryption, VariableContext};
pub use repository::{GitHubRepository, GitRepository, Repository, RepositoryDefinition};
pub use status::{ExecutionState, StatusState};
