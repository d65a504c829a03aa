//! GitHub provider for chainstatus.
//!
//! This crate provides:
//! - [`RepositoryId`] parsing from `owner/name` identifiers and clone URLs
//! - [`Credentials`] for basic and OAuth2 authentication
//! - [`StatusClient`], with [`OctocrabStatusClient`] as the implementation
//!   that talks to the commit status API

#![warn(missing_docs)]

pub mod client;
pub mod credentials;
pub mod repository_id;

pub use client::{CommitStatus, OctocrabStatusClient, StatusClient};
pub use credentials::Credentials;
pub use repository_id::RepositoryId;
