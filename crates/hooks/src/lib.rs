//! Commit status reporting for build chains.
//!
//! This crate wires the pieces together:
//! - [`StatusUpdater`] decides whether and how to report, and makes the call
//! - [`PreChainStatus`] reports `pending` when a chain starts
//! - [`PostChainStatus`] reports the final result when a chain completes
//!
//! # Opting in
//!
//! A chain is reported on only when the `github.status_access_key` variable
//! is defined and `custom.gitHubStatus.disabled` is not `true`. Chains with
//! more than one repository are never reported on.

pub mod lifecycle;
pub mod updater;

pub use lifecycle::{ChainAction, PostChainStatus, PreChainStatus};
pub use updater::{StatusOutcome, StatusUpdater};
