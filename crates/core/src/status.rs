//! Commit status values and chain execution outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// State of a commit status as reported to the hosting service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusState {
    /// The chain has started and has not finished yet.
    Pending,
    /// The chain finished successfully.
    Success,
    /// The chain finished with a failed build.
    Failure,
    /// The chain could not run to completion.
    Error,
}

impl StatusState {
    /// Wire name of the state.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Error => "error",
        }
    }

    /// Short human readable description shown next to the status.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Pending => "The build is in progress",
            Self::Success => "The build succeeded",
            Self::Failure => "The build failed",
            Self::Error => "The build could not complete",
        }
    }
}

impl fmt::Display for StatusState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "success" => Ok(Self::Success),
            "failure" => Ok(Self::Failure),
            "error" => Ok(Self::Error),
            other => Err(Error::configuration(format!(
                "unknown status state '{other}' (expected pending, success, failure or error)"
            ))),
        }
    }
}

/// Final state of a chain execution, as seen by the post-chain hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExecutionState {
    /// Every stage passed.
    Successful,
    /// At least one job failed.
    Failed,
    /// The chain was stopped before finishing.
    Stopped,
    /// The chain never ran, or its state is not known yet.
    #[default]
    NotBuilt,
}

impl ExecutionState {
    /// Commit status reported for a chain that ended in this state.
    #[must_use]
    pub const fn status(self) -> StatusState {
        match self {
            Self::Successful => StatusState::Success,
            Self::Failed => StatusState::Failure,
            Self::Stopped | Self::NotBuilt => StatusState::Error,
        }
    }
}

impl FromStr for ExecutionState {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "successful" | "success" => Ok(Self::Successful),
            "failed" | "failure" => Ok(Self::Failed),
            "stopped" => Ok(Self::Stopped),
            "not-built" => Ok(Self::NotBuilt),
            other => Err(Error::configuration(format!(
                "unknown execution state '{other}' (expected successful, failed, stopped or not-built)"
            ))),
        }
    }
}
