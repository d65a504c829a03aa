//! Chain lifecycle hooks.

use async_trait::async_trait;
use chainstatus_core::{Chain, ChainExecution, StatusState};
use std::sync::Arc;
use tracing::debug;

use crate::updater::StatusUpdater;

/// An action the host runs at a fixed point of a chain's lifecycle.
#[async_trait]
pub trait ChainAction: Send + Sync {
    /// Name for logs.
    fn name(&self) -> &'static str;

    /// Run the action. Never fails the chain.
    async fn execute(&self, chain: &Chain, execution: &ChainExecution);
}

/// Marks the commit pending when a chain starts.
#[derive(Debug, Clone)]
pub struct PreChainStatus {
    updater: Arc<StatusUpdater>,
}

impl PreChainStatus {
    /// Create the hook.
    pub fn new(updater: Arc<StatusUpdater>) -> Self {
        Self { updater }
    }
}

#[async_trait]
impl ChainAction for PreChainStatus {
    fn name(&self) -> &'static str {
        "pre-chain"
    }

    async fn execute(&self, chain: &Chain, execution: &ChainExecution) {
        let outcome = self
            .updater
            .update_status(StatusState::Pending, chain, execution)
            .await;
        debug!(hook = self.name(), %outcome, "Chain action finished");
    }
}

/// Reports the final result when a chain completes.
#[derive(Debug, Clone)]
pub struct PostChainStatus {
    updater: Arc<StatusUpdater>,
}

impl PostChainStatus {
    /// Create the hook.
    pub fn new(updater: Arc<StatusUpdater>) -> Self {
        Self { updater }
    }
}

#[async_trait]
impl ChainAction for PostChainStatus {
    fn name(&self) -> &'static str {
        "post-chain"
    }

    async fn execute(&self, chain: &Chain, execution: &ChainExecution) {
        let status = execution.state.status();
        let outcome = self.updater.update_status(status, chain, execution).await;
        debug!(hook = self.name(), %outcome, "Chain action finished");
    }
}
