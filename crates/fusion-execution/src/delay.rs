use std::time::Duration;

use async_trait::async_trait;

/// Suspension used between workflow transitions.
#[async_trait]
pub trait StepDelay: Send + Sync {
    async fn wait(&self, duration: Duration);
}

/// Sleeps on the tokio timer.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioDelay;

#[async_trait]
impl StepDelay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Returns immediately. Used by scripted runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDelay;

#[async_trait]
impl StepDelay for NoDelay {
    async fn wait(&self, _duration: Duration) {}
}
