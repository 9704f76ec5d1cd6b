use async_trait::async_trait;

/// Long-running task spawned next to the web host.
#[async_trait]
pub trait BackgroundService: Send + Sync {
    async fn run(&self);
}
