use async_trait::async_trait;
use serde::Serialize;

/// Fire-and-forget producer the lifecycle service publishes events through.
#[async_trait]
pub trait MessageQueueProducerTemplate<T>: Send + Sync
where
    T: Serialize + Send + Sync,
{
    async fn send_object(&self, content: &T, topic: &str) -> anyhow::Result<()>;
}
