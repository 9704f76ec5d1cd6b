use async_trait::async_trait;
use domain_resource::message_queue::MessageQueueProducerTemplate;
use serde::Serialize;
use tracing::{error, info};

use super::background_service::BackgroundService;

#[derive(Debug, Clone)]
pub struct InternalMessage {
    pub topic: String,
    pub body: String,
}

/// In-process producer backed by an unbounded flume channel. Whatever the
/// lifecycle service publishes lands here and is drained by the consumers
/// spawned at startup.
pub struct InternalMessageQueueProducer {
    receiver: flume::Receiver<InternalMessage>,
    sender: flume::Sender<InternalMessage>,
}

#[async_trait]
impl<T> MessageQueueProducerTemplate<T> for InternalMessageQueueProducer
where
    T: Serialize + Send + Sync,
{
    async fn send_object(&self, content: &T, topic: &str) -> anyhow::Result<()> {
        Ok(self
            .sender
            .send_async(InternalMessage {
                topic: topic.to_string(),
                body: serde_json::to_string(content)?,
            })
            .await?)
    }
}

impl Default for InternalMessageQueueProducer {
    fn default() -> Self {
        Self::new()
    }
}

impl InternalMessageQueueProducer {
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        Self { sender, receiver }
    }

    pub fn get_receiver(&self) -> flume::Receiver<InternalMessage> {
        self.receiver.clone()
    }
}

/// Drains the internal queue and logs every event, which keeps mutation
/// notifications visible to operators without an external broker.
pub struct EventLogConsumer {
    receiver: flume::Receiver<InternalMessage>,
}

impl EventLogConsumer {
    pub fn new(receiver: flume::Receiver<InternalMessage>) -> Self {
        Self { receiver }
    }
}

#[async_trait]
impl BackgroundService for EventLogConsumer {
    async fn run(&self) {
        loop {
            match self.receiver.recv_async().await {
                Ok(message) => info!(topic = %message.topic, "{}", message.body),
                Err(e) => {
                    error!("{}", e);
                    return;
                }
            }
        }
    }
}
