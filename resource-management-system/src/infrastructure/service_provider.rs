use std::sync::Arc;

use domain_resource::{
    event::ResourceEvent, message_queue::MessageQueueProducerTemplate,
    service::ResourceLifecycleService,
};
use service_resource::{ResourceLifecycleServiceImpl, TagSyncServiceImpl};

use super::background_service::BackgroundService;
use super::config::ResourceSystemConfig;
use super::database::{Database, OrmRepo};
use super::message_queue::{EventLogConsumer, InternalMessageQueueProducer};

/// Wires the collaborators together. Repositories are built per call, so
/// every request works with its own statement queue.
pub struct ServiceProvider {
    config: ResourceSystemConfig,
    db: Arc<Database>,
    mq_producer: Arc<InternalMessageQueueProducer>,
}

impl ServiceProvider {
    pub async fn build(config: config::Config) -> anyhow::Result<Self> {
        let config = config.try_deserialize::<ResourceSystemConfig>()?;
        let db = Arc::new(Database::new(&config.db.url).await?);
        let mq_producer = Arc::new(InternalMessageQueueProducer::new());
        Ok(Self {
            config,
            db,
            mq_producer,
        })
    }

    pub fn config(&self) -> &ResourceSystemConfig {
        &self.config
    }

    pub fn resource_service(&self) -> Arc<dyn ResourceLifecycleService> {
        let repo = Arc::new(OrmRepo::builder().db(self.db.clone()).build());
        let tag_sync = Arc::new(TagSyncServiceImpl::builder().tag_repo(repo.clone()).build());
        let event_producer: Arc<dyn MessageQueueProducerTemplate<ResourceEvent>> =
            self.mq_producer.clone();
        Arc::new(
            ResourceLifecycleServiceImpl::builder()
                .resource_repo(repo)
                .tag_sync_service(tag_sync)
                .event_producer(event_producer)
                .build(),
        )
    }

    pub fn background_services(&self) -> Vec<Arc<dyn BackgroundService>> {
        vec![Arc::new(EventLogConsumer::new(self.mq_producer.get_receiver()))]
    }
}
