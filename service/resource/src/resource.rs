use std::sync::Arc;

use async_trait::async_trait;
use domain_resource::{
    command::UpdateResourceCommand,
    event::ResourceEvent,
    exception::{ResourceException, ResourceResult},
    message_queue::MessageQueueProducerTemplate,
    model::{
        entity::Resource,
        vo::{ResourceOption, ResourcePage, ResourceQuery},
    },
    repository::ResourceRepo,
    service::{ResourceLifecycleService, TagSyncService},
};
use tracing::error;
use typed_builder::TypedBuilder;
use uuid::Uuid;

#[derive(TypedBuilder)]
pub struct ResourceLifecycleServiceImpl {
    resource_repo: Arc<dyn ResourceRepo>,
    tag_sync_service: Arc<dyn TagSyncService>,
    event_producer: Arc<dyn MessageQueueProducerTemplate<ResourceEvent>>,
}

impl ResourceLifecycleServiceImpl {
    /// Transactional envelope shared by the three bulk operations: take the
    /// queued result, commit the queue, and on any failure log it for the
    /// operator and surface the error after the repository rolled back.
    async fn commit_bulk(
        &self,
        operation: &str,
        queued: anyhow::Result<Vec<Uuid>>,
    ) -> ResourceResult<Vec<Uuid>> {
        let affected = match queued {
            Ok(affected) => affected,
            Err(e) => {
                error!("resource {operation} failed before commit: {e}");
                return Err(e.into());
            }
        };
        if let Err(e) = self.resource_repo.save_changed().await {
            error!("resource {operation} rolled back: {e}");
            return Err(e.into());
        }
        Ok(affected)
    }

    async fn emit(&self, event: ResourceEvent) -> ResourceResult<()> {
        self.event_producer.send_object(&event, event.topic()).await?;
        Ok(())
    }
}

#[async_trait]
impl ResourceLifecycleService for ResourceLifecycleServiceImpl {
    async fn update(&self, id: Uuid, cmd: UpdateResourceCommand) -> ResourceResult<Resource> {
        if self.resource_repo.find_by_id(id).await?.is_none() {
            return Err(ResourceException::NotFound { id });
        }

        // Each sub-step persists on its own; there is no rollback across
        // them.
        self.resource_repo.update_fields(id, &cmd.fields).await?;
        self.resource_repo.replace_translations(id, &cmd.translations).await?;
        let tag_ids = self.tag_sync_service.reconcile(&cmd.tags).await?;
        self.resource_repo.replace_tag_associations(id, &tag_ids).await?;

        let record = self
            .resource_repo
            .get_with_author(id)
            .await?
            .ok_or(ResourceException::NotFound { id })?;
        self.emit(ResourceEvent::Updated {
            resource: record.clone(),
        })
        .await?;
        Ok(record)
    }

    async fn delete_soft(&self, ids: &[Uuid]) -> ResourceResult<Vec<Uuid>> {
        let queued = self.resource_repo.bulk_soft_delete(ids).await;
        let deleted = self.commit_bulk("soft delete", queued).await?;
        self.emit(ResourceEvent::SoftDeleted {
            ids: deleted.clone(),
        })
        .await?;
        Ok(deleted)
    }

    async fn restore(&self, ids: &[Uuid]) -> ResourceResult<Vec<Uuid>> {
        let queued = self.resource_repo.bulk_restore(ids).await;
        let restored = self.commit_bulk("restore", queued).await?;
        self.emit(ResourceEvent::Restored {
            ids: restored.clone(),
        })
        .await?;
        Ok(restored)
    }

    async fn delete_force(&self, ids: &[Uuid]) -> ResourceResult<Vec<Uuid>> {
        let queued = self.resource_repo.bulk_force_delete(ids).await;
        let deleted = self.commit_bulk("force delete", queued).await?;
        self.emit(ResourceEvent::ForceDeleted {
            ids: deleted.clone(),
        })
        .await?;
        Ok(deleted)
    }

    async fn get_by_id(&self, id: Uuid) -> ResourceResult<Resource> {
        self.resource_repo
            .get_with_author(id)
            .await?
            .ok_or(ResourceException::NotFound { id })
    }

    async fn list(&self, query: ResourceQuery) -> ResourceResult<ResourcePage> {
        Ok(self.resource_repo.list(&query).await?)
    }

    async fn options(&self) -> ResourceResult<Vec<ResourceOption>> {
        Ok(self.resource_repo.options().await?)
    }
}
