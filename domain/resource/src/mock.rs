use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use crate::{
    command::ResourceFieldPatch,
    event::ResourceEvent,
    message_queue::MessageQueueProducerTemplate,
    model::{
        entity::{Resource, ResourceTranslation, Tag},
        vo::{ResourceOption, ResourcePage, ResourceQuery},
    },
    repository::{ResourceRepo, TagRepo},
};

mock! {
    pub ResourceEventProducer {}
    #[async_trait]
    impl MessageQueueProducerTemplate<ResourceEvent> for ResourceEventProducer {
        async fn send_object(&self, content: &ResourceEvent, topic: &str) -> anyhow::Result<()>;
    }
}

mock! {
    pub ResourceRepo {}
    #[async_trait]
    impl ResourceRepo for ResourceRepo {
        async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Resource>>;
        async fn get_with_author(&self, id: Uuid) -> anyhow::Result<Option<Resource>>;
        async fn list(&self, query: &ResourceQuery) -> anyhow::Result<ResourcePage>;
        async fn options(&self) -> anyhow::Result<Vec<ResourceOption>>;
        async fn update_fields(&self, id: Uuid, patch: &ResourceFieldPatch) -> anyhow::Result<()>;
        async fn replace_translations(
            &self,
            id: Uuid,
            translations: &[ResourceTranslation],
        ) -> anyhow::Result<()>;
        async fn replace_tag_associations(&self, id: Uuid, tag_ids: &[String])
            -> anyhow::Result<()>;
        async fn bulk_soft_delete(&self, ids: &[Uuid]) -> anyhow::Result<Vec<Uuid>>;
        async fn bulk_restore(&self, ids: &[Uuid]) -> anyhow::Result<Vec<Uuid>>;
        async fn bulk_force_delete(&self, ids: &[Uuid]) -> anyhow::Result<Vec<Uuid>>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
}

mock! {
    pub TagRepo {}
    #[async_trait]
    impl TagRepo for TagRepo {
        async fn find_or_create(&self, id: &str, name: &str) -> anyhow::Result<Tag>;
    }
}
