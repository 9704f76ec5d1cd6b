use async_trait::async_trait;
use uuid::Uuid;

use crate::command::ResourceFieldPatch;
use crate::model::entity::{Resource, ResourceTranslation};
use crate::model::vo::{ResourceOption, ResourcePage, ResourceQuery};

/// Persistence gateway for resource records.
///
/// Write methods that take part in the lifecycle transaction
/// (`bulk_soft_delete`, `bulk_restore`, `bulk_force_delete`) only queue
/// their statements; nothing reaches the database until `save_changed`
/// commits the queue. The update-path methods execute immediately and are
/// not covered by that transaction.
#[async_trait]
pub trait ResourceRepo: Send + Sync {
    /// Locate one record by id, soft-deleted included. Relations are not
    /// loaded.
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Resource>>;

    /// One record by id with the author projected to `{id, label}` and
    /// translations and tags loaded. Soft-deleted records are retrievable.
    async fn get_with_author(&self, id: Uuid) -> anyhow::Result<Option<Resource>>;

    /// Page of non-deleted records, newest first.
    async fn list(&self, query: &ResourceQuery) -> anyhow::Result<ResourcePage>;

    /// Id and label of every non-deleted record.
    async fn options(&self) -> anyhow::Result<Vec<ResourceOption>>;

    /// Apply the scalar field patch. Executes immediately.
    async fn update_fields(&self, id: Uuid, patch: &ResourceFieldPatch) -> anyhow::Result<()>;

    /// Replace the whole translation set. Executes immediately.
    async fn replace_translations(
        &self,
        id: Uuid,
        translations: &[ResourceTranslation],
    ) -> anyhow::Result<()>;

    /// Replace the whole tag association set. Duplicate ids in the input
    /// are absorbed by the keyed association table. Executes immediately.
    async fn replace_tag_associations(&self, id: Uuid, tag_ids: &[String])
        -> anyhow::Result<()>;

    /// Queue a soft delete of every listed id that exists and is not
    /// already soft-deleted. Returns the affected subset.
    async fn bulk_soft_delete(&self, ids: &[Uuid]) -> anyhow::Result<Vec<Uuid>>;

    /// Queue a restore of every listed id that exists and is soft-deleted.
    /// Returns the affected subset.
    async fn bulk_restore(&self, ids: &[Uuid]) -> anyhow::Result<Vec<Uuid>>;

    /// Queue a permanent removal (associations and translations included)
    /// of every listed id that exists. Returns the affected subset.
    async fn bulk_force_delete(&self, ids: &[Uuid]) -> anyhow::Result<Vec<Uuid>>;

    /// Run the queued statements in one transaction. Rolls back and clears
    /// the queue on failure. Returns false when nothing was queued.
    async fn save_changed(&self) -> anyhow::Result<bool>;
}
