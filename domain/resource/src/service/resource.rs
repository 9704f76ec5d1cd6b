use async_trait::async_trait;
use uuid::Uuid;

use crate::command::UpdateResourceCommand;
use crate::exception::ResourceResult;
use crate::model::entity::Resource;
use crate::model::vo::{ResourceOption, ResourcePage, ResourceQuery};

/// Owns the state transitions of a resource record.
///
/// ```text
/// Active --soft-delete--> SoftDeleted --restore--> Active
/// Active|SoftDeleted --force-delete--> Removed (terminal)
/// ```
///
/// The three bulk operations are transactional and emit their event only
/// after a successful commit. `update` is not transactional: a failure
/// partway leaves the already-applied sub-steps persisted.
#[async_trait]
pub trait ResourceLifecycleService: Send + Sync {
    /// Apply a full update and return the refreshed record with its author
    /// projection. Emits `ResourceEvent::Updated` on success.
    async fn update(&self, id: Uuid, cmd: UpdateResourceCommand) -> ResourceResult<Resource>;

    /// Soft-delete the given ids. Returns the subset actually deleted.
    async fn delete_soft(&self, ids: &[Uuid]) -> ResourceResult<Vec<Uuid>>;

    /// Restore soft-deleted ids. Returns the subset actually restored.
    async fn restore(&self, ids: &[Uuid]) -> ResourceResult<Vec<Uuid>>;

    /// Permanently remove the given ids. Returns the subset actually
    /// removed.
    async fn delete_force(&self, ids: &[Uuid]) -> ResourceResult<Vec<Uuid>>;

    async fn get_by_id(&self, id: Uuid) -> ResourceResult<Resource>;

    async fn list(&self, query: ResourceQuery) -> ResourceResult<ResourcePage>;

    async fn options(&self) -> ResourceResult<Vec<ResourceOption>>;
}
