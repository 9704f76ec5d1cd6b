use async_trait::async_trait;

use crate::model::entity::Tag;

#[async_trait]
pub trait TagRepo: Send + Sync {
    /// Idempotent find-or-create keyed on the already-normalized id.
    ///
    /// `name` is only written on creation; an existing tag keeps the name
    /// it was first created with.
    async fn find_or_create(&self, id: &str, name: &str) -> anyhow::Result<Tag>;
}
