use async_trait::async_trait;

use crate::model::vo::TagDescriptor;

/// Converts submitted tag descriptors into the canonical persisted id set,
/// creating unseen tags on the fly.
#[async_trait]
pub trait TagSyncService: Send + Sync {
    /// Resolve descriptors in input order. The output keeps duplicates;
    /// de-duplication is the association table's concern.
    async fn reconcile(&self, descriptors: &[TagDescriptor]) -> anyhow::Result<Vec<String>>;
}
