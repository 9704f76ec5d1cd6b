use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AuthorRef, ResourceTranslation, Tag};

/// One managed file asset and its metadata.
///
/// A resource with a non-null `deleted_at` is soft-deleted: excluded from
/// default listings but still retrievable by id until force-deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    /// Id.
    pub id: Uuid,
    /// Weak reference to the owning author, if any.
    pub author_id: Option<Uuid>,
    /// Name the file had when it was uploaded.
    pub original_name: String,
    pub extension: Option<String>,
    pub mime_type: Option<String>,
    /// Storage path relative to the storage root.
    pub path: String,
    /// Size in bytes.
    pub size: i64,
    /// User that performed the upload.
    pub uploaded_by: Option<Uuid>,
    pub checksum: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft-delete marker.
    pub deleted_at: Option<DateTime<Utc>>,
    /// Localized field sets, ordered by language code.
    #[serde(default)]
    pub translations: Vec<ResourceTranslation>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Author projection, loaded eagerly where the operation asks for it.
    #[serde(default)]
    pub author: Option<AuthorRef>,
}
