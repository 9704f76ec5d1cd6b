use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{entity::ResourceTranslation, vo::TagDescriptor};

/// Full update of one resource: scalar fields, translations, author
/// reference and tag set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResourceCommand {
    pub fields: ResourceFieldPatch,
    /// Replaces the whole translation set.
    pub translations: Vec<ResourceTranslation>,
    /// Replaces the whole tag set after reconciliation. Empty means the
    /// resource ends up with no tags.
    pub tags: Vec<TagDescriptor>,
}

/// Scalar attributes applied as one update.
///
/// `author_id` is already resolved from the submitted `author` object;
/// `None` clears any existing author reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceFieldPatch {
    pub original_name: String,
    pub extension: Option<String>,
    pub mime_type: Option<String>,
    pub path: String,
    pub size: i64,
    pub checksum: Option<String>,
    pub author_id: Option<Uuid>,
}
