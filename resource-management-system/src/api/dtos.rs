use domain_resource::{
    command::{ResourceFieldPatch, UpdateResourceCommand},
    model::{
        entity::ResourceTranslation,
        vo::{ResourceQuery, TagDescriptor},
    },
};
use serde::Deserialize;
use uuid::Uuid;

/// Body of an update request: scalar fields plus the full replacement
/// translation and tag sets.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResourceRequest {
    pub original_name: String,
    pub extension: Option<String>,
    pub mime_type: Option<String>,
    pub path: String,
    pub size: i64,
    pub checksum: Option<String>,
    /// Absent means: clear the author reference.
    pub author: Option<AuthorDto>,
    #[serde(default)]
    pub translations: Vec<TranslationDto>,
    #[serde(default)]
    pub tags: Vec<TagDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthorDto {
    pub id: Uuid,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationDto {
    pub language_code: String,
    pub label: String,
    pub description: Option<String>,
}

/// A tag as the admin form submits it. `is_new` marks a client-proposed
/// tag that has no persisted row yet.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagDto {
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_new: bool,
}

impl UpdateResourceRequest {
    pub fn into_command(self) -> UpdateResourceCommand {
        let author_id = self.author.map(|a| a.id);
        UpdateResourceCommand {
            fields: ResourceFieldPatch {
                original_name: self.original_name,
                extension: self.extension,
                mime_type: self.mime_type,
                path: self.path,
                size: self.size,
                checksum: self.checksum,
                author_id,
            },
            translations: self
                .translations
                .into_iter()
                .map(|t| ResourceTranslation {
                    language_code: t.language_code,
                    label: t.label,
                    description: t.description,
                })
                .collect(),
            tags: self.tags.into_iter().filter_map(TagDto::into_descriptor).collect(),
        }
    }
}

impl TagDto {
    /// A tag submitted without an id is dropped silently.
    fn into_descriptor(self) -> Option<TagDescriptor> {
        let id = self.id?;
        Some(if self.is_new {
            TagDescriptor::New {
                proposed_id: id,
                name: self.name,
            }
        } else {
            TagDescriptor::Existing { id }
        })
    }
}

/// Ids to soft delete, force delete or restore.
#[derive(Debug, Clone, Deserialize)]
pub struct ListIdsRequest {
    #[serde(default)]
    pub list: Vec<Uuid>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResourcesRequest {
    #[serde(default = "ListResourcesRequest::default_page")]
    pub page: u64,
    #[serde(default = "ListResourcesRequest::default_per_page")]
    pub per_page: u64,
    pub query: Option<String>,
}

impl ListResourcesRequest {
    fn default_page() -> u64 {
        1
    }

    fn default_per_page() -> u64 {
        25
    }

    pub fn into_query(self) -> ResourceQuery {
        ResourceQuery {
            page: self.page,
            per_page: self.per_page,
            query: self.query,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn update_request(body: serde_json::Value) -> UpdateResourceRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn tags_without_id_are_dropped_at_the_boundary() {
        let request = update_request(serde_json::json!({
            "originalName": "photo.jpg",
            "path": "uploads/photo.jpg",
            "size": 2048,
            "translations": [{"languageCode": "en", "label": "Photo"}],
            "tags": [
                {"id": null, "name": "typed but never picked"},
                {"id": "sunset", "name": "Sunset"},
                {"id": "Beach", "name": "Beach", "isNew": true}
            ]
        }));

        let command = request.into_command();

        assert_eq!(
            command.tags,
            vec![
                TagDescriptor::Existing {
                    id: "sunset".to_owned()
                },
                TagDescriptor::New {
                    proposed_id: "Beach".to_owned(),
                    name: "Beach".to_owned()
                },
            ]
        );
    }

    #[test]
    fn missing_author_clears_the_reference() {
        let request = update_request(serde_json::json!({
            "originalName": "photo.jpg",
            "path": "uploads/photo.jpg",
            "size": 2048,
            "translations": [{"languageCode": "en", "label": "Photo"}]
        }));

        assert_eq!(request.into_command().fields.author_id, None);
    }

    #[test]
    fn submitted_author_id_is_carried_over() {
        let author_id = Uuid::new_v4();
        let request = update_request(serde_json::json!({
            "originalName": "photo.jpg",
            "path": "uploads/photo.jpg",
            "size": 2048,
            "author": {"id": author_id},
            "translations": [{"languageCode": "en", "label": "Photo"}]
        }));

        assert_eq!(request.into_command().fields.author_id, Some(author_id));
    }
}
