pub mod resource;
pub mod resource_author;
pub mod resource_tag;
pub mod resource_tag_association;
pub mod resource_translation;
