use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::entity::Resource;

/// Listing parameters for the admin table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceQuery {
    pub page: u64,
    pub per_page: u64,
    /// Substring matched against `original_name` and `path`.
    pub query: Option<String>,
}

/// One page of non-deleted resources, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcePage {
    pub items: Vec<Resource>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

/// Id and label pair for select inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceOption {
    pub id: Uuid,
    pub label: String,
}
