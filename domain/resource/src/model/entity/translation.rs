use serde::{Deserialize, Serialize};

/// Localized fields of a resource for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceTranslation {
    pub language_code: String,
    pub label: String,
    pub description: Option<String>,
}
