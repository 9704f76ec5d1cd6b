use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author projection carried on a loaded resource.
///
/// `label` is the author's display name. The author record itself is
/// managed elsewhere; this flow only looks it up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRef {
    pub id: Uuid,
    pub label: String,
}
