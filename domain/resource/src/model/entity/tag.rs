use serde::{Deserialize, Serialize};

/// A short label attached to resources.
///
/// The id is always stored lowercased. Tags are created lazily by the
/// reconciliation flow and never mutated by it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}
