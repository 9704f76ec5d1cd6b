use serde::{Deserialize, Serialize};

/// A client-submitted tag reference, resolved once at the request boundary.
///
/// Descriptors without an id never get this far; they are dropped silently
/// when the request is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TagDescriptor {
    /// Reference to a tag the client believes already exists.
    Existing { id: String },
    /// A tag the client proposes to create. `proposed_id` is normalized to
    /// lowercase before the find-or-create lookup.
    New { proposed_id: String, name: String },
}
