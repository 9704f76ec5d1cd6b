use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::entity::Resource;

/// Outbound domain event, emitted once per successful mutation.
///
/// Lifecycle events carry the ids the bulk operation actually affected,
/// never the ids that were requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum ResourceEvent {
    Updated { resource: Resource },
    SoftDeleted { ids: Vec<Uuid> },
    Restored { ids: Vec<Uuid> },
    ForceDeleted { ids: Vec<Uuid> },
}

impl ResourceEvent {
    pub fn topic(&self) -> &'static str {
        match self {
            Self::Updated { .. } => "resource-updated",
            Self::SoftDeleted { .. } => "resource-soft-deleted",
            Self::Restored { .. } => "resource-restored",
            Self::ForceDeleted { .. } => "resource-force-deleted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_event_payload_is_the_affected_id_set() {
        let ids = vec![Uuid::new_v4(), Uuid::new_v4()];
        let event = ResourceEvent::SoftDeleted { ids: ids.clone() };

        assert_eq!(event.topic(), "resource-soft-deleted");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["event"], "softDeleted");
        assert_eq!(
            json["ids"],
            serde_json::to_value(&ids).unwrap(),
        );
    }
}
