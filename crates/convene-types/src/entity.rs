//! Entity lookup types. An entity is anything addressable by slug:
//! an event, a calendar, or a membership tier.

use serde::{Deserialize, Serialize};

/// Kind of object a slug resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Event,
    Calendar,
    MembershipTier,
}

/// A slug-addressable object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub api_id: String,
    pub r#type: EntityType,
    pub name: Option<String>,
    pub slug: Option<String>,
}

/// Params for `GET /v1/entity/lookup`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupEntityParams {
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupEntityResponse {
    pub entity: Option<Entity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_type_wire_values() {
        let entity: Entity = serde_json::from_str(
            r#"{"api_id":"ent-1","type":"membership_tier","slug":"supporters"}"#,
        )
        .unwrap();
        assert_eq!(entity.r#type, EntityType::MembershipTier);
    }

    #[test]
    fn test_lookup_miss_is_null() {
        let response: LookupEntityResponse = serde_json::from_str(r#"{"entity":null}"#).unwrap();
        assert!(response.entity.is_none());
    }
}
