use std::str::FromStr;

use eventkit_canonical::coerce;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::CoreError;
use crate::labels;

/// Business-rules payload attached to an entity.
///
/// Only the identifying sub-fields are typed; the rule body is carried
/// through untouched in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusinessRules {
    /// Rule set identifier.
    pub id: String,
    /// Rule set name.
    pub name: String,
    /// Context the rules belong to.
    pub context: String,
    /// Remaining keys, opaque.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl BusinessRules {
    /// Lenient construction; unknown keys land in `extra`.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let extra = map
            .iter()
            .filter(|(k, _)| !matches!(k.as_str(), "id" | "name" | "context"))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Self {
            id: coerce::to_string(map.get("id")),
            name: coerce::to_string(map.get("name")),
            context: coerce::to_string(map.get("context")),
            extra,
        }
    }
}

/// Named business-object schema bound to a context.
///
/// A non-zero `deleted_at` marks the entity as soft-deleted. Code
/// uniqueness within a context is the store's job, not this type's.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EntityRecord {
    /// Entity identifier.
    pub id: i64,
    /// Owning context identifier.
    pub context_id: i64,
    /// Display name.
    pub name: String,
    /// Code used in event coordinates.
    pub code: String,
    /// Free-form description.
    pub description: String,
    /// Business-rules payload.
    pub rules: BusinessRules,
    /// Soft-delete time in epoch milliseconds; zero while live.
    pub deleted_at: i64,
    /// Actor who deleted the entity.
    pub deleted_by: String,
    /// Creation time in epoch milliseconds.
    pub created_at: i64,
    /// Last update time in epoch milliseconds.
    pub updated_at: i64,
    /// Creator.
    pub created_by: String,
}

impl EntityRecord {
    /// Strictly parses a JSON entity.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Deserialization`] on malformed input.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, CoreError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Lenient construction from a loosely typed map. `rules` may be an
    /// object or a string holding one.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        Self {
            id: coerce::to_i64(map.get("id")),
            context_id: coerce::to_i64(map.get("contextId")),
            name: coerce::to_string(map.get("name")),
            code: coerce::to_string(map.get("code")),
            description: coerce::to_string(map.get("description")),
            rules: BusinessRules::from_map(&coerce::to_map(map.get("rules"))),
            deleted_at: coerce::to_i64(map.get("deletedAt")),
            deleted_by: coerce::to_string(map.get("deletedBy")),
            created_at: coerce::to_i64(map.get("createdAt")),
            updated_at: coerce::to_i64(map.get("updatedAt")),
            created_by: coerce::to_string(map.get("createdBy")),
        }
    }

    /// Whether the entity has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at != 0
    }

    /// Soft-deletes at the given time. A zero `at_millis` leaves the entity
    /// live.
    pub fn soft_delete_at(&mut self, actor: impl Into<String>, at_millis: i64) {
        self.deleted_at = at_millis;
        self.deleted_by = actor.into();
        self.updated_at = at_millis;
    }

    /// Soft-deletes now.
    pub fn soft_delete(&mut self, actor: impl Into<String>) {
        self.soft_delete_at(actor, crate::time::now_millis());
    }

    /// Clears the soft-delete marker at the given time.
    pub fn restore_at(&mut self, at_millis: i64) {
        self.deleted_at = 0;
        self.deleted_by.clear();
        self.updated_at = at_millis;
    }

    /// Clears the soft-delete marker now.
    pub fn restore(&mut self) {
        self.restore_at(crate::time::now_millis());
    }

    /// Storage table for this entity inside `context_code`.
    pub fn table_name(&self, context_code: &str) -> String {
        labels::table_name(context_code, &self.code)
    }
}

impl FromStr for EntityRecord {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s.as_bytes())
    }
}

impl From<&Map<String, Value>> for EntityRecord {
    fn from(map: &Map<String, Value>) -> Self {
        Self::from_map(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strict_parse_keeps_opaque_rules() {
        let entity: EntityRecord = r#"{
            "id": 3,
            "contextId": 1,
            "code": "avatar",
            "rules": {"id": "r1", "name": "limits", "context": "user", "max": 5}
        }"#
        .parse()
        .unwrap();
        assert_eq!(entity.rules.id, "r1");
        assert_eq!(entity.rules.extra.get("max"), Some(&json!(5)));
        assert!(!entity.is_deleted());
    }

    #[test]
    fn map_parse_accepts_stringified_rules() {
        let map = json!({
            "id": "9",
            "code": "avatar",
            "rules": "{\"id\":\"r2\",\"body\":[1]}",
            "deletedAt": 12,
        });
        let entity = EntityRecord::from_map(map.as_object().unwrap());
        assert_eq!(entity.id, 9);
        assert_eq!(entity.rules.id, "r2");
        assert_eq!(entity.rules.extra.get("body"), Some(&json!([1])));
        assert!(entity.is_deleted());
    }

    #[test]
    fn soft_delete_and_restore() {
        let mut entity = EntityRecord {
            code: "avatar".into(),
            ..EntityRecord::default()
        };
        entity.soft_delete_at("ops", 1_700_000_000_000);
        assert!(entity.is_deleted());
        assert_eq!(entity.deleted_by, "ops");
        assert_eq!(entity.updated_at, 1_700_000_000_000);
        entity.restore_at(1_700_000_000_500);
        assert!(!entity.is_deleted());
        assert_eq!(entity.deleted_by, "");
        assert_eq!(entity.updated_at, 1_700_000_000_500);
        assert_eq!(entity.table_name("user"), "user_avatar");
    }

    #[test]
    fn restore_stamps_update_time() {
        let mut entity = EntityRecord::default();
        entity.soft_delete_at("ops", 1);
        entity.restore();
        assert!(!entity.is_deleted());
        assert!(entity.updated_at > 1);
    }

    #[test]
    fn strict_parse_rejects_wrong_types() {
        assert!(EntityRecord::from_str(r#"{"id": "three"}"#).is_err());
    }
}
