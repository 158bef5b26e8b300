//! Schema-less entity records and their reserved fields.
//!
//! An [`Entity`] is an ordered mapping from field names to JSON values.
//! Only two fields carry meaning here: `_id` identifies the record and
//! `_deleted` marks it soft-deleted. Everything else passes through the
//! system verbatim, in the order the producer wrote it.

use serde_json::{Map, Value};

/// Field holding an entity's identity.
pub const ID_FIELD: &str = "_id";

/// Field marking an entity as soft-deleted.
pub const DELETED_FIELD: &str = "_deleted";

/// A schema-less record stored in a named dataset.
pub type Entity = Map<String, Value>;

/// Returns the entity's `_id`, if present and a string.
pub fn entity_id(entity: &Entity) -> Option<&str> {
    entity.get(ID_FIELD).and_then(Value::as_str)
}

/// Overwrites the entity's `_id` with the given value.
pub fn set_id(entity: &mut Entity, id: &str) {
    entity.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
}

/// Sets the soft-delete marker on the entity.
pub fn mark_deleted(entity: &mut Entity) {
    entity.insert(DELETED_FIELD.to_string(), Value::Bool(true));
}

/// Whether the entity carries a truthy soft-delete marker.
pub fn is_deleted(entity: &Entity) -> bool {
    entity
        .get(DELETED_FIELD)
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entity(value: Value) -> Entity {
        value.as_object().cloned().expect("test entity must be an object")
    }

    #[test]
    fn set_id_overwrites_existing() {
        let mut task = entity(json!({ "_id": "old", "title": "buy milk" }));
        set_id(&mut task, "42");
        assert_eq!(entity_id(&task), Some("42"));
        assert_eq!(task["title"], json!("buy milk"));
    }

    #[test]
    fn mark_deleted_sets_flag() {
        let mut task = entity(json!({ "_id": "42" }));
        assert!(!is_deleted(&task));
        mark_deleted(&mut task);
        assert!(is_deleted(&task));
    }

    #[test]
    fn is_deleted_ignores_non_boolean_marker() {
        let task = entity(json!({ "_id": "42", "_deleted": "yes" }));
        assert!(!is_deleted(&task));
    }

    #[test]
    fn unknown_fields_survive_reserved_field_edits() {
        let mut task = entity(json!({ "title": "buy milk", "tags": ["errand"], "nested": { "a": 1 } }));
        set_id(&mut task, "42");
        mark_deleted(&mut task);
        assert_eq!(task["tags"], json!(["errand"]));
        assert_eq!(task["nested"], json!({ "a": 1 }));
    }
}
