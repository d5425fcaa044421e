//! Catalog entity document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A document sent to the catalog's upsert endpoint.
///
/// `properties` always carries every key of the target blueprint; values
/// that are unknown are explicit `null`s rather than missing keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Identifier, unique within the entity's blueprint.
    pub identifier: String,

    pub title: String,

    /// Flat mapping of property name to scalar, list or null value.
    pub properties: Map<String, Value>,

    /// Relation name to referenced entity identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relations: Option<Map<String, Value>>,
}

impl Entity {
    /// Create an entity whose title is its identifier.
    pub fn new(identifier: impl Into<String>, properties: Map<String, Value>) -> Self {
        let identifier = identifier.into();
        Self {
            title: identifier.clone(),
            identifier,
            properties,
            relations: None,
        }
    }

    /// Add a relation to another entity.
    pub fn with_relation(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.relations
            .get_or_insert_with(Map::new)
            .insert(name.into(), Value::String(target.into()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn relations_are_omitted_when_absent() {
        let entity = Entity::new("app", Map::new());
        let value = serde_json::to_value(&entity).unwrap();
        assert_eq!(
            value,
            json!({ "identifier": "app", "title": "app", "properties": {} })
        );
    }

    #[test]
    fn with_relation_adds_target() {
        let entity = Entity::new("sha256:aaa", Map::new()).with_relation("repository", "app");
        let value = serde_json::to_value(&entity).unwrap();
        assert_eq!(value["relations"], json!({ "repository": "app" }));
    }
}
