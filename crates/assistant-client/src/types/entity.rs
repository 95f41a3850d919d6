//! Entities, their values, synonyms, and entity mentions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Metadata, Pagination};

/// A named category of recognizable values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity name, or a system entity name such as `sys-number`.
    pub entity: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Arbitrary metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Whether fuzzy matching is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuzzy_match: Option<bool>,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    /// Entity values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<Value>>,
}

impl Entity {
    /// Create an entity with only its name set.
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            ..Default::default()
        }
    }
}

/// Payload shape of an entity value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    /// Matched by synonym strings.
    Synonyms,
    /// Matched by regular expressions.
    Patterns,
}

/// A value of an entity.
///
/// `synonyms` and `patterns` are mutually exclusive; which one applies is
/// given by `value_type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Value {
    /// Value text.
    pub value: String,
    /// Arbitrary metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Payload shape.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<ValueType>,
    /// Synonyms, when `value_type` is `synonyms`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<Vec<String>>,
    /// Regular expressions, when `value_type` is `patterns`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patterns: Option<Vec<String>>,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl Value {
    /// A synonym-type value.
    pub fn with_synonyms<I, S>(value: impl Into<String>, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            value: value.into(),
            value_type: Some(ValueType::Synonyms),
            synonyms: Some(synonyms.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }

    /// A pattern-type value.
    pub fn with_patterns<I, S>(value: impl Into<String>, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            value: value.into(),
            value_type: Some(ValueType::Patterns),
            patterns: Some(patterns.into_iter().map(Into::into).collect()),
            ..Default::default()
        }
    }
}

/// A synonym of an entity value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Synonym {
    /// Synonym text.
    pub synonym: String,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

/// A place in the workspace where an entity is mentioned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMention {
    /// Text of the example containing the mention.
    pub text: String,
    /// Intent the example belongs to.
    pub intent: String,
    /// Zero-based `[start, end)` character offsets of the mention.
    pub location: Vec<i64>,
}

/// Response for list entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityCollection {
    /// Entities, in server order.
    pub entities: Vec<Entity>,
    /// Pagination details.
    pub pagination: Pagination,
}

/// Response for list values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueCollection {
    /// Values, in server order.
    pub values: Vec<Value>,
    /// Pagination details.
    pub pagination: Pagination,
}

/// Response for list synonyms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynonymCollection {
    /// Synonyms, in server order.
    pub synonyms: Vec<Synonym>,
    /// Pagination details.
    pub pagination: Pagination,
}

/// Response for list mentions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMentionCollection {
    /// Mentions, in server order.
    pub examples: Vec<EntityMention>,
    /// Pagination details.
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_type_uses_type_key() {
        let value = Value::with_patterns("phone", ["\\d{3}-\\d{4}"]);
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            json!({"value": "phone", "type": "patterns", "patterns": ["\\d{3}-\\d{4}"]})
        );
    }

    #[test]
    fn test_entity_with_values_decodes() {
        let entity: Entity = serde_json::from_value(json!({
            "entity": "beverage",
            "fuzzy_match": true,
            "values": [
                {"value": "water", "type": "synonyms", "synonyms": ["h2o"]},
                {"value": "juice", "type": "synonyms", "synonyms": []}
            ]
        }))
        .unwrap();

        let values = entity.values.unwrap();
        assert_eq!(values[0].synonyms.as_deref(), Some(&["h2o".to_string()][..]));
        assert_eq!(values[1].synonyms, Some(vec![]));
        assert_eq!(values[1].patterns, None);
        assert_eq!(entity.fuzzy_match, Some(true));
        assert!(entity.description.is_none());
    }

    #[test]
    fn test_unknown_value_type_is_rejected() {
        let result: Result<Value, _> =
            serde_json::from_value(json!({"value": "x", "type": "regex"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_entity_metadata_round_trip() {
        let mut metadata = Metadata::new();
        metadata.insert("owner".to_string(), json!({"team": "support"}));
        let entity = Entity {
            entity: "product".to_string(),
            metadata: Some(metadata),
            ..Default::default()
        };

        let json = serde_json::to_string(&entity).unwrap();
        let back: Entity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entity);
    }
}
