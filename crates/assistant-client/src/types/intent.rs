//! Intents, their examples, and workspace counterexamples.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::Pagination;

/// A named category of user purpose, defined by example utterances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Intent {
    /// Intent name. Letters, digits, `_`, `-` and `.`; must not start with `sys-`.
    pub intent: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    /// User examples, in server order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<Example>>,
}

impl Intent {
    /// Create an intent with only its name set.
    pub fn new(intent: impl Into<String>) -> Self {
        Self {
            intent: intent.into(),
            ..Default::default()
        }
    }
}

/// A user example for an intent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Example {
    /// Example text.
    pub text: String,
    /// Contextual entity mentions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mentions: Option<Vec<Mention>>,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl Example {
    /// Create an example with only its text set.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// An entity mention inside an example.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    /// Entity name.
    pub entity: String,
    /// Zero-based `[start, end)` character offsets of the mention.
    pub location: Vec<i64>,
}

/// An utterance that should not match any intent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Counterexample {
    /// Counterexample text.
    pub text: String,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl Counterexample {
    /// Create a counterexample with only its text set.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// Response for list intents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentCollection {
    /// Intents, in server order.
    pub intents: Vec<Intent>,
    /// Pagination details.
    pub pagination: Pagination,
}

/// Response for list examples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleCollection {
    /// Examples, in server order.
    pub examples: Vec<Example>,
    /// Pagination details.
    pub pagination: Pagination,
}

/// Response for list counterexamples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CounterexampleCollection {
    /// Counterexamples, in server order.
    pub counterexamples: Vec<Counterexample>,
    /// Pagination details.
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_intent_subset_round_trip() {
        let intent = Intent {
            intent: "greeting".to_string(),
            description: Some("Say hello".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&intent).unwrap();
        assert_eq!(value, json!({"intent": "greeting", "description": "Say hello"}));

        let back: Intent = serde_json::from_value(value).unwrap();
        assert_eq!(back, intent);
    }

    #[test]
    fn test_empty_examples_distinct_from_absent() {
        let with_empty: Intent =
            serde_json::from_value(json!({"intent": "greeting", "examples": []})).unwrap();
        assert_eq!(with_empty.examples, Some(vec![]));

        let without: Intent = serde_json::from_value(json!({"intent": "greeting"})).unwrap();
        assert_eq!(without.examples, None);

        assert_eq!(
            serde_json::to_value(&with_empty).unwrap(),
            json!({"intent": "greeting", "examples": []})
        );
    }

    #[test]
    fn test_intent_requires_name() {
        let result: Result<Intent, _> = serde_json::from_value(json!({"description": "x"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_intent_decodes_audit_dates() {
        let intent: Intent = serde_json::from_value(json!({
            "intent": "greeting",
            "created": "2021-01-01T00:00:00Z",
            "updated": "2021-01-02T10:30:00.123Z"
        }))
        .unwrap();

        assert_eq!(
            intent.created.unwrap().to_rfc3339(),
            "2021-01-01T00:00:00+00:00"
        );
        assert!(intent.updated.is_some());
        assert!(intent.description.is_none());
    }

    #[test]
    fn test_collection_preserves_server_order() {
        let collection: IntentCollection = serde_json::from_value(json!({
            "intents": [{"intent": "zeta"}, {"intent": "alpha"}, {"intent": "mid"}],
            "pagination": {"refresh_url": "/v1/workspaces/W1/intents"}
        }))
        .unwrap();

        let names: Vec<_> = collection.intents.iter().map(|i| i.intent.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_example_with_mentions() {
        let example: Example = serde_json::from_value(json!({
            "text": "book a table for tomorrow",
            "mentions": [{"entity": "date", "location": [17, 25]}]
        }))
        .unwrap();

        let mentions = example.mentions.unwrap();
        assert_eq!(mentions[0].entity, "date");
        assert_eq!(mentions[0].location, vec![17, 25]);
    }
}
