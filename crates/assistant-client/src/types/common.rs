//! Shared pieces: pagination and additional-property access.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Arbitrary JSON object attached to a resource.
pub type Metadata = Map<String, Value>;

/// Pagination details for list responses.
///
/// Continue a listing by passing `next_cursor` back as the `cursor` option.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    /// URL that returns the same page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_url: Option<String>,
    /// URL that returns the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    /// Total number of objects, when `include_count` was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<i64>,
    /// Total number of objects matching the request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched: Option<i64>,
    /// Cursor for the same page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_cursor: Option<String>,
    /// Cursor for the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

/// Pagination details for log listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogPagination {
    /// URL that returns the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    /// Number of logs matching the filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matched: Option<i64>,
    /// Cursor for the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

/// Access to the JSON keys an extensible type does not model.
///
/// The service may attach integration-specific keys to some objects. Those
/// types keep every unrecognized key in a side map that is written back
/// verbatim on serialization.
pub trait AdditionalProperties {
    /// The unmodelled keys.
    fn additional_properties(&self) -> &Map<String, Value>;

    /// Mutable access to the unmodelled keys.
    fn additional_properties_mut(&mut self) -> &mut Map<String, Value>;

    /// Get an additional property.
    fn get_property(&self, key: &str) -> Option<&Value> {
        self.additional_properties().get(key)
    }

    /// Set an additional property, returning the previous value.
    fn set_property(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.additional_properties_mut().insert(key.into(), value)
    }

    /// Remove an additional property.
    fn remove_property(&mut self, key: &str) -> Option<Value> {
        self.additional_properties_mut().remove(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pagination_absent_fields_stay_none() {
        let pagination: Pagination = serde_json::from_value(json!({
            "refresh_url": "/v1/workspaces?version=2021-06-14",
            "next_cursor": "abc"
        }))
        .unwrap();

        assert_eq!(pagination.next_cursor.as_deref(), Some("abc"));
        assert!(pagination.total.is_none());
        assert!(pagination.next_url.is_none());

        let value = serde_json::to_value(&pagination).unwrap();
        assert_eq!(
            value,
            json!({"refresh_url": "/v1/workspaces?version=2021-06-14", "next_cursor": "abc"})
        );
    }
}
