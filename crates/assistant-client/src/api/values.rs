//! Entity values API.

use std::collections::HashMap;

use crate::client::AssistantClient;
use crate::error::Result;
use crate::request::RequestEnvelope;
use crate::response::DetailedResponse;
use crate::types::{Metadata, Value, ValueCollection, ValueType};

/// Options for listing the values of an entity.
#[derive(Debug, Clone, Default)]
pub struct ListValuesOptions {
    /// Workspace ID.
    pub workspace_id: String,
    /// Entity name.
    pub entity: String,
    /// Whether to include synonyms and patterns.
    pub export: Option<bool>,
    /// Number of records per page.
    pub page_limit: Option<i64>,
    /// Whether to include `pagination.total`.
    pub include_count: Option<bool>,
    /// Sort attribute (`value`, `updated`); prefix with `-` for descending.
    pub sort: Option<String>,
    /// Cursor from a previous page.
    pub cursor: Option<String>,
    /// Whether to include audit timestamps.
    pub include_audit: Option<bool>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

/// Options for creating a value.
///
/// Set either `synonyms` or `patterns`, matching `value_type`.
#[derive(Debug, Clone, Default)]
pub struct CreateValueOptions {
    /// Workspace ID.
    pub workspace_id: String,
    /// Entity name.
    pub entity: String,
    /// Value text.
    pub value: String,
    /// Arbitrary metadata.
    pub metadata: Option<Metadata>,
    /// Payload shape, sent as `type`.
    pub value_type: Option<ValueType>,
    /// Synonyms.
    pub synonyms: Option<Vec<String>>,
    /// Regular expressions.
    pub patterns: Option<Vec<String>>,
    /// Whether to include audit timestamps in the response.
    pub include_audit: Option<bool>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

/// Options for getting a value.
#[derive(Debug, Clone, Default)]
pub struct GetValueOptions {
    /// Workspace ID.
    pub workspace_id: String,
    /// Entity name.
    pub entity: String,
    /// Value text.
    pub value: String,
    /// Whether to include synonyms and patterns.
    pub export: Option<bool>,
    /// Whether to include audit timestamps.
    pub include_audit: Option<bool>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

/// Options for updating a value.
#[derive(Debug, Clone, Default)]
pub struct UpdateValueOptions {
    /// Workspace ID.
    pub workspace_id: String,
    /// Entity name.
    pub entity: String,
    /// Current value text.
    pub value: String,
    /// New value text.
    pub new_value: Option<String>,
    /// New metadata.
    pub new_metadata: Option<Metadata>,
    /// New payload shape.
    pub new_value_type: Option<ValueType>,
    /// New synonyms.
    pub new_synonyms: Option<Vec<String>>,
    /// New patterns.
    pub new_patterns: Option<Vec<String>>,
    /// Merge synonyms or patterns instead of replacing them.
    pub append: Option<bool>,
    /// Whether to include audit timestamps in the response.
    pub include_audit: Option<bool>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

/// Options for deleting a value.
#[derive(Debug, Clone, Default)]
pub struct DeleteValueOptions {
    /// Workspace ID.
    pub workspace_id: String,
    /// Entity name.
    pub entity: String,
    /// Value text.
    pub value: String,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

/// Entity values API client.
pub struct ValuesApi {
    client: AssistantClient,
}

impl ValuesApi {
    pub(crate) fn new(client: AssistantClient) -> Self {
        Self { client }
    }

    /// List the values of an entity.
    pub async fn list(
        &self,
        options: ListValuesOptions,
    ) -> Result<DetailedResponse<ValueCollection>> {
        let request =
            RequestEnvelope::get("/v1/workspaces/{workspace_id}/entities/{entity}/values")
                .path_param("workspace_id", options.workspace_id)
                .path_param("entity", options.entity)
                .query_opt("export", options.export)
                .query_opt("page_limit", options.page_limit)
                .query_opt("include_count", options.include_count)
                .query_opt("sort", options.sort.as_ref())
                .query_opt("cursor", options.cursor.as_ref())
                .query_opt("include_audit", options.include_audit)
                .headers(&options.headers);
        self.client.send(request).await
    }

    /// Create a value.
    pub async fn create(&self, options: CreateValueOptions) -> Result<DetailedResponse<Value>> {
        let request =
            RequestEnvelope::post("/v1/workspaces/{workspace_id}/entities/{entity}/values")
                .path_param("workspace_id", options.workspace_id)
                .path_param("entity", options.entity)
                .query_opt("include_audit", options.include_audit)
                .body_required("value", &options.value)
                .body_opt("metadata", options.metadata.as_ref())
                .body_opt("type", options.value_type.as_ref())
                .body_opt("synonyms", options.synonyms.as_ref())
                .body_opt("patterns", options.patterns.as_ref())
                .headers(&options.headers);
        self.client.send(request).await
    }

    /// Get a value.
    pub async fn get(&self, options: GetValueOptions) -> Result<DetailedResponse<Value>> {
        let request =
            RequestEnvelope::get("/v1/workspaces/{workspace_id}/entities/{entity}/values/{value}")
                .path_param("workspace_id", options.workspace_id)
                .path_param("entity", options.entity)
                .path_param("value", options.value)
                .query_opt("export", options.export)
                .query_opt("include_audit", options.include_audit)
                .headers(&options.headers);
        self.client.send(request).await
    }

    /// Update a value. Unset `new_*` fields are left unchanged.
    pub async fn update(&self, options: UpdateValueOptions) -> Result<DetailedResponse<Value>> {
        let request =
            RequestEnvelope::post("/v1/workspaces/{workspace_id}/entities/{entity}/values/{value}")
                .path_param("workspace_id", options.workspace_id)
                .path_param("entity", options.entity)
                .path_param("value", options.value)
                .query_opt("append", options.append)
                .query_opt("include_audit", options.include_audit)
                .body_opt("value", options.new_value.as_ref())
                .body_opt("metadata", options.new_metadata.as_ref())
                .body_opt("type", options.new_value_type.as_ref())
                .body_opt("synonyms", options.new_synonyms.as_ref())
                .body_opt("patterns", options.new_patterns.as_ref())
                .headers(&options.headers);
        self.client.send(request).await
    }

    /// Delete a value.
    pub async fn delete(&self, options: DeleteValueOptions) -> Result<DetailedResponse<()>> {
        let request = RequestEnvelope::delete(
            "/v1/workspaces/{workspace_id}/entities/{entity}/values/{value}",
        )
        .path_param("workspace_id", options.workspace_id)
        .path_param("entity", options.entity)
        .path_param("value", options.value)
        .headers(&options.headers);
        self.client.send_empty(request).await
    }
}
