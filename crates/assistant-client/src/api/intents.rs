//! Intents API.

use std::collections::HashMap;

use crate::client::AssistantClient;
use crate::error::Result;
use crate::request::RequestEnvelope;
use crate::response::DetailedResponse;
use crate::types::{Example, Intent, IntentCollection};

/// Options for listing intents.
#[derive(Debug, Clone, Default)]
pub struct ListIntentsOptions {
    /// Workspace ID.
    pub workspace_id: String,
    /// Whether to include examples in each intent.
    pub export: Option<bool>,
    /// Number of records per page.
    pub page_limit: Option<i64>,
    /// Whether to include `pagination.total`.
    pub include_count: Option<bool>,
    /// Sort attribute (`intent`, `updated`); prefix with `-` for descending.
    pub sort: Option<String>,
    /// Cursor from a previous page.
    pub cursor: Option<String>,
    /// Whether to include audit timestamps.
    pub include_audit: Option<bool>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl ListIntentsOptions {
    /// Options for `workspace_id`.
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            ..Default::default()
        }
    }
}

/// Options for creating an intent.
#[derive(Debug, Clone, Default)]
pub struct CreateIntentOptions {
    /// Workspace ID.
    pub workspace_id: String,
    /// Intent name.
    pub intent: String,
    /// Description.
    pub description: Option<String>,
    /// User examples.
    pub examples: Option<Vec<Example>>,
    /// Whether to include audit timestamps in the response.
    pub include_audit: Option<bool>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl CreateIntentOptions {
    /// Options creating `intent` in `workspace_id`.
    pub fn new(workspace_id: impl Into<String>, intent: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            intent: intent.into(),
            ..Default::default()
        }
    }
}

/// Options for getting an intent.
#[derive(Debug, Clone, Default)]
pub struct GetIntentOptions {
    /// Workspace ID.
    pub workspace_id: String,
    /// Intent name.
    pub intent: String,
    /// Whether to include examples.
    pub export: Option<bool>,
    /// Whether to include audit timestamps.
    pub include_audit: Option<bool>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl GetIntentOptions {
    /// Options for `intent` in `workspace_id`.
    pub fn new(workspace_id: impl Into<String>, intent: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            intent: intent.into(),
            ..Default::default()
        }
    }
}

/// Options for updating an intent.
#[derive(Debug, Clone, Default)]
pub struct UpdateIntentOptions {
    /// Workspace ID.
    pub workspace_id: String,
    /// Current intent name.
    pub intent: String,
    /// New intent name.
    pub new_intent: Option<String>,
    /// New description.
    pub new_description: Option<String>,
    /// New user examples.
    pub new_examples: Option<Vec<Example>>,
    /// Merge examples instead of replacing them.
    pub append: Option<bool>,
    /// Whether to include audit timestamps in the response.
    pub include_audit: Option<bool>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl UpdateIntentOptions {
    /// Options for `intent` in `workspace_id`, changing nothing yet.
    pub fn new(workspace_id: impl Into<String>, intent: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            intent: intent.into(),
            ..Default::default()
        }
    }
}

/// Options for deleting an intent.
#[derive(Debug, Clone, Default)]
pub struct DeleteIntentOptions {
    /// Workspace ID.
    pub workspace_id: String,
    /// Intent name.
    pub intent: String,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl DeleteIntentOptions {
    /// Options for `intent` in `workspace_id`.
    pub fn new(workspace_id: impl Into<String>, intent: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            intent: intent.into(),
            ..Default::default()
        }
    }
}

/// Intents API client.
pub struct IntentsApi {
    client: AssistantClient,
}

impl IntentsApi {
    pub(crate) fn new(client: AssistantClient) -> Self {
        Self { client }
    }

    /// List the intents of a workspace.
    pub async fn list(
        &self,
        options: ListIntentsOptions,
    ) -> Result<DetailedResponse<IntentCollection>> {
        let request = RequestEnvelope::get("/v1/workspaces/{workspace_id}/intents")
            .path_param("workspace_id", options.workspace_id)
            .query_opt("export", options.export)
            .query_opt("page_limit", options.page_limit)
            .query_opt("include_count", options.include_count)
            .query_opt("sort", options.sort.as_ref())
            .query_opt("cursor", options.cursor.as_ref())
            .query_opt("include_audit", options.include_audit)
            .headers(&options.headers);
        self.client.send(request).await
    }

    /// Create an intent.
    pub async fn create(&self, options: CreateIntentOptions) -> Result<DetailedResponse<Intent>> {
        let request = RequestEnvelope::post("/v1/workspaces/{workspace_id}/intents")
            .path_param("workspace_id", options.workspace_id)
            .query_opt("include_audit", options.include_audit)
            .body_required("intent", &options.intent)
            .body_opt("description", options.description.as_ref())
            .body_opt("examples", options.examples.as_ref())
            .headers(&options.headers);
        self.client.send(request).await
    }

    /// Get an intent. Set `export` to include its examples.
    pub async fn get(&self, options: GetIntentOptions) -> Result<DetailedResponse<Intent>> {
        let request = RequestEnvelope::get("/v1/workspaces/{workspace_id}/intents/{intent}")
            .path_param("workspace_id", options.workspace_id)
            .path_param("intent", options.intent)
            .query_opt("export", options.export)
            .query_opt("include_audit", options.include_audit)
            .headers(&options.headers);
        self.client.send(request).await
    }

    /// Update an intent. Unset `new_*` fields are left unchanged.
    pub async fn update(&self, options: UpdateIntentOptions) -> Result<DetailedResponse<Intent>> {
        let request = RequestEnvelope::post("/v1/workspaces/{workspace_id}/intents/{intent}")
            .path_param("workspace_id", options.workspace_id)
            .path_param("intent", options.intent)
            .query_opt("append", options.append)
            .query_opt("include_audit", options.include_audit)
            .body_opt("intent", options.new_intent.as_ref())
            .body_opt("description", options.new_description.as_ref())
            .body_opt("examples", options.new_examples.as_ref())
            .headers(&options.headers);
        self.client.send(request).await
    }

    /// Delete an intent.
    pub async fn delete(&self, options: DeleteIntentOptions) -> Result<DetailedResponse<()>> {
        let request = RequestEnvelope::delete("/v1/workspaces/{workspace_id}/intents/{intent}")
            .path_param("workspace_id", options.workspace_id)
            .path_param("intent", options.intent)
            .headers(&options.headers);
        self.client.send_empty(request).await
    }
}
