//! Workspaces API.

use std::collections::HashMap;

use crate::client::AssistantClient;
use crate::error::Result;
use crate::request::RequestEnvelope;
use crate::response::DetailedResponse;
use crate::types::{
    Counterexample, DialogNode, Entity, Intent, Metadata, Webhook, Workspace,
    WorkspaceCollection, WorkspaceSystemSettings,
};

/// Options for listing workspaces.
#[derive(Debug, Clone, Default)]
pub struct ListWorkspacesOptions {
    /// Number of records per page.
    pub page_limit: Option<i64>,
    /// Whether to include `pagination.total`.
    pub include_count: Option<bool>,
    /// Sort attribute (`name`, `updated`); prefix with `-` for descending.
    pub sort: Option<String>,
    /// Cursor from a previous page's `pagination.next_cursor`.
    pub cursor: Option<String>,
    /// Whether to include audit timestamps.
    pub include_audit: Option<bool>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

/// Options for creating a workspace.
#[derive(Debug, Clone, Default)]
pub struct CreateWorkspaceOptions {
    /// Workspace name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Language code.
    pub language: Option<String>,
    /// Dialog nodes.
    pub dialog_nodes: Option<Vec<DialogNode>>,
    /// Counterexamples.
    pub counterexamples: Option<Vec<Counterexample>>,
    /// Arbitrary metadata.
    pub metadata: Option<Metadata>,
    /// Whether training data may be used for service improvement.
    pub learning_opt_in: Option<bool>,
    /// Global settings.
    pub system_settings: Option<WorkspaceSystemSettings>,
    /// Webhooks.
    pub webhooks: Option<Vec<Webhook>>,
    /// Intents.
    pub intents: Option<Vec<Intent>>,
    /// Entities.
    pub entities: Option<Vec<Entity>>,
    /// Whether to include audit timestamps in the response.
    pub include_audit: Option<bool>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

/// Options for getting a workspace.
#[derive(Debug, Clone, Default)]
pub struct GetWorkspaceOptions {
    /// Workspace ID.
    pub workspace_id: String,
    /// Whether to include all element content.
    pub export: Option<bool>,
    /// Whether to include audit timestamps.
    pub include_audit: Option<bool>,
    /// Sort order of exported content (`stable`).
    pub sort: Option<String>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl GetWorkspaceOptions {
    /// Options for `workspace_id`.
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            ..Default::default()
        }
    }
}

/// Options for updating a workspace.
///
/// With `append` unset or `false`, every collection sent replaces the
/// existing one. With `append` set to `true`, the service merges new elements
/// and fails on conflicts. The client only forwards the flag.
#[derive(Debug, Clone, Default)]
pub struct UpdateWorkspaceOptions {
    /// Workspace ID.
    pub workspace_id: String,
    /// Workspace name.
    pub name: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Language code.
    pub language: Option<String>,
    /// Dialog nodes.
    pub dialog_nodes: Option<Vec<DialogNode>>,
    /// Counterexamples.
    pub counterexamples: Option<Vec<Counterexample>>,
    /// Arbitrary metadata.
    pub metadata: Option<Metadata>,
    /// Whether training data may be used for service improvement.
    pub learning_opt_in: Option<bool>,
    /// Global settings.
    pub system_settings: Option<WorkspaceSystemSettings>,
    /// Webhooks.
    pub webhooks: Option<Vec<Webhook>>,
    /// Intents.
    pub intents: Option<Vec<Intent>>,
    /// Entities.
    pub entities: Option<Vec<Entity>>,
    /// Merge instead of replace.
    pub append: Option<bool>,
    /// Whether to include audit timestamps in the response.
    pub include_audit: Option<bool>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl UpdateWorkspaceOptions {
    /// Options for `workspace_id`, changing nothing yet.
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            ..Default::default()
        }
    }
}

/// Options for deleting a workspace.
#[derive(Debug, Clone, Default)]
pub struct DeleteWorkspaceOptions {
    /// Workspace ID.
    pub workspace_id: String,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl DeleteWorkspaceOptions {
    /// Options for `workspace_id`.
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            ..Default::default()
        }
    }
}

/// Workspaces API client.
pub struct WorkspacesApi {
    client: AssistantClient,
}

impl WorkspacesApi {
    pub(crate) fn new(client: AssistantClient) -> Self {
        Self { client }
    }

    /// List workspaces.
    pub async fn list(
        &self,
        options: ListWorkspacesOptions,
    ) -> Result<DetailedResponse<WorkspaceCollection>> {
        let request = RequestEnvelope::get("/v1/workspaces")
            .query_opt("page_limit", options.page_limit)
            .query_opt("include_count", options.include_count)
            .query_opt("sort", options.sort.as_ref())
            .query_opt("cursor", options.cursor.as_ref())
            .query_opt("include_audit", options.include_audit)
            .headers(&options.headers);
        self.client.send(request).await
    }

    /// Create a workspace.
    pub async fn create(
        &self,
        options: CreateWorkspaceOptions,
    ) -> Result<DetailedResponse<Workspace>> {
        let request = RequestEnvelope::post("/v1/workspaces")
            .query_opt("include_audit", options.include_audit)
            .body_opt("name", options.name.as_ref())
            .body_opt("description", options.description.as_ref())
            .body_opt("language", options.language.as_ref())
            .body_opt("dialog_nodes", options.dialog_nodes.as_ref())
            .body_opt("counterexamples", options.counterexamples.as_ref())
            .body_opt("metadata", options.metadata.as_ref())
            .body_opt("learning_opt_in", options.learning_opt_in.as_ref())
            .body_opt("system_settings", options.system_settings.as_ref())
            .body_opt("webhooks", options.webhooks.as_ref())
            .body_opt("intents", options.intents.as_ref())
            .body_opt("entities", options.entities.as_ref())
            .headers(&options.headers);
        self.client.send(request).await
    }

    /// Get a workspace. Set `export` to include all content.
    pub async fn get(&self, options: GetWorkspaceOptions) -> Result<DetailedResponse<Workspace>> {
        let request = RequestEnvelope::get("/v1/workspaces/{workspace_id}")
            .path_param("workspace_id", options.workspace_id)
            .query_opt("export", options.export)
            .query_opt("include_audit", options.include_audit)
            .query_opt("sort", options.sort.as_ref())
            .headers(&options.headers);
        self.client.send(request).await
    }

    /// Update a workspace.
    pub async fn update(
        &self,
        options: UpdateWorkspaceOptions,
    ) -> Result<DetailedResponse<Workspace>> {
        let request = RequestEnvelope::post("/v1/workspaces/{workspace_id}")
            .path_param("workspace_id", options.workspace_id)
            .query_opt("append", options.append)
            .query_opt("include_audit", options.include_audit)
            .body_opt("name", options.name.as_ref())
            .body_opt("description", options.description.as_ref())
            .body_opt("language", options.language.as_ref())
            .body_opt("dialog_nodes", options.dialog_nodes.as_ref())
            .body_opt("counterexamples", options.counterexamples.as_ref())
            .body_opt("metadata", options.metadata.as_ref())
            .body_opt("learning_opt_in", options.learning_opt_in.as_ref())
            .body_opt("system_settings", options.system_settings.as_ref())
            .body_opt("webhooks", options.webhooks.as_ref())
            .body_opt("intents", options.intents.as_ref())
            .body_opt("entities", options.entities.as_ref())
            .headers(&options.headers);
        self.client.send(request).await
    }

    /// Delete a workspace.
    pub async fn delete(&self, options: DeleteWorkspaceOptions) -> Result<DetailedResponse<()>> {
        let request = RequestEnvelope::delete("/v1/workspaces/{workspace_id}")
            .path_param("workspace_id", options.workspace_id)
            .headers(&options.headers);
        self.client.send_empty(request).await
    }
}
