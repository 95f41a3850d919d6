//! Entities API, including entity mentions.

use std::collections::HashMap;

use crate::client::AssistantClient;
use crate::error::Result;
use crate::request::RequestEnvelope;
use crate::response::DetailedResponse;
use crate::types::{Entity, EntityCollection, EntityMentionCollection, Metadata, Value};

/// Options for listing entities.
#[derive(Debug, Clone, Default)]
pub struct ListEntitiesOptions {
    /// Workspace ID.
    pub workspace_id: String,
    /// Whether to include values and synonyms.
    pub export: Option<bool>,
    /// Number of records per page.
    pub page_limit: Option<i64>,
    /// Whether to include `pagination.total`.
    pub include_count: Option<bool>,
    /// Sort attribute (`entity`, `updated`); prefix with `-` for descending.
    pub sort: Option<String>,
    /// Cursor from a previous page.
    pub cursor: Option<String>,
    /// Whether to include audit timestamps.
    pub include_audit: Option<bool>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl ListEntitiesOptions {
    /// Options for `workspace_id`.
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            ..Default::default()
        }
    }
}

/// Options for creating an entity.
#[derive(Debug, Clone, Default)]
pub struct CreateEntityOptions {
    /// Workspace ID.
    pub workspace_id: String,
    /// Entity name.
    pub entity: String,
    /// Description.
    pub description: Option<String>,
    /// Arbitrary metadata.
    pub metadata: Option<Metadata>,
    /// Whether to use fuzzy matching.
    pub fuzzy_match: Option<bool>,
    /// Entity values.
    pub values: Option<Vec<Value>>,
    /// Whether to include audit timestamps in the response.
    pub include_audit: Option<bool>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl CreateEntityOptions {
    /// Options creating `entity` in `workspace_id`.
    pub fn new(workspace_id: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            entity: entity.into(),
            ..Default::default()
        }
    }
}

/// Options for getting an entity.
#[derive(Debug, Clone, Default)]
pub struct GetEntityOptions {
    /// Workspace ID.
    pub workspace_id: String,
    /// Entity name.
    pub entity: String,
    /// Whether to include all content.
    pub export: Option<bool>,
    /// Whether to include audit timestamps.
    pub include_audit: Option<bool>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl GetEntityOptions {
    /// Options for `entity` in `workspace_id`.
    pub fn new(workspace_id: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            entity: entity.into(),
            ..Default::default()
        }
    }
}

/// Options for listing the examples that mention an entity.
#[derive(Debug, Clone, Default)]
pub struct ListMentionsOptions {
    pub workspace_id: String,
    pub entity: String,
    pub export: Option<bool>,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl ListMentionsOptions {
    pub fn new(workspace_id: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            entity: entity.into(),
            ..Default::default()
        }
    }
}

/// Options for updating an entity.
#[derive(Debug, Clone, Default)]
pub struct UpdateEntityOptions {
    /// Workspace ID.
    pub workspace_id: String,
    /// Current entity name.
    pub entity: String,
    /// New entity name.
    pub new_entity: Option<String>,
    /// New description.
    pub new_description: Option<String>,
    /// New metadata.
    pub new_metadata: Option<Metadata>,
    /// New fuzzy matching setting.
    pub new_fuzzy_match: Option<bool>,
    /// New values.
    pub new_values: Option<Vec<Value>>,
    /// Merge values instead of replacing them.
    pub append: Option<bool>,
    /// Whether to include audit timestamps in the response.
    pub include_audit: Option<bool>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl UpdateEntityOptions {
    /// Options for `entity` in `workspace_id`, changing nothing yet.
    pub fn new(workspace_id: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            entity: entity.into(),
            ..Default::default()
        }
    }
}

/// Options for deleting an entity.
#[derive(Debug, Clone, Default)]
pub struct DeleteEntityOptions {
    /// Workspace ID.
    pub workspace_id: String,
    /// Entity name.
    pub entity: String,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl DeleteEntityOptions {
    /// Options for `entity` in `workspace_id`.
    pub fn new(workspace_id: impl Into<String>, entity: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            entity: entity.into(),
            ..Default::default()
        }
    }
}

/// Entities API client.
pub struct EntitiesApi {
    client: AssistantClient,
}

impl EntitiesApi {
    pub(crate) fn new(client: AssistantClient) -> Self {
        Self { client }
    }

    /// List the entities of a workspace.
    pub async fn list(
        &self,
        options: ListEntitiesOptions,
    ) -> Result<DetailedResponse<EntityCollection>> {
        let request = RequestEnvelope::get("/v1/workspaces/{workspace_id}/entities")
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

    /// Create an entity.
    pub async fn create(&self, options: CreateEntityOptions) -> Result<DetailedResponse<Entity>> {
        let request = RequestEnvelope::post("/v1/workspaces/{workspace_id}/entities")
            .path_param("workspace_id", options.workspace_id)
            .query_opt("include_audit", options.include_audit)
            .body_required("entity", &options.entity)
            .body_opt("description", options.description.as_ref())
            .body_opt("metadata", options.metadata.as_ref())
            .body_opt("fuzzy_match", options.fuzzy_match.as_ref())
            .body_opt("values", options.values.as_ref())
            .headers(&options.headers);
        self.client.send(request).await
    }

    /// Get an entity.
    pub async fn get(&self, options: GetEntityOptions) -> Result<DetailedResponse<Entity>> {
        let request = RequestEnvelope::get("/v1/workspaces/{workspace_id}/entities/{entity}")
            .path_param("workspace_id", options.workspace_id)
            .path_param("entity", options.entity)
            .query_opt("export", options.export)
            .query_opt("include_audit", options.include_audit)
            .headers(&options.headers);
        self.client.send(request).await
    }

    /// Update an entity. Unset `new_*` fields are left unchanged.
    pub async fn update(&self, options: UpdateEntityOptions) -> Result<DetailedResponse<Entity>> {
        let request = RequestEnvelope::post("/v1/workspaces/{workspace_id}/entities/{entity}")
            .path_param("workspace_id", options.workspace_id)
            .path_param("entity", options.entity)
            .query_opt("append", options.append)
            .query_opt("include_audit", options.include_audit)
            .body_opt("entity", options.new_entity.as_ref())
            .body_opt("description", options.new_description.as_ref())
            .body_opt("metadata", options.new_metadata.as_ref())
            .body_opt("fuzzy_match", options.new_fuzzy_match.as_ref())
            .body_opt("values", options.new_values.as_ref())
            .headers(&options.headers);
        self.client.send(request).await
    }

    /// Delete an entity.
    pub async fn delete(&self, options: DeleteEntityOptions) -> Result<DetailedResponse<()>> {
        let request = RequestEnvelope::delete("/v1/workspaces/{workspace_id}/entities/{entity}")
            .path_param("workspace_id", options.workspace_id)
            .path_param("entity", options.entity)
            .headers(&options.headers);
        self.client.send_empty(request).await
    }

    /// List the user examples that mention an entity.
    pub async fn list_mentions(
        &self,
        options: ListMentionsOptions,
    ) -> Result<DetailedResponse<EntityMentionCollection>> {
        let request =
            RequestEnvelope::get("/v1/workspaces/{workspace_id}/entities/{entity}/mentions")
                .path_param("workspace_id", options.workspace_id)
                .path_param("entity", options.entity)
                .query_opt("export", options.export)
                .query_opt("include_audit", options.include_audit)
                .headers(&options.headers);
        self.client.send(request).await
    }
}
