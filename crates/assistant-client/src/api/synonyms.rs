//! Value synonyms API.

use std::collections::HashMap;

use crate::client::AssistantClient;
use crate::error::Result;
use crate::request::RequestEnvelope;
use crate::response::DetailedResponse;
use crate::types::{Synonym, SynonymCollection};

const SYNONYMS_PATH: &str =
    "/v1/workspaces/{workspace_id}/entities/{entity}/values/{value}/synonyms";
const SYNONYM_PATH: &str =
    "/v1/workspaces/{workspace_id}/entities/{entity}/values/{value}/synonyms/{synonym}";

/// Options for listing synonyms.
#[derive(Debug, Clone, Default)]
pub struct ListSynonymsOptions {
    pub workspace_id: String,
    pub entity: String,
    pub value: String,
    pub page_limit: Option<i64>,
    pub include_count: Option<bool>,
    /// `synonym` or `updated`, optionally prefixed with `-`.
    pub sort: Option<String>,
    pub cursor: Option<String>,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

/// Options for creating a synonym.
#[derive(Debug, Clone, Default)]
pub struct CreateSynonymOptions {
    pub workspace_id: String,
    pub entity: String,
    pub value: String,
    /// Synonym text.
    pub synonym: String,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

/// Options for getting a synonym.
#[derive(Debug, Clone, Default)]
pub struct GetSynonymOptions {
    pub workspace_id: String,
    pub entity: String,
    pub value: String,
    pub synonym: String,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

/// Options for updating a synonym.
#[derive(Debug, Clone, Default)]
pub struct UpdateSynonymOptions {
    pub workspace_id: String,
    pub entity: String,
    pub value: String,
    /// Current synonym text.
    pub synonym: String,
    /// Replacement text.
    pub new_synonym: Option<String>,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

/// Options for deleting a synonym.
#[derive(Debug, Clone, Default)]
pub struct DeleteSynonymOptions {
    pub workspace_id: String,
    pub entity: String,
    pub value: String,
    pub synonym: String,
    pub headers: HashMap<String, String>,
}

/// Synonyms API client.
pub struct SynonymsApi {
    client: AssistantClient,
}

impl SynonymsApi {
    pub(crate) fn new(client: AssistantClient) -> Self {
        Self { client }
    }

    /// List the synonyms of a value.
    pub async fn list(
        &self,
        options: ListSynonymsOptions,
    ) -> Result<DetailedResponse<SynonymCollection>> {
        let request = RequestEnvelope::get(SYNONYMS_PATH)
            .path_param("workspace_id", options.workspace_id)
            .path_param("entity", options.entity)
            .path_param("value", options.value)
            .query_opt("page_limit", options.page_limit)
            .query_opt("include_count", options.include_count)
            .query_opt("sort", options.sort.as_ref())
            .query_opt("cursor", options.cursor.as_ref())
            .query_opt("include_audit", options.include_audit)
            .headers(&options.headers);
        self.client.send(request).await
    }

    /// Add a synonym.
    pub async fn create(&self, options: CreateSynonymOptions) -> Result<DetailedResponse<Synonym>> {
        let request = RequestEnvelope::post(SYNONYMS_PATH)
            .path_param("workspace_id", options.workspace_id)
            .path_param("entity", options.entity)
            .path_param("value", options.value)
            .query_opt("include_audit", options.include_audit)
            .body_required("synonym", &options.synonym)
            .headers(&options.headers);
        self.client.send(request).await
    }

    /// Get a synonym.
    pub async fn get(&self, options: GetSynonymOptions) -> Result<DetailedResponse<Synonym>> {
        let request = RequestEnvelope::get(SYNONYM_PATH)
            .path_param("workspace_id", options.workspace_id)
            .path_param("entity", options.entity)
            .path_param("value", options.value)
            .path_param("synonym", options.synonym)
            .query_opt("include_audit", options.include_audit)
            .headers(&options.headers);
        self.client.send(request).await
    }

    /// Rename a synonym.
    pub async fn update(&self, options: UpdateSynonymOptions) -> Result<DetailedResponse<Synonym>> {
        let request = RequestEnvelope::post(SYNONYM_PATH)
            .path_param("workspace_id", options.workspace_id)
            .path_param("entity", options.entity)
            .path_param("value", options.value)
            .path_param("synonym", options.synonym)
            .query_opt("include_audit", options.include_audit)
            .body_opt("synonym", options.new_synonym.as_ref())
            .headers(&options.headers);
        self.client.send(request).await
    }

    /// Delete a synonym.
    pub async fn delete(&self, options: DeleteSynonymOptions) -> Result<DetailedResponse<()>> {
        let request = RequestEnvelope::delete(SYNONYM_PATH)
            .path_param("workspace_id", options.workspace_id)
            .path_param("entity", options.entity)
            .path_param("value", options.value)
            .path_param("synonym", options.synonym)
            .headers(&options.headers);
        self.client.send_empty(request).await
    }
}
