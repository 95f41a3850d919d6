//! Counterexamples API.

use std::collections::HashMap;

use crate::client::AssistantClient;
use crate::error::Result;
use crate::request::RequestEnvelope;
use crate::response::DetailedResponse;
use crate::types::{Counterexample, CounterexampleCollection};

/// Options for listing counterexamples.
#[derive(Debug, Clone, Default)]
pub struct ListCounterexamplesOptions {
    pub workspace_id: String,
    pub page_limit: Option<i64>,
    pub include_count: Option<bool>,
    pub sort: Option<String>,
    pub cursor: Option<String>,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

/// Options for creating a counterexample.
#[derive(Debug, Clone, Default)]
pub struct CreateCounterexampleOptions {
    pub workspace_id: String,
    /// Text that should match no intent.
    pub text: String,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

/// Options for getting a counterexample.
#[derive(Debug, Clone, Default)]
pub struct GetCounterexampleOptions {
    pub workspace_id: String,
    pub text: String,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

/// Options for updating a counterexample.
#[derive(Debug, Clone, Default)]
pub struct UpdateCounterexampleOptions {
    pub workspace_id: String,
    /// Current text.
    pub text: String,
    /// Replacement text.
    pub new_text: Option<String>,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

/// Options for deleting a counterexample.
#[derive(Debug, Clone, Default)]
pub struct DeleteCounterexampleOptions {
    pub workspace_id: String,
    pub text: String,
    pub headers: HashMap<String, String>,
}

/// Counterexamples API client.
pub struct CounterexamplesApi {
    client: AssistantClient,
}

impl CounterexamplesApi {
    pub(crate) fn new(client: AssistantClient) -> Self {
        Self { client }
    }

    /// List the counterexamples of a workspace.
    pub async fn list(
        &self,
        options: ListCounterexamplesOptions,
    ) -> Result<DetailedResponse<CounterexampleCollection>> {
        let request = RequestEnvelope::get("/v1/workspaces/{workspace_id}/counterexamples")
            .path_param("workspace_id", options.workspace_id)
            .query_opt("page_limit", options.page_limit)
            .query_opt("include_count", options.include_count)
            .query_opt("sort", options.sort.as_ref())
            .query_opt("cursor", options.cursor.as_ref())
            .query_opt("include_audit", options.include_audit)
            .headers(&options.headers);
        self.client.send(request).await
    }

    /// Add a counterexample.
    pub async fn create(
        &self,
        options: CreateCounterexampleOptions,
    ) -> Result<DetailedResponse<Counterexample>> {
        let request = RequestEnvelope::post("/v1/workspaces/{workspace_id}/counterexamples")
            .path_param("workspace_id", options.workspace_id)
            .query_opt("include_audit", options.include_audit)
            .body_required("text", &options.text)
            .headers(&options.headers);
        self.client.send(request).await
    }

    /// Get a counterexample by its text.
    pub async fn get(
        &self,
        options: GetCounterexampleOptions,
    ) -> Result<DetailedResponse<Counterexample>> {
        let request = RequestEnvelope::get("/v1/workspaces/{workspace_id}/counterexamples/{text}")
            .path_param("workspace_id", options.workspace_id)
            .path_param("text", options.text)
            .query_opt("include_audit", options.include_audit)
            .headers(&options.headers);
        self.client.send(request).await
    }

    /// Change the text of a counterexample.
    pub async fn update(
        &self,
        options: UpdateCounterexampleOptions,
    ) -> Result<DetailedResponse<Counterexample>> {
        let request =
            RequestEnvelope::post("/v1/workspaces/{workspace_id}/counterexamples/{text}")
                .path_param("workspace_id", options.workspace_id)
                .path_param("text", options.text)
                .query_opt("include_audit", options.include_audit)
                .body_opt("text", options.new_text.as_ref())
                .headers(&options.headers);
        self.client.send(request).await
    }

    /// Delete a counterexample.
    pub async fn delete(
        &self,
        options: DeleteCounterexampleOptions,
    ) -> Result<DetailedResponse<()>> {
        let request =
            RequestEnvelope::delete("/v1/workspaces/{workspace_id}/counterexamples/{text}")
                .path_param("workspace_id", options.workspace_id)
                .path_param("text", options.text)
                .headers(&options.headers);
        self.client.send_empty(request).await
    }
}
