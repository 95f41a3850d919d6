//! Intent examples API.

use std::collections::HashMap;

use crate::client::AssistantClient;
use crate::error::Result;
use crate::request::RequestEnvelope;
use crate::response::DetailedResponse;
use crate::types::{Example, ExampleCollection, Mention};

/// Options for listing the examples of an intent.
#[derive(Debug, Clone, Default)]
pub struct ListExamplesOptions {
    pub workspace_id: String,
    pub intent: String,
    pub page_limit: Option<i64>,
    pub include_count: Option<bool>,
    /// `text` or `updated`, optionally prefixed with `-`.
    pub sort: Option<String>,
    pub cursor: Option<String>,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl ListExamplesOptions {
    pub fn new(workspace_id: impl Into<String>, intent: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            intent: intent.into(),
            ..Default::default()
        }
    }
}

/// Options for creating an example.
#[derive(Debug, Clone, Default)]
pub struct CreateExampleOptions {
    pub workspace_id: String,
    pub intent: String,
    /// Example text.
    pub text: String,
    /// Contextual entity mentions.
    pub mentions: Option<Vec<Mention>>,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl CreateExampleOptions {
    pub fn new(
        workspace_id: impl Into<String>,
        intent: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            intent: intent.into(),
            text: text.into(),
            ..Default::default()
        }
    }
}

/// Options addressing a single example.
#[derive(Debug, Clone, Default)]
pub struct GetExampleOptions {
    pub workspace_id: String,
    pub intent: String,
    pub text: String,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl GetExampleOptions {
    pub fn new(
        workspace_id: impl Into<String>,
        intent: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            intent: intent.into(),
            text: text.into(),
            ..Default::default()
        }
    }
}

/// Options for updating an example.
#[derive(Debug, Clone, Default)]
pub struct UpdateExampleOptions {
    pub workspace_id: String,
    pub intent: String,
    /// Current example text.
    pub text: String,
    /// Replacement text.
    pub new_text: Option<String>,
    /// Replacement mentions.
    pub new_mentions: Option<Vec<Mention>>,
    pub include_audit: Option<bool>,
    pub headers: HashMap<String, String>,
}

impl UpdateExampleOptions {
    pub fn new(
        workspace_id: impl Into<String>,
        intent: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            intent: intent.into(),
            text: text.into(),
            ..Default::default()
        }
    }
}

/// Options for deleting an example.
#[derive(Debug, Clone, Default)]
pub struct DeleteExampleOptions {
    pub workspace_id: String,
    pub intent: String,
    pub text: String,
    pub headers: HashMap<String, String>,
}

impl DeleteExampleOptions {
    pub fn new(
        workspace_id: impl Into<String>,
        intent: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            intent: intent.into(),
            text: text.into(),
            ..Default::default()
        }
    }
}

/// Examples API client.
///
/// Examples are addressed by their text, which is percent-encoded as a path
/// segment.
pub struct ExamplesApi {
    client: AssistantClient,
}

impl ExamplesApi {
    pub(crate) fn new(client: AssistantClient) -> Self {
        Self { client }
    }

    pub async fn list(
        &self,
        options: ListExamplesOptions,
    ) -> Result<DetailedResponse<ExampleCollection>> {
        let request =
            RequestEnvelope::get("/v1/workspaces/{workspace_id}/intents/{intent}/examples")
                .path_param("workspace_id", options.workspace_id)
                .path_param("intent", options.intent)
                .query_opt("page_limit", options.page_limit)
                .query_opt("include_count", options.include_count)
                .query_opt("sort", options.sort.as_ref())
                .query_opt("cursor", options.cursor.as_ref())
                .query_opt("include_audit", options.include_audit)
                .headers(&options.headers);
        self.client.send(request).await
    }

    pub async fn create(&self, options: CreateExampleOptions) -> Result<DetailedResponse<Example>> {
        let request =
            RequestEnvelope::post("/v1/workspaces/{workspace_id}/intents/{intent}/examples")
                .path_param("workspace_id", options.workspace_id)
                .path_param("intent", options.intent)
                .query_opt("include_audit", options.include_audit)
                .body_required("text", &options.text)
                .body_opt("mentions", options.mentions.as_ref())
                .headers(&options.headers);
        self.client.send(request).await
    }

    pub async fn get(&self, options: GetExampleOptions) -> Result<DetailedResponse<Example>> {
        let request =
            RequestEnvelope::get("/v1/workspaces/{workspace_id}/intents/{intent}/examples/{text}")
                .path_param("workspace_id", options.workspace_id)
                .path_param("intent", options.intent)
                .path_param("text", options.text)
                .query_opt("include_audit", options.include_audit)
                .headers(&options.headers);
        self.client.send(request).await
    }

    pub async fn update(&self, options: UpdateExampleOptions) -> Result<DetailedResponse<Example>> {
        let request =
            RequestEnvelope::post("/v1/workspaces/{workspace_id}/intents/{intent}/examples/{text}")
                .path_param("workspace_id", options.workspace_id)
                .path_param("intent", options.intent)
                .path_param("text", options.text)
                .query_opt("include_audit", options.include_audit)
                .body_opt("text", options.new_text.as_ref())
                .body_opt("mentions", options.new_mentions.as_ref())
                .headers(&options.headers);
        self.client.send(request).await
    }

    pub async fn delete(&self, options: DeleteExampleOptions) -> Result<DetailedResponse<()>> {
        let request = RequestEnvelope::delete(
            "/v1/workspaces/{workspace_id}/intents/{intent}/examples/{text}",
        )
        .path_param("workspace_id", options.workspace_id)
        .path_param("intent", options.intent)
        .path_param("text", options.text)
        .headers(&options.headers);
        self.client.send_empty(request).await
    }
}
