//! Logs API.

use std::collections::HashMap;

use crate::client::AssistantClient;
use crate::error::Result;
use crate::request::RequestEnvelope;
use crate::response::DetailedResponse;
use crate::types::LogCollection;

/// Options for listing the logs of one workspace.
#[derive(Debug, Clone, Default)]
pub struct ListLogsOptions {
    /// Workspace ID.
    pub workspace_id: String,
    /// Sort attribute, e.g. `-request_timestamp`.
    pub sort: Option<String>,
    /// Filter query, e.g. `response.intents:greeting`.
    pub filter: Option<String>,
    /// Number of records per page.
    pub page_limit: Option<i64>,
    /// Cursor from a previous page.
    pub cursor: Option<String>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

/// Options for listing logs across workspaces.
#[derive(Debug, Clone, Default)]
pub struct ListAllLogsOptions {
    /// Filter query. Must select a `language` plus `workspace_id`,
    /// `request.context.metadata.deployment` or `request.context.system.assistant_id`.
    pub filter: String,
    /// Sort attribute.
    pub sort: Option<String>,
    /// Number of records per page.
    pub page_limit: Option<i64>,
    /// Cursor from a previous page.
    pub cursor: Option<String>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl ListAllLogsOptions {
    /// Options with the given filter.
    pub fn new(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            ..Default::default()
        }
    }
}

/// Logs API client.
pub struct LogsApi {
    client: AssistantClient,
}

impl LogsApi {
    pub(crate) fn new(client: AssistantClient) -> Self {
        Self { client }
    }

    /// List the logged events of a workspace.
    pub async fn list(&self, options: ListLogsOptions) -> Result<DetailedResponse<LogCollection>> {
        let request = RequestEnvelope::get("/v1/workspaces/{workspace_id}/logs")
            .path_param("workspace_id", options.workspace_id)
            .query_opt("sort", options.sort.as_ref())
            .query_opt("filter", options.filter.as_ref())
            .query_opt("page_limit", options.page_limit)
            .query_opt("cursor", options.cursor.as_ref())
            .headers(&options.headers);
        self.client.send(request).await
    }

    /// List logged events matching a filter, across workspaces.
    pub async fn list_all(
        &self,
        options: ListAllLogsOptions,
    ) -> Result<DetailedResponse<LogCollection>> {
        let request = RequestEnvelope::get("/v1/logs")
            .query_required("filter", &options.filter)
            .query_opt("sort", options.sort.as_ref())
            .query_opt("page_limit", options.page_limit)
            .query_opt("cursor", options.cursor.as_ref())
            .headers(&options.headers);
        self.client.send(request).await
    }
}
