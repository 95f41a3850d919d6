//! Dialog nodes API.

use std::collections::HashMap;

use crate::client::AssistantClient;
use crate::error::Result;
use crate::request::RequestEnvelope;
use crate::response::DetailedResponse;
use crate::types::{
    DialogNode, DialogNodeAction, DialogNodeCollection, DialogNodeContext, DialogNodeNextStep,
    DialogNodeOutput, DialogNodeType, DigressIn, DigressOut, DigressOutSlots, EventName, Metadata,
};

/// Options for listing dialog nodes.
#[derive(Debug, Clone, Default)]
pub struct ListDialogNodesOptions {
    /// Workspace ID.
    pub workspace_id: String,
    /// Number of records per page.
    pub page_limit: Option<i64>,
    /// Whether to include `pagination.total`.
    pub include_count: Option<bool>,
    /// Sort attribute (`dialog_node`, `updated`); prefix with `-` for descending.
    pub sort: Option<String>,
    /// Cursor from a previous page.
    pub cursor: Option<String>,
    /// Whether to include audit timestamps.
    pub include_audit: Option<bool>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl ListDialogNodesOptions {
    /// Options for `workspace_id`.
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            ..Default::default()
        }
    }
}

/// Options for creating a dialog node.
#[derive(Debug, Clone, Default)]
pub struct CreateDialogNodeOptions {
    /// Workspace ID.
    pub workspace_id: String,
    /// Node ID.
    pub dialog_node: String,
    pub description: Option<String>,
    pub conditions: Option<String>,
    pub parent: Option<String>,
    pub previous_sibling: Option<String>,
    pub output: Option<DialogNodeOutput>,
    pub context: Option<DialogNodeContext>,
    pub metadata: Option<Metadata>,
    /// Jump target. A `jump_to` step must name its target node.
    pub next_step: Option<DialogNodeNextStep>,
    pub title: Option<String>,
    /// Sent as `type`.
    pub node_type: Option<DialogNodeType>,
    pub event_name: Option<EventName>,
    pub variable: Option<String>,
    pub actions: Option<Vec<DialogNodeAction>>,
    pub digress_in: Option<DigressIn>,
    pub digress_out: Option<DigressOut>,
    pub digress_out_slots: Option<DigressOutSlots>,
    pub user_label: Option<String>,
    pub disambiguation_opt_out: Option<bool>,
    /// Whether to include audit timestamps in the response.
    pub include_audit: Option<bool>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl CreateDialogNodeOptions {
    /// Options creating the node `dialog_node` in `workspace_id`.
    pub fn new(workspace_id: impl Into<String>, dialog_node: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            dialog_node: dialog_node.into(),
            ..Default::default()
        }
    }

    /// Options recreating `node` in `workspace_id`, e.g. when copying nodes
    /// between workspaces. Timestamps and the disabled flag are dropped.
    pub fn from_node(workspace_id: impl Into<String>, node: DialogNode) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            dialog_node: node.dialog_node,
            description: node.description,
            conditions: node.conditions,
            parent: node.parent,
            previous_sibling: node.previous_sibling,
            output: node.output,
            context: node.context,
            metadata: node.metadata,
            next_step: node.next_step,
            title: node.title,
            node_type: node.node_type,
            event_name: node.event_name,
            variable: node.variable,
            actions: node.actions,
            digress_in: node.digress_in,
            digress_out: node.digress_out,
            digress_out_slots: node.digress_out_slots,
            user_label: node.user_label,
            disambiguation_opt_out: node.disambiguation_opt_out,
            include_audit: None,
            headers: HashMap::new(),
        }
    }
}

/// Options for getting a dialog node.
#[derive(Debug, Clone, Default)]
pub struct GetDialogNodeOptions {
    /// Workspace ID.
    pub workspace_id: String,
    /// Node ID.
    pub dialog_node: String,
    /// Whether to include audit timestamps.
    pub include_audit: Option<bool>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl GetDialogNodeOptions {
    /// Options for `dialog_node` in `workspace_id`.
    pub fn new(workspace_id: impl Into<String>, dialog_node: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            dialog_node: dialog_node.into(),
            ..Default::default()
        }
    }
}

/// Options for updating a dialog node. Unset `new_*` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateDialogNodeOptions {
    /// Workspace ID.
    pub workspace_id: String,
    /// Current node ID.
    pub dialog_node: String,
    /// New node ID.
    pub new_dialog_node: Option<String>,
    pub new_description: Option<String>,
    pub new_conditions: Option<String>,
    pub new_parent: Option<String>,
    pub new_previous_sibling: Option<String>,
    pub new_output: Option<DialogNodeOutput>,
    pub new_context: Option<DialogNodeContext>,
    pub new_metadata: Option<Metadata>,
    /// New jump target. A `jump_to` step must name its target node.
    pub new_next_step: Option<DialogNodeNextStep>,
    pub new_title: Option<String>,
    /// Sent as `type`.
    pub new_node_type: Option<DialogNodeType>,
    pub new_event_name: Option<EventName>,
    pub new_variable: Option<String>,
    pub new_actions: Option<Vec<DialogNodeAction>>,
    pub new_digress_in: Option<DigressIn>,
    pub new_digress_out: Option<DigressOut>,
    pub new_digress_out_slots: Option<DigressOutSlots>,
    pub new_user_label: Option<String>,
    pub new_disambiguation_opt_out: Option<bool>,
    /// Whether to include audit timestamps in the response.
    pub include_audit: Option<bool>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl UpdateDialogNodeOptions {
    /// Options for `dialog_node` in `workspace_id`, changing nothing yet.
    pub fn new(workspace_id: impl Into<String>, dialog_node: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            dialog_node: dialog_node.into(),
            ..Default::default()
        }
    }
}

/// Options for deleting a dialog node.
#[derive(Debug, Clone, Default)]
pub struct DeleteDialogNodeOptions {
    /// Workspace ID.
    pub workspace_id: String,
    /// Node ID.
    pub dialog_node: String,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl DeleteDialogNodeOptions {
    /// Options for `dialog_node` in `workspace_id`.
    pub fn new(workspace_id: impl Into<String>, dialog_node: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            dialog_node: dialog_node.into(),
            ..Default::default()
        }
    }
}

/// Dialog nodes API client.
pub struct DialogNodesApi {
    client: AssistantClient,
}

impl DialogNodesApi {
    pub(crate) fn new(client: AssistantClient) -> Self {
        Self { client }
    }

    /// List the dialog nodes of a workspace as a flat list.
    ///
    /// Use [`DialogTree::from_nodes`](crate::types::DialogTree::from_nodes) to
    /// rebuild the hierarchy.
    pub async fn list(
        &self,
        options: ListDialogNodesOptions,
    ) -> Result<DetailedResponse<DialogNodeCollection>> {
        let request = RequestEnvelope::get("/v1/workspaces/{workspace_id}/dialog_nodes")
            .path_param("workspace_id", options.workspace_id)
            .query_opt("page_limit", options.page_limit)
            .query_opt("include_count", options.include_count)
            .query_opt("sort", options.sort.as_ref())
            .query_opt("cursor", options.cursor.as_ref())
            .query_opt("include_audit", options.include_audit)
            .headers(&options.headers);
        self.client.send(request).await
    }

    /// Create a dialog node.
    pub async fn create(
        &self,
        options: CreateDialogNodeOptions,
    ) -> Result<DetailedResponse<DialogNode>> {
        if let Some(next_step) = &options.next_step {
            next_step.validate()?;
        }

        let request = RequestEnvelope::post("/v1/workspaces/{workspace_id}/dialog_nodes")
            .path_param("workspace_id", options.workspace_id)
            .query_opt("include_audit", options.include_audit)
            .body_required("dialog_node", &options.dialog_node)
            .body_opt("description", options.description.as_ref())
            .body_opt("conditions", options.conditions.as_ref())
            .body_opt("parent", options.parent.as_ref())
            .body_opt("previous_sibling", options.previous_sibling.as_ref())
            .body_opt("output", options.output.as_ref())
            .body_opt("context", options.context.as_ref())
            .body_opt("metadata", options.metadata.as_ref())
            .body_opt("next_step", options.next_step.as_ref())
            .body_opt("title", options.title.as_ref())
            .body_opt("type", options.node_type.as_ref())
            .body_opt("event_name", options.event_name.as_ref())
            .body_opt("variable", options.variable.as_ref())
            .body_opt("actions", options.actions.as_ref())
            .body_opt("digress_in", options.digress_in.as_ref())
            .body_opt("digress_out", options.digress_out.as_ref())
            .body_opt("digress_out_slots", options.digress_out_slots.as_ref())
            .body_opt("user_label", options.user_label.as_ref())
            .body_opt("disambiguation_opt_out", options.disambiguation_opt_out.as_ref())
            .headers(&options.headers);
        self.client.send(request).await
    }

    /// Get a dialog node.
    pub async fn get(&self, options: GetDialogNodeOptions) -> Result<DetailedResponse<DialogNode>> {
        let request =
            RequestEnvelope::get("/v1/workspaces/{workspace_id}/dialog_nodes/{dialog_node}")
                .path_param("workspace_id", options.workspace_id)
                .path_param("dialog_node", options.dialog_node)
                .query_opt("include_audit", options.include_audit)
                .headers(&options.headers);
        self.client.send(request).await
    }

    /// Update a dialog node.
    pub async fn update(
        &self,
        options: UpdateDialogNodeOptions,
    ) -> Result<DetailedResponse<DialogNode>> {
        if let Some(next_step) = &options.new_next_step {
            next_step.validate()?;
        }

        let request =
            RequestEnvelope::post("/v1/workspaces/{workspace_id}/dialog_nodes/{dialog_node}")
                .path_param("workspace_id", options.workspace_id)
                .path_param("dialog_node", options.dialog_node)
                .query_opt("include_audit", options.include_audit)
                .body_opt("dialog_node", options.new_dialog_node.as_ref())
                .body_opt("description", options.new_description.as_ref())
                .body_opt("conditions", options.new_conditions.as_ref())
                .body_opt("parent", options.new_parent.as_ref())
                .body_opt("previous_sibling", options.new_previous_sibling.as_ref())
                .body_opt("output", options.new_output.as_ref())
                .body_opt("context", options.new_context.as_ref())
                .body_opt("metadata", options.new_metadata.as_ref())
                .body_opt("next_step", options.new_next_step.as_ref())
                .body_opt("title", options.new_title.as_ref())
                .body_opt("type", options.new_node_type.as_ref())
                .body_opt("event_name", options.new_event_name.as_ref())
                .body_opt("variable", options.new_variable.as_ref())
                .body_opt("actions", options.new_actions.as_ref())
                .body_opt("digress_in", options.new_digress_in.as_ref())
                .body_opt("digress_out", options.new_digress_out.as_ref())
                .body_opt("digress_out_slots", options.new_digress_out_slots.as_ref())
                .body_opt("user_label", options.new_user_label.as_ref())
                .body_opt(
                    "disambiguation_opt_out",
                    options.new_disambiguation_opt_out.as_ref(),
                )
                .headers(&options.headers);
        self.client.send(request).await
    }

    /// Delete a dialog node.
    pub async fn delete(&self, options: DeleteDialogNodeOptions) -> Result<DetailedResponse<()>> {
        let request =
            RequestEnvelope::delete("/v1/workspaces/{workspace_id}/dialog_nodes/{dialog_node}")
                .path_param("workspace_id", options.workspace_id)
                .path_param("dialog_node", options.dialog_node)
                .headers(&options.headers);
        self.client.send_empty(request).await
    }
}
