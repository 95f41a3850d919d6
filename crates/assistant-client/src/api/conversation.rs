//! Conversation API: `message` and `bulk_classify`.

use std::collections::HashMap;

use crate::client::AssistantClient;
use crate::error::Result;
use crate::request::RequestEnvelope;
use crate::response::DetailedResponse;
use crate::types::{
    BulkClassifyResponse, BulkClassifyUtterance, Context, MessageInput, MessageResponse,
    OutputData, RuntimeEntity, RuntimeIntent,
};

/// Options for sending a message.
#[derive(Debug, Clone, Default)]
pub struct MessageOptions {
    /// Workspace ID.
    pub workspace_id: String,
    /// User input.
    pub input: Option<MessageInput>,
    /// Intents to use instead of classifying the input.
    pub intents: Option<Vec<RuntimeIntent>>,
    /// Entities to use instead of detecting them.
    pub entities: Option<Vec<RuntimeEntity>>,
    /// Whether to return more than one intent.
    pub alternate_intents: Option<bool>,
    /// Context from the previous turn. Omit to start a new conversation.
    pub context: Option<Context>,
    /// Output from the previous turn.
    pub output: Option<OutputData>,
    /// End user ID, for billing and user data deletion.
    pub user_id: Option<String>,
    /// Whether to return details of visited dialog nodes.
    pub nodes_visited_details: Option<bool>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl MessageOptions {
    /// Options for `workspace_id` with no input yet.
    pub fn new(workspace_id: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            ..Default::default()
        }
    }

    /// Set the input text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.input = Some(MessageInput::text(text));
        self
    }

    /// Continue the conversation carried by `context`.
    pub fn with_context(mut self, context: Context) -> Self {
        self.context = Some(context);
        self
    }
}

/// Options for classifying utterances in bulk.
#[derive(Debug, Clone, Default)]
pub struct BulkClassifyOptions {
    /// Workspace ID.
    pub workspace_id: String,
    /// Utterances to classify.
    pub input: Option<Vec<BulkClassifyUtterance>>,
    /// Custom request headers.
    pub headers: HashMap<String, String>,
}

impl BulkClassifyOptions {
    /// Options classifying `texts` against `workspace_id`.
    pub fn new<I, S>(workspace_id: impl Into<String>, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            workspace_id: workspace_id.into(),
            input: Some(texts.into_iter().map(BulkClassifyUtterance::new).collect()),
            headers: HashMap::new(),
        }
    }
}

/// Conversation API client.
pub struct ConversationApi {
    client: AssistantClient,
}

impl ConversationApi {
    pub(crate) fn new(client: AssistantClient) -> Self {
        Self { client }
    }

    /// Send user input to a workspace and get the dialog's response.
    ///
    /// Each call is stateless on the client side: pass the returned
    /// `context` with the next call to continue the conversation.
    pub async fn message(
        &self,
        options: MessageOptions,
    ) -> Result<DetailedResponse<MessageResponse>> {
        let request = RequestEnvelope::post("/v1/workspaces/{workspace_id}/message")
            .path_param("workspace_id", options.workspace_id)
            .query_opt("nodes_visited_details", options.nodes_visited_details)
            .body_opt("input", options.input.as_ref())
            .body_opt("intents", options.intents.as_ref())
            .body_opt("entities", options.entities.as_ref())
            .body_opt("alternate_intents", options.alternate_intents.as_ref())
            .body_opt("context", options.context.as_ref())
            .body_opt("output", options.output.as_ref())
            .body_opt("user_id", options.user_id.as_ref())
            .headers(&options.headers);
        self.client.send(request).await
    }

    /// Send a text message (convenience method).
    pub async fn message_text(
        &self,
        workspace_id: &str,
        text: impl Into<String>,
        context: Option<Context>,
    ) -> Result<MessageResponse> {
        let mut options = MessageOptions::new(workspace_id).with_text(text);
        options.context = context;
        Ok(self.message(options).await?.into_result())
    }

    /// Classify utterances without running the dialog.
    pub async fn bulk_classify(
        &self,
        options: BulkClassifyOptions,
    ) -> Result<DetailedResponse<BulkClassifyResponse>> {
        let request = RequestEnvelope::post("/v1/workspaces/{workspace_id}/bulk_classify")
            .path_param("workspace_id", options.workspace_id)
            .body_opt("input", options.input.as_ref())
            .headers(&options.headers);
        self.client.send(request).await
    }
}
