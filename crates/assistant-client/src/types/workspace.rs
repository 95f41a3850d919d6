//! Workspaces and their settings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Metadata, Pagination};
use super::dialog::DialogNode;
use super::entity::Entity;
use super::intent::{Counterexample, Intent};

/// Workspace lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkspaceStatus {
    /// Ready to use.
    Available,
    /// Training failed.
    Failed,
    /// Not found.
    #[serde(rename = "Non Existent")]
    NonExistent,
    /// Being processed.
    Processing,
    /// Training in progress. New workspaces start here.
    Training,
    /// Temporarily unavailable.
    Unavailable,
}

/// A conversational model: intents, entities, dialog nodes and settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    /// Workspace name.
    pub name: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Language code, e.g. `en`.
    pub language: String,
    /// Server-assigned ID. Immutable once created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
    /// Dialog nodes, as a flat list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_nodes: Option<Vec<DialogNode>>,
    /// Counterexamples.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterexamples: Option<Vec<Counterexample>>,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
    /// Arbitrary metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Whether training data from the workspace may be used for service
    /// improvement.
    pub learning_opt_in: bool,
    /// Global settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_settings: Option<WorkspaceSystemSettings>,
    /// Lifecycle state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<WorkspaceStatus>,
    /// Training errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_errors: Option<Vec<StatusError>>,
    /// Webhooks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhooks: Option<Vec<Webhook>>,
    /// Intents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<Intent>>,
    /// Entities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<Entity>>,
    /// Object counts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counts: Option<WorkspaceCounts>,
}

/// A training error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusError {
    /// Error message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Number of objects in a workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceCounts {
    /// Intents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<i64>,
    /// Entities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<i64>,
    /// Dialog nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node: Option<i64>,
}

/// A webhook called by dialog nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Webhook {
    /// Request URL.
    pub url: String,
    /// Webhook name.
    pub name: String,
    /// Request headers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<WebhookHeader>>,
}

/// A header sent with a webhook request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookHeader {
    /// Header name.
    pub name: String,
    /// Header value.
    pub value: String,
}

/// Global workspace settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceSystemSettings {
    /// Tooling settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooling: Option<ToolingSettings>,
    /// Disambiguation settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disambiguation: Option<DisambiguationSettings>,
    /// Human agent assist settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub human_agent_assist: Option<Metadata>,
    /// Whether spelling suggestions are enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spelling_suggestions: Option<bool>,
    /// Whether spelling auto-correction is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spelling_auto_correct: Option<bool>,
    /// System entity settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_entities: Option<EnabledSetting>,
    /// Off-topic detection settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub off_topic: Option<EnabledSetting>,
    /// Natural language processing settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nlp: Option<NlpSettings>,
}

/// Tooling settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolingSettings {
    /// Whether dialog JSON editor edits keep generic responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_generic_responses: Option<bool>,
}

/// How strongly the service offers disambiguation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sensitivity {
    /// Service default.
    Auto,
    /// Highest.
    High,
    /// Medium-high.
    MediumHigh,
    /// Medium.
    Medium,
    /// Medium-low.
    MediumLow,
    /// Lowest.
    Low,
}

/// Disambiguation settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisambiguationSettings {
    /// Text introducing the suggestions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Label of the "none of the above" option.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub none_of_the_above_prompt: Option<String>,
    /// Whether disambiguation is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Disambiguation sensitivity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitivity: Option<Sensitivity>,
    /// Whether suggestion order is randomized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub randomize: Option<bool>,
    /// Maximum number of suggestions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_suggestions: Option<i64>,
    /// Policy for suggestion text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion_text_policy: Option<String>,
}

/// A single on/off setting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnabledSetting {
    /// Whether the feature is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Natural language processing settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NlpSettings {
    /// Algorithm version, e.g. `latest`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// Response for list workspaces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceCollection {
    /// Workspaces, in server order.
    pub workspaces: Vec<Workspace>,
    /// Pagination details.
    pub pagination: Pagination,
}
