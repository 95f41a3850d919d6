//! Runtime conversation: message input and output, context, and the
//! response items returned by the `message` endpoint.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::common::{AdditionalProperties, Metadata};
use super::dialog::DialogNodeAction;
use super::discriminator;
use super::output::{
    AgentAvailabilityMessage, ChannelTransferInfo, ConnectToAgentTransferInfo, OptionElement,
    Preference, ResponseGenericChannel,
};

// ─────────────────────────────────────────────────────────────────────────────
// Input and context
// ─────────────────────────────────────────────────────────────────────────────

/// User input. Unknown keys are preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageInput {
    /// Input text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Whether to return spelling suggestions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spelling_suggestions: Option<bool>,
    /// Whether to auto-correct spelling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spelling_auto_correct: Option<bool>,
    /// Suggested correction, set by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_text: Option<String>,
    /// Original text before auto-correction, set by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
    /// Keys not modelled above.
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

impl MessageInput {
    /// Input consisting of just `text`.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }
}

/// Conversation state, echoed back by the caller on every turn.
///
/// The client holds no session state of its own; continuity comes from
/// sending the context returned by one `message` call with the next.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Context {
    /// Conversation ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    /// Service-owned state. Pass it back unchanged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<Metadata>,
    /// Deployment metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<MessageContextMetadata>,
    /// Context variables and any other keys.
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

/// Metadata attached to a context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageContextMetadata {
    /// Deployment name, for logs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment: Option<String>,
    /// End user ID, for billing and user-data deletion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Intents and entities
// ─────────────────────────────────────────────────────────────────────────────

/// An intent recognized in the user input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeIntent {
    /// Intent name.
    pub intent: String,
    /// Confidence between 0 and 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// An entity detected in the user input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeEntity {
    /// Entity name.
    pub entity: String,
    /// Zero-based `[start, end)` character offsets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec<i64>>,
    /// Entity value.
    pub value: String,
    /// Confidence between 0 and 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Pattern capture groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<CaptureGroup>>,
    /// Interpretation of a system entity value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<RuntimeEntityInterpretation>,
    /// Alternative values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<RuntimeEntityAlternative>>,
    /// Role of the entity in the input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<RuntimeEntityRole>,
}

/// A pattern capture group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureGroup {
    /// Group text.
    pub group: String,
    /// Zero-based `[start, end)` character offsets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec<i64>>,
}

/// Interpretation of a date, time or number system entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeEntityInterpretation {
    /// Calendar used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_type: Option<String>,
    /// Links a date to its time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime_link: Option<String>,
    /// Festival name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub festival: Option<String>,
    /// Time granularity (`day`, `hour`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub granularity: Option<String>,
    /// Links the ends of a range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_link: Option<String>,
    /// Range modifier word, e.g. `from`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range_modifier: Option<String>,
    /// Relative day offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_day: Option<f64>,
    /// Relative month offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_month: Option<f64>,
    /// Relative week offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_week: Option<f64>,
    /// Relative weekend offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_weekend: Option<f64>,
    /// Relative year offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_year: Option<f64>,
    /// Day of month.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_day: Option<f64>,
    /// Day of week.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_day_of_week: Option<String>,
    /// Month.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_month: Option<f64>,
    /// Quarter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_quarter: Option<f64>,
    /// Year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_year: Option<f64>,
    /// Numeric value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_value: Option<f64>,
    /// Entity subtype.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    /// Part of day, e.g. `morning`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of_day: Option<String>,
    /// Relative hour offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_hour: Option<f64>,
    /// Relative minute offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_minute: Option<f64>,
    /// Relative second offset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_second: Option<f64>,
    /// Hour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_hour: Option<f64>,
    /// Minute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_minute: Option<f64>,
    /// Second.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_second: Option<f64>,
    /// Time zone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// An alternative entity value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeEntityAlternative {
    /// Value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Confidence between 0 and 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// Role of an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeEntityRole {
    /// Role type, e.g. `date_from`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub role_type: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Output
// ─────────────────────────────────────────────────────────────────────────────

/// Severity of a dialog log message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    /// Informational.
    Info,
    /// Error.
    Error,
    /// Warning.
    Warn,
}

/// A message logged while processing a turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogMessage {
    /// Severity.
    pub level: LogLevel,
    /// Message text.
    pub msg: String,
    /// Message code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// What the message is about.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<LogMessageSource>,
}

/// Object a log message refers to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogMessageSource {
    /// Source type, e.g. `dialog_node`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    /// Dialog node ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_node: Option<String>,
}

/// A dialog node visited while processing a turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogNodeVisitedDetails {
    /// Dialog node ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_node: Option<String>,
    /// Node title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Node conditions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,
}

/// Output of a turn. Unknown keys are preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputData {
    /// IDs of dialog nodes visited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes_visited: Option<Vec<String>>,
    /// Details of dialog nodes visited, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes_visited_details: Option<Vec<DialogNodeVisitedDetails>>,
    /// Log messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_messages: Option<Vec<LogMessage>>,
    /// Response texts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    /// Response items.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic: Option<Vec<RuntimeResponseGeneric>>,
    /// Keys not modelled above.
    #[serde(flatten)]
    pub additional_properties: Map<String, Value>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Runtime response items
// ─────────────────────────────────────────────────────────────────────────────

/// Text response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeResponseText {
    /// Response text.
    pub text: String,
    /// Channels the item is restricted to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
}

/// Pause before the next response item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeResponsePause {
    /// Pause length in milliseconds.
    pub time: i64,
    /// Whether to show a typing indicator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typing: Option<bool>,
    /// Channels the item is restricted to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
}

/// Image response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeResponseImage {
    /// Image URL.
    pub source: String,
    /// Title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Channels the item is restricted to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
    /// Alternative text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

/// Option list response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeResponseOption {
    /// Title.
    pub title: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Presentation preference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preference: Option<Preference>,
    /// Options.
    pub options: Vec<OptionElement>,
    /// Channels the item is restricted to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
}

/// Request to transfer the conversation to a human agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeResponseConnectToAgent {
    /// Message for the human agent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_to_human_agent: Option<String>,
    /// Message shown when an agent is available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_available: Option<AgentAvailabilityMessage>,
    /// Message shown when no agent is available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_unavailable: Option<AgentAvailabilityMessage>,
    /// Routing information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_info: Option<ConnectToAgentTransferInfo>,
    /// Summary of the topic being discussed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    /// Dialog node that requested the transfer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_node: Option<String>,
    /// Channels the item is restricted to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
}

/// Disambiguation suggestions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeResponseSuggestion {
    /// Title.
    pub title: String,
    /// Suggestions.
    pub suggestions: Vec<DialogSuggestion>,
    /// Channels the item is restricted to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
}

/// One disambiguation suggestion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogSuggestion {
    /// User-facing label.
    pub label: String,
    /// Message sent back when the suggestion is selected.
    pub value: DialogSuggestionValue,
    /// Output of the suggested dialog node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Metadata>,
    /// Suggested dialog node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialog_node: Option<String>,
}

/// Message payload of a selected suggestion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogSuggestionValue {
    /// User input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<MessageInput>,
    /// Intents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<RuntimeIntent>>,
    /// Entities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<RuntimeEntity>>,
}

/// Transfer to another channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeResponseChannelTransfer {
    /// Message shown to the user.
    pub message_to_user: String,
    /// Transfer target.
    pub transfer_info: ChannelTransferInfo,
    /// Channels the item is restricted to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
}

/// Custom response for the client application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeResponseUserDefined {
    /// Arbitrary payload.
    pub user_defined: Metadata,
    /// Channels the item is restricted to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
}

/// A response item returned by the `message` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "response_type", rename_all = "snake_case")]
pub enum RuntimeResponseGeneric {
    /// `text`
    Text(RuntimeResponseText),
    /// `pause`
    Pause(RuntimeResponsePause),
    /// `image`
    Image(RuntimeResponseImage),
    /// `option`
    Option(RuntimeResponseOption),
    /// `connect_to_agent`
    ConnectToAgent(RuntimeResponseConnectToAgent),
    /// `suggestion`
    Suggestion(RuntimeResponseSuggestion),
    /// `channel_transfer`
    ChannelTransfer(RuntimeResponseChannelTransfer),
    /// `user_defined`
    UserDefined(RuntimeResponseUserDefined),
}

impl RuntimeResponseGeneric {
    /// Every `response_type` this family accepts.
    pub const VARIANTS: &'static [&'static str] = &[
        "text",
        "pause",
        "image",
        "option",
        "connect_to_agent",
        "suggestion",
        "channel_transfer",
        "user_defined",
    ];

    /// The `response_type` of this item.
    pub fn response_type(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Pause(_) => "pause",
            Self::Image(_) => "image",
            Self::Option(_) => "option",
            Self::ConnectToAgent(_) => "connect_to_agent",
            Self::Suggestion(_) => "suggestion",
            Self::ChannelTransfer(_) => "channel_transfer",
            Self::UserDefined(_) => "user_defined",
        }
    }
}

impl<'de> Deserialize<'de> for RuntimeResponseGeneric {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut object = Map::<String, Value>::deserialize(deserializer)?;
        let tag = discriminator::take_tag::<D::Error>(&mut object)?;

        match tag.as_str() {
            "text" => discriminator::decode_payload(object).map(Self::Text),
            "pause" => discriminator::decode_payload(object).map(Self::Pause),
            "image" => discriminator::decode_payload(object).map(Self::Image),
            "option" => discriminator::decode_payload(object).map(Self::Option),
            "connect_to_agent" => discriminator::decode_payload(object).map(Self::ConnectToAgent),
            "suggestion" => discriminator::decode_payload(object).map(Self::Suggestion),
            "channel_transfer" => {
                discriminator::decode_payload(object).map(Self::ChannelTransfer)
            }
            "user_defined" => discriminator::decode_payload(object).map(Self::UserDefined),
            other => Err(discriminator::unrecognized(other, Self::VARIANTS)),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Message request and response
// ─────────────────────────────────────────────────────────────────────────────

/// A message request as recorded in logs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageRequest {
    /// User input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<MessageInput>,
    /// Intents supplied instead of classifying the input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<RuntimeIntent>>,
    /// Entities supplied instead of detecting them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<RuntimeEntity>>,
    /// Whether to return more than one intent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_intents: Option<bool>,
    /// Conversation state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
    /// Output from the previous turn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputData>,
    /// Actions requested by the dialog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<DialogNodeAction>>,
    /// End user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Response of the `message` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// The processed user input.
    pub input: MessageInput,
    /// Recognized intents, highest confidence first.
    pub intents: Vec<RuntimeIntent>,
    /// Detected entities.
    pub entities: Vec<RuntimeEntity>,
    /// Whether more than one intent was returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_intents: Option<bool>,
    /// Conversation state to send with the next turn.
    pub context: Context,
    /// Turn output.
    pub output: OutputData,
    /// Actions the client should run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<DialogNodeAction>>,
    /// End user ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl MessageResponse {
    /// Plain texts of all `text` response items, in order.
    pub fn response_texts(&self) -> Vec<&str> {
        self.output
            .generic
            .iter()
            .flatten()
            .filter_map(|item| match item {
                RuntimeResponseGeneric::Text(text) => Some(text.text.as_str()),
                _ => None,
            })
            .collect()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Bulk classify
// ─────────────────────────────────────────────────────────────────────────────

/// An utterance to classify.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkClassifyUtterance {
    /// Utterance text.
    pub text: String,
}

impl BulkClassifyUtterance {
    /// Create an utterance.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Classification of one utterance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkClassifyOutput {
    /// The utterance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<BulkClassifyUtterance>,
    /// Detected entities.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<RuntimeEntity>>,
    /// Recognized intents.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<RuntimeIntent>>,
}

/// Response of the `bulk_classify` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkClassifyResponse {
    /// One entry per utterance, in request order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Vec<BulkClassifyOutput>>,
}

impl AdditionalProperties for MessageInput {
    fn additional_properties(&self) -> &Map<String, Value> {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.additional_properties
    }
}

impl AdditionalProperties for Context {
    fn additional_properties(&self) -> &Map<String, Value> {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.additional_properties
    }
}

impl AdditionalProperties for OutputData {
    fn additional_properties(&self) -> &Map<String, Value> {
        &self.additional_properties
    }

    fn additional_properties_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.additional_properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_context_preserves_unknown_keys() {
        let raw = json!({
            "conversation_id": "c1",
            "system": {"dialog_stack": [{"dialog_node": "root"}], "dialog_turn_counter": 1},
            "metadata": {"user_id": "u1"},
            "pizza_size": "large",
            "integrations": {"slack": {"channel": "C123"}}
        });

        let context: Context = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(context.conversation_id.as_deref(), Some("c1"));
        assert_eq!(context.get_property("pizza_size"), Some(&json!("large")));
        assert!(context.additional_properties.contains_key("integrations"));
        assert!(!context.additional_properties.contains_key("system"));

        assert_eq!(serde_json::to_value(&context).unwrap(), raw);
    }

    #[test]
    fn test_context_property_accessors() {
        let mut context = Context::default();
        assert!(context.set_property("count", json!(1)).is_none());
        assert_eq!(context.set_property("count", json!(2)), Some(json!(1)));
        assert_eq!(
            serde_json::to_value(&context).unwrap(),
            json!({"count": 2})
        );
        assert_eq!(context.remove_property("count"), Some(json!(2)));
        assert_eq!(serde_json::to_value(&context).unwrap(), json!({}));
    }

    #[test]
    fn test_message_input_and_output_preserve_unknown_keys() {
        let input_raw = json!({"text": "hi", "message_type": "text", "options": {"debug": true}});
        let input: MessageInput = serde_json::from_value(input_raw.clone()).unwrap();
        assert_eq!(input.text.as_deref(), Some("hi"));
        assert_eq!(serde_json::to_value(&input).unwrap(), input_raw);

        let output_raw = json!({
            "text": ["Hello"],
            "generic": [{"response_type": "text", "text": "Hello"}],
            "nodes_visited": ["node_1"],
            "log_messages": [],
            "debug": {"branch_exited": true}
        });
        let output: OutputData = serde_json::from_value(output_raw.clone()).unwrap();
        assert_eq!(output.log_messages, Some(vec![]));
        assert_eq!(output.get_property("debug"), Some(&json!({"branch_exited": true})));
        assert_eq!(serde_json::to_value(&output).unwrap(), output_raw);
    }

    #[test]
    fn test_runtime_text_variant() {
        let item: RuntimeResponseGeneric =
            serde_json::from_value(json!({"response_type": "text", "text": "Hello"})).unwrap();
        assert_eq!(
            item,
            RuntimeResponseGeneric::Text(RuntimeResponseText {
                text: "Hello".to_string(),
                channels: None,
            })
        );
    }

    #[test]
    fn test_runtime_suggestion_variant() {
        let item: RuntimeResponseGeneric = serde_json::from_value(json!({
            "response_type": "suggestion",
            "title": "Did you mean:",
            "suggestions": [{
                "label": "Opening hours",
                "value": {"input": {"text": "when are you open"}},
                "dialog_node": "node_5"
            }]
        }))
        .unwrap();

        match item {
            RuntimeResponseGeneric::Suggestion(suggestion) => {
                assert_eq!(suggestion.suggestions[0].label, "Opening hours");
                assert_eq!(suggestion.suggestions[0].dialog_node.as_deref(), Some("node_5"));
            }
            other => panic!("expected suggestion, got {:?}", other),
        }
    }

    #[test]
    fn test_runtime_rejects_dialog_only_variant() {
        let err = serde_json::from_value::<RuntimeResponseGeneric>(json!({
            "response_type": "search_skill",
            "query": "x",
            "query_type": "natural_language"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("unrecognized variant `search_skill`"));
    }

    #[test]
    fn test_runtime_missing_discriminator() {
        let err =
            serde_json::from_value::<RuntimeResponseGeneric>(json!({"text": "Hello"})).unwrap_err();
        assert!(err.to_string().contains("missing discriminator"));
    }

    #[test]
    fn test_entity_interpretation_and_role() {
        let entity: RuntimeEntity = serde_json::from_value(json!({
            "entity": "sys-date",
            "location": [10, 18],
            "value": "2021-06-15",
            "confidence": 1.0,
            "interpretation": {"granularity": "day", "relative_day": 1},
            "role": {"type": "date_to"}
        }))
        .unwrap();

        let interpretation = entity.interpretation.unwrap();
        assert_eq!(interpretation.granularity.as_deref(), Some("day"));
        assert_eq!(interpretation.relative_day, Some(1.0));
        assert_eq!(entity.role.unwrap().role_type.as_deref(), Some("date_to"));
    }

    #[test]
    fn test_response_texts() {
        let response: MessageResponse = serde_json::from_value(json!({
            "input": {"text": "hi"},
            "intents": [{"intent": "greeting", "confidence": 0.98}],
            "entities": [],
            "context": {"conversation_id": "c1"},
            "output": {
                "generic": [
                    {"response_type": "text", "text": "Hello"},
                    {"response_type": "pause", "time": 200},
                    {"response_type": "text", "text": "How can I help?"}
                ]
            }
        }))
        .unwrap();

        assert_eq!(response.response_texts(), ["Hello", "How can I help?"]);
        assert_eq!(response.intents[0].confidence, Some(0.98));
    }
}
