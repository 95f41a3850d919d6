//! Response items defined on dialog nodes.
//!
//! A dialog node's `output.generic` list holds items of several shapes,
//! selected by `response_type`. [`DialogNodeOutputGeneric`] models that family;
//! the pieces shared with runtime responses live here too.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::common::Metadata;
use super::discriminator;
use super::message::{MessageInput, RuntimeEntity, RuntimeIntent};

/// A channel a response item is restricted to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseGenericChannel {
    /// Channel name, e.g. `chat`, `slack`, `voice_telephony`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
}

/// How one of several text values is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// In order, one per visit.
    Sequential,
    /// At random.
    Random,
    /// All of them, joined by the delimiter.
    Multiline,
}

/// How options are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preference {
    /// Drop-down list.
    Dropdown,
    /// Buttons.
    Button,
}

/// Query language of a search skill response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryType {
    /// Natural language query.
    NaturalLanguage,
    /// Discovery query language.
    DiscoveryQueryLanguage,
}

/// One candidate text of a text response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextValue {
    /// Response text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// One option of an option response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionElement {
    /// User-facing label.
    pub label: String,
    /// Message sent back when the option is selected.
    pub value: OptionElementValue,
}

/// Message payload of a selected option.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionElementValue {
    /// User input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<MessageInput>,
    /// Intents to use instead of classifying the input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<RuntimeIntent>>,
    /// Entities to use instead of detecting them in the input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<RuntimeEntity>>,
}

/// Message shown when human agents are (or are not) available.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentAvailabilityMessage {
    /// Message text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Routing information for a human agent transfer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectToAgentTransferInfo {
    /// Per-integration routing targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Map<String, Value>>,
}

/// Routing information for a channel transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelTransferInfo {
    /// Transfer target.
    pub target: ChannelTransferTarget,
}

/// Target of a channel transfer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelTransferTarget {
    /// Web chat target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat: Option<ChannelTransferTargetChat>,
}

/// Web chat transfer target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelTransferTargetChat {
    /// URL of the web chat page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Text response: one or more candidate texts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogNodeOutputText {
    /// Candidate texts.
    pub values: Vec<TextValue>,
    /// How a text is chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection_policy: Option<SelectionPolicy>,
    /// Delimiter for `multiline`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
    /// Channels the item is restricted to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
}

/// Pause before the next response item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogNodeOutputPause {
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
pub struct DialogNodeOutputImage {
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
pub struct DialogNodeOutputOption {
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
pub struct DialogNodeOutputConnectToAgent {
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
    /// Channels the item is restricted to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
}

/// Search skill query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogNodeOutputSearchSkill {
    /// Query text.
    pub query: String,
    /// Query language.
    pub query_type: QueryType,
    /// Discovery filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Discovery API version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discovery_version: Option<String>,
    /// Channels the item is restricted to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
}

/// Transfer to another channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogNodeOutputChannelTransfer {
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
pub struct DialogNodeOutputUserDefined {
    /// Arbitrary payload.
    pub user_defined: Metadata,
    /// Channels the item is restricted to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
}

/// A response item defined on a dialog node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "response_type", rename_all = "snake_case")]
pub enum DialogNodeOutputGeneric {
    /// `text`
    Text(DialogNodeOutputText),
    /// `pause`
    Pause(DialogNodeOutputPause),
    /// `image`
    Image(DialogNodeOutputImage),
    /// `option`
    Option(DialogNodeOutputOption),
    /// `connect_to_agent`
    ConnectToAgent(DialogNodeOutputConnectToAgent),
    /// `search_skill`
    SearchSkill(DialogNodeOutputSearchSkill),
    /// `channel_transfer`
    ChannelTransfer(DialogNodeOutputChannelTransfer),
    /// `user_defined`
    UserDefined(DialogNodeOutputUserDefined),
}

impl DialogNodeOutputGeneric {
    /// Every `response_type` this family accepts.
    pub const VARIANTS: &'static [&'static str] = &[
        "text",
        "pause",
        "image",
        "option",
        "connect_to_agent",
        "search_skill",
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
            Self::SearchSkill(_) => "search_skill",
            Self::ChannelTransfer(_) => "channel_transfer",
            Self::UserDefined(_) => "user_defined",
        }
    }

    /// A text item with a single value.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(DialogNodeOutputText {
            values: vec![TextValue {
                text: Some(text.into()),
            }],
            ..Default::default()
        })
    }
}

impl<'de> Deserialize<'de> for DialogNodeOutputGeneric {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut object = Map::<String, Value>::deserialize(deserializer)?;
        let tag = discriminator::take_tag::<D::Error>(&mut object)?;

        match tag.as_str() {
            "text" => discriminator::decode_payload(object).map(Self::Text),
            "pause" => discriminator::decode_payload(object).map(Self::Pause),
            "image" => discriminator::decode_payload(object).map(Self::Image),
            "option" => discriminator::decode_payload(object).map(Self::Option),
            "connect_to_agent" => discriminator::decode_payload(object).map(Self::ConnectToAgent),
            "search_skill" => discriminator::decode_payload(object).map(Self::SearchSkill),
            "channel_transfer" => {
                discriminator::decode_payload(object).map(Self::ChannelTransfer)
            }
            "user_defined" => discriminator::decode_payload(object).map(Self::UserDefined),
            other => Err(discriminator::unrecognized(other, Self::VARIANTS)),
        }
    }
}
