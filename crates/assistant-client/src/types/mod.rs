//! Request and response types for the assistant v1 API.
//!
//! These types mirror the service's JSON schema. Optional fields are
//! `Option`s that are left out of serialized JSON when `None`, so "not sent"
//! and "sent empty" stay distinct in both directions.

mod common;
mod dialog;
pub(crate) mod discriminator;
mod entity;
mod intent;
mod logs;
mod message;
mod output;
mod workspace;

pub use common::{AdditionalProperties, LogPagination, Metadata, Pagination};
pub use dialog::{
    DialogNode, DialogNodeAction, DialogNodeActionType, DialogNodeCollection, DialogNodeContext,
    DialogNodeNextStep, DialogNodeOutput, DialogNodeOutputModifiers, DialogNodeType, DialogTree,
    DialogTreeNode, DigressIn, DigressOut, DigressOutSlots, EventName, NextStepBehavior,
    NextStepSelector,
};
pub use discriminator::RESPONSE_TYPE;
pub use entity::{
    Entity, EntityCollection, EntityMention, EntityMentionCollection, Synonym, SynonymCollection,
    Value, ValueCollection, ValueType,
};
pub use intent::{
    Counterexample, CounterexampleCollection, Example, ExampleCollection, Intent,
    IntentCollection, Mention,
};
pub use logs::{Log, LogCollection};
pub use message::{
    BulkClassifyOutput, BulkClassifyResponse, BulkClassifyUtterance, CaptureGroup, Context,
    DialogNodeVisitedDetails, DialogSuggestion, DialogSuggestionValue, LogLevel, LogMessage,
    LogMessageSource, MessageContextMetadata, MessageInput, MessageRequest, MessageResponse,
    OutputData, RuntimeEntity, RuntimeEntityAlternative, RuntimeEntityInterpretation,
    RuntimeEntityRole, RuntimeIntent, RuntimeResponseChannelTransfer,
    RuntimeResponseConnectToAgent, RuntimeResponseGeneric, RuntimeResponseImage,
    RuntimeResponseOption, RuntimeResponsePause, RuntimeResponseSuggestion, RuntimeResponseText,
    RuntimeResponseUserDefined,
};
pub use output::{
    AgentAvailabilityMessage, ChannelTransferInfo, ChannelTransferTarget,
    ChannelTransferTargetChat, ConnectToAgentTransferInfo, DialogNodeOutputChannelTransfer,
    DialogNodeOutputConnectToAgent, DialogNodeOutputGeneric, DialogNodeOutputImage,
    DialogNodeOutputOption, DialogNodeOutputPause, DialogNodeOutputSearchSkill,
    DialogNodeOutputText, DialogNodeOutputUserDefined, OptionElement, OptionElementValue,
    Preference, QueryType, ResponseGenericChannel, SelectionPolicy, TextValue,
};
pub use workspace::{
    DisambiguationSettings, EnabledSetting, NlpSettings, Sensitivity, StatusError,
    ToolingSettings, Webhook, WebhookHeader, Workspace, WorkspaceCollection, WorkspaceCounts,
    WorkspaceStatus, WorkspaceSystemSettings,
};
