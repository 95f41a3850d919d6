//! API endpoint implementations.
//!
//! Each group takes an options struct per operation. Required identifiers
//! are plain `String`s, optional parameters are `Option`s, and every options
//! struct carries a `headers` map merged into the request.

mod conversation;
mod counterexamples;
mod dialog_nodes;
mod entities;
mod examples;
mod intents;
mod logs;
mod synonyms;
mod user_data;
mod values;
mod workspaces;

pub use conversation::{BulkClassifyOptions, ConversationApi, MessageOptions};
pub use counterexamples::{
    CounterexamplesApi, CreateCounterexampleOptions, DeleteCounterexampleOptions,
    GetCounterexampleOptions, ListCounterexamplesOptions, UpdateCounterexampleOptions,
};
pub use dialog_nodes::{
    CreateDialogNodeOptions, DeleteDialogNodeOptions, DialogNodesApi, GetDialogNodeOptions,
    ListDialogNodesOptions, UpdateDialogNodeOptions,
};
pub use entities::{
    CreateEntityOptions, DeleteEntityOptions, EntitiesApi, GetEntityOptions, ListEntitiesOptions,
    ListMentionsOptions, UpdateEntityOptions,
};
pub use examples::{
    CreateExampleOptions, DeleteExampleOptions, ExamplesApi, GetExampleOptions,
    ListExamplesOptions, UpdateExampleOptions,
};
pub use intents::{
    CreateIntentOptions, DeleteIntentOptions, GetIntentOptions, IntentsApi, ListIntentsOptions,
    UpdateIntentOptions,
};
pub use logs::{ListAllLogsOptions, ListLogsOptions, LogsApi};
pub use synonyms::{
    CreateSynonymOptions, DeleteSynonymOptions, GetSynonymOptions, ListSynonymsOptions,
    SynonymsApi, UpdateSynonymOptions,
};
pub use user_data::{DeleteUserDataOptions, UserDataApi};
pub use values::{
    CreateValueOptions, DeleteValueOptions, GetValueOptions, ListValuesOptions, UpdateValueOptions,
    ValuesApi,
};
pub use workspaces::{
    CreateWorkspaceOptions, DeleteWorkspaceOptions, GetWorkspaceOptions, ListWorkspacesOptions,
    UpdateWorkspaceOptions, WorkspacesApi,
};
