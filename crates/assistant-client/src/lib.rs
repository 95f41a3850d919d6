//! HTTP client SDK for the assistant v1 REST API.
//!
//! This crate provides a typed client for conversational workspaces: their
//! intents, entities and dialog nodes, the runtime `message` endpoint, logs
//! and user data deletion.
//!
//! # Example
//!
//! ```no_run
//! use assistant_client::api::{CreateIntentOptions, MessageOptions};
//! use assistant_client::{AssistantClient, Authenticator, Example, Result};
//!
//! # async fn example() -> Result<()> {
//! // Create a client
//! let client = AssistantClient::builder()
//!     .version("2021-06-14")
//!     .authenticator(Authenticator::Bearer("token".into()))
//!     .build()?;
//!
//! // Train an intent
//! let mut options = CreateIntentOptions::new("W1", "greeting");
//! options.examples = Some(vec![Example::new("hello"), Example::new("good morning")]);
//! let intent = client.intents().create(options).await?;
//! println!("Created intent: {}", intent.result.intent);
//!
//! // Talk to the dialog, carrying the context between turns
//! let first = client
//!     .conversation()
//!     .message(MessageOptions::new("W1").with_text("hi"))
//!     .await?
//!     .into_result();
//! for text in first.response_texts() {
//!     println!("{}", text);
//! }
//!
//! let second = client
//!     .conversation()
//!     .message_text("W1", "what can you do?", Some(first.context))
//!     .await?;
//! println!("{:?}", second.response_texts());
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Conversation**: Send messages, classify utterances in bulk
//! - **Workspaces**: Create, list, get (optionally exported), update, delete
//! - **Intents / Examples / Counterexamples**: Full CRUD
//! - **Entities / Values / Synonyms**: Full CRUD, plus entity mentions
//! - **Dialog nodes**: Full CRUD, plus tree reconstruction
//! - **Logs**: Per workspace or filtered across workspaces
//! - **User data**: Delete by customer ID
//!
//! Every operation returns a [`DetailedResponse`] holding the status code,
//! response headers and the decoded result.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod response;
pub mod types;

pub use client::{AssistantClient, ClientBuilder};
pub use config::{Authenticator, RetryPolicy, DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_URL};
pub use error::{Error, Result};
pub use request::RequestEnvelope;
pub use response::DetailedResponse;
pub use types::*;
