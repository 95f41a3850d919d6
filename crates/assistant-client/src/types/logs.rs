//! Conversation logs.

use serde::{Deserialize, Serialize};

use super::common::LogPagination;
use super::message::{MessageRequest, MessageResponse};

/// One recorded message exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Log {
    /// The request as received.
    pub request: MessageRequest,
    /// The response as sent.
    pub response: MessageResponse,
    /// Log event ID.
    pub log_id: String,
    /// Request time, as reported by the service.
    pub request_timestamp: String,
    /// Response time, as reported by the service.
    pub response_timestamp: String,
    /// Workspace that handled the request.
    pub workspace_id: String,
    /// Workspace language.
    pub language: String,
}

/// Response for list logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogCollection {
    /// Logs, in server order.
    pub logs: Vec<Log>,
    /// Pagination details.
    pub pagination: LogPagination,
}
