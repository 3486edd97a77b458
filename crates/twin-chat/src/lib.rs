//! Chat client for the Digital Twin assistant.
//!
//! Provides:
//! - A conversation session manager that keeps the transcript, threads the
//!   server-assigned session id, and drops submissions while a reply is
//!   pending
//! - An HTTP backend for the assistant's `/chat` endpoint, plus its
//!   `/health` and `/conversation/{id}` helpers
//! - The `ChatBackend` trait so other transports (or fakes) can be plugged in

pub mod backend;
pub mod protocol;
pub mod session;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub use backend::{BackendConfig, HttpBackend};
pub use protocol::{ChatRequest, ChatResponse, ConversationRecord, HealthStatus, RecordedMessage};
pub use session::{ChatSession, IgnoreReason, SubmitOutcome, Transcript};
pub use twin_common::{SessionId, DEFAULT_FALLBACK_MESSAGE};

/// One request/response exchange with the remote assistant.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn send(&self, request: &ChatRequest) -> Result<ChatResponse, ChatError>;
}

/// One conversational turn in a transcript.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    /// Position-derived id, unique and increasing within one session.
    pub id: u64,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
