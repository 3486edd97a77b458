//! Conversation session management.
//!
//! A `ChatSession` holds the transcript and the server-assigned session id,
//! relays each submission to a `ChatBackend`, and refuses new submissions
//! while a reply is pending.

mod manager;
mod submit;
mod transcript;
mod types;


pub use manager::ChatSession;
pub use transcript::Transcript;
pub use types::{IgnoreReason, SubmitOutcome};
