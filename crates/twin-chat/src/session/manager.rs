//! ChatSession struct and state accessors.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use twin_common::{SessionId, DEFAULT_FALLBACK_MESSAGE};

use crate::{ChatBackend, Message};

use super::transcript::Transcript;

/// A conversation with the remote assistant.
///
/// Share it behind an `Arc` to submit from spawned tasks while the UI keeps
/// reading the state.
pub struct ChatSession {
    /// Transport used for every exchange.
    pub(super) backend: Arc<dyn ChatBackend>,
    /// Messages and the adopted session id.
    pub(super) transcript: Mutex<Transcript>,
    /// Assistant text used for every failed exchange.
    pub(super) fallback_message: String,
    /// Whether a request is currently in flight.
    pub(super) busy: AtomicBool,
}

impl ChatSession {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self {
            backend,
            transcript: Mutex::new(Transcript::new()),
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
            busy: AtomicBool::new(false),
        }
    }

    pub fn with_fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }

    /// The transcript is append-only, so a panic mid-append cannot leave it
    /// half-written; a poisoned lock is simply taken over.
    pub(super) fn lock_transcript(&self) -> MutexGuard<'_, Transcript> {
        self.transcript
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the conversation so far.
    pub fn messages(&self) -> Vec<Message> {
        self.lock_transcript().messages().to_vec()
    }

    /// Number of messages in the transcript.
    pub fn message_count(&self) -> usize {
        self.lock_transcript().len()
    }

    /// The user message and reply that `reply` belongs to, in order.
    ///
    /// Empty when `reply` is not an assistant message of this session.
    pub fn exchange_for(&self, reply: &Message) -> Vec<Message> {
        self.lock_transcript()
            .exchange(reply.id)
            .map(<[Message]>::to_vec)
            .unwrap_or_default()
    }

    pub fn last_message(&self) -> Option<Message> {
        self.lock_transcript().last().cloned()
    }

    /// Session id assigned by the server, once the first reply arrived.
    pub fn session_id(&self) -> Option<SessionId> {
        self.lock_transcript().session_id().cloned()
    }

    /// Whether a submission is waiting for its reply.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    pub fn fallback_message(&self) -> &str {
        &self.fallback_message
    }
}
