//! The submit operation: echo, relay, reconcile.

use tracing::{debug, info, warn};
use twin_common::new_correlation_id;

use crate::protocol::ChatRequest;
use crate::Role;

use super::manager::ChatSession;
use super::types::{BusyGuard, IgnoreReason, SubmitOutcome};

impl ChatSession {
    /// Send `text` to the assistant and record the exchange.
    ///
    /// Empty input and input arriving while another submission is pending
    /// are dropped without touching the transcript or the network. An
    /// accepted submission always appends exactly one user message followed
    /// by exactly one assistant message: the reply on success, the fallback
    /// text on any failure. Failures never surface as errors.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let message = text.trim();
        if message.is_empty() {
            debug!("Ignoring empty submission");
            return SubmitOutcome::Ignored(IgnoreReason::Empty);
        }

        let Some(_guard) = BusyGuard::acquire(&self.busy) else {
            debug!("Session busy, dropping submission");
            return SubmitOutcome::Ignored(IgnoreReason::Busy);
        };

        let request_id = new_correlation_id();
        let request = {
            let mut transcript = self.lock_transcript();
            transcript.push(Role::User, message);
            ChatRequest {
                message: message.to_string(),
                session_id: transcript.session_id().cloned(),
            }
        };

        debug!(
            %request_id,
            len = message.len(),
            has_session = request.session_id.is_some(),
            "Submitting message"
        );

        let result = self.backend.send(&request).await;

        let mut transcript = self.lock_transcript();
        match result {
            Ok(reply) => {
                if let (Some(held), Some(incoming)) = (transcript.session_id(), &reply.session_id) {
                    if held != incoming {
                        debug!(%request_id, %held, %incoming, "Ignoring different session id from server");
                    }
                }
                if transcript.adopt_session_id(reply.session_id) {
                    if let Some(id) = transcript.session_id() {
                        info!(%request_id, session_id = %id, "Session established");
                    }
                }
                let reply = transcript.push(Role::Assistant, reply.response);
                debug!(%request_id, len = reply.content.len(), "Reply received");
                SubmitOutcome::Answered(reply)
            }
            Err(e) => {
                warn!(%request_id, error = %e, "Chat request failed, appending fallback reply");
                let reply = transcript.push(Role::Assistant, self.fallback_message.clone());
                SubmitOutcome::Failed(reply)
            }
        }
    }
}
