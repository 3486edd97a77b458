//! Append-only conversation record.

use chrono::Utc;
use twin_common::SessionId;

use crate::{Message, Role};

/// Ordered messages plus the session id the server handed out.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
    session_id: Option<SessionId>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new message stamped with the current time and return a copy.
    pub fn push(&mut self, role: Role, content: impl Into<String>) -> Message {
        let message = Message {
            id: self.messages.len() as u64 + 1,
            role,
            content: content.into(),
            timestamp: Utc::now(),
        };
        self.messages.push(message.clone());
        message
    }

    /// Take `incoming` as the session id if none is held yet.
    ///
    /// Returns `true` only when the id was adopted. Empty ids are ignored,
    /// and a held id is never replaced.
    pub fn adopt_session_id(&mut self, incoming: Option<SessionId>) -> bool {
        if self.session_id.is_some() {
            return false;
        }
        match incoming {
            Some(id) if !id.is_empty() => {
                self.session_id = Some(id);
                true
            }
            _ => false,
        }
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The user message and assistant reply of one exchange, found by the
    /// reply's id.
    pub fn exchange(&self, reply_id: u64) -> Option<&[Message]> {
        let end = self.messages.iter().position(|m| m.id == reply_id)?;
        let start = end.checked_sub(1)?;
        let pair = &self.messages[start..=end];
        (pair[0].role == Role::User && pair[1].role == Role::Assistant).then_some(pair)
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_increase_from_one() {
        let mut t = Transcript::new();
        let a = t.push(Role::User, "a");
        let b = t.push(Role::Assistant, "b");
        let c = t.push(Role::User, "c");
        assert_eq!((a.id, b.id, c.id), (1, 2, 3));
        assert_eq!(t.len(), 3);
        assert_eq!(t.last().unwrap().content, "c");
    }

    #[test]
    fn timestamps_do_not_go_backwards() {
        let mut t = Transcript::new();
        let a = t.push(Role::User, "a");
        let b = t.push(Role::Assistant, "b");
        assert!(b.timestamp >= a.timestamp);
    }

    #[test]
    fn adopts_first_id_only() {
        let mut t = Transcript::new();
        assert!(t.session_id().is_none());
        assert!(t.adopt_session_id(Some("abc123".into())));
        assert!(!t.adopt_session_id(Some("other".into())));
        assert_eq!(t.session_id().unwrap().as_str(), "abc123");
    }

    #[test]
    fn missing_or_empty_id_is_not_adopted() {
        let mut t = Transcript::new();
        assert!(!t.adopt_session_id(None));
        assert!(!t.adopt_session_id(Some(String::new().into())));
        assert!(t.session_id().is_none());
        assert!(t.adopt_session_id(Some("late".into())));
        assert_eq!(t.session_id().unwrap().as_str(), "late");
    }

    #[test]
    fn exchange_is_found_by_reply_id() {
        let mut t = Transcript::new();
        t.push(Role::User, "q1");
        t.push(Role::Assistant, "r1");
        t.push(Role::User, "q2");
        let reply = t.push(Role::Assistant, "r2");
        t.push(Role::User, "q3");

        let pair = t.exchange(reply.id).unwrap();
        let contents: Vec<&str> = pair.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["q2", "r2"]);
    }

    #[test]
    fn exchange_needs_an_assistant_reply_after_a_user_message() {
        let mut t = Transcript::new();
        let first = t.push(Role::User, "q1");
        assert!(t.exchange(first.id).is_none());
        assert!(t.exchange(99).is_none());

        let user = t.push(Role::User, "q2");
        assert!(t.exchange(user.id).is_none());
    }
}
