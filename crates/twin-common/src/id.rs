use serde::{Deserialize, Serialize};
use std::fmt;

/// Short random id used to tie together the log lines of one request.
pub fn new_correlation_id() -> String {
    let uuid = uuid::Uuid::new_v4();
    let bytes = uuid.as_bytes();
    format!(
        "{:02x}{:02x}{:02x}{:02x}",
        bytes[0], bytes[1], bytes[2], bytes[3]
    )
}

/// Opaque conversation id assigned by the assistant endpoint.
///
/// The client never mints one; it only stores what the server returned and
/// echoes it back on later requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for SessionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for SessionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correlation_id_length() {
        let cid = new_correlation_id();
        assert_eq!(cid.len(), 8);
    }

    #[test]
    fn correlation_id_is_hex() {
        let cid = new_correlation_id();
        assert!(cid.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn correlation_id_is_unique() {
        let a = new_correlation_id();
        let b = new_correlation_id();
        assert_ne!(a, b);
    }

    #[test]
    fn session_id_display() {
        let sid = SessionId::from("abc123");
        assert_eq!(sid.to_string(), "abc123");
        assert_eq!(sid.as_str(), "abc123");
    }

    #[test]
    fn session_id_empty() {
        assert!(SessionId::from(String::new()).is_empty());
        assert!(!SessionId::from("x").is_empty());
    }

    #[test]
    fn session_id_serializes_as_plain_string() {
        let sid = SessionId::from("abc123");
        let json = serde_json::to_string(&sid).unwrap();
        assert_eq!(json, "\"abc123\"");

        let parsed: SessionId = serde_json::from_str("\"abc123\"").unwrap();
        assert_eq!(parsed, sid);
    }

    #[test]
    fn session_id_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(SessionId::from("a"));
        set.insert(SessionId::from("a"));
        set.insert(SessionId::from("b"));
        assert_eq!(set.len(), 2);
    }
}
