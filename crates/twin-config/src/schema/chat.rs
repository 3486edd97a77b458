use serde::{Deserialize, Serialize};

pub use twin_common::DEFAULT_FALLBACK_MESSAGE;

/// Chat behaviour settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Text of the synthetic assistant message appended on failure.
    pub fallback_message: String,
    /// Longest input (in characters) the front end will submit.
    pub max_input_chars: u32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            fallback_message: DEFAULT_FALLBACK_MESSAGE.into(),
            max_input_chars: 2000,
        }
    }
}
