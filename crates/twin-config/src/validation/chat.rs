//! Validation for the `[chat]` section.

use crate::schema::TwinConfig;

use super::helpers::{validate_not_blank, validate_range};

pub(crate) fn validate_chat(errors: &mut Vec<String>, config: &TwinConfig) {
    validate_not_blank(errors, "chat.fallback_message", &config.chat.fallback_message);
    validate_range(
        errors,
        "chat.max_input_chars",
        config.chat.max_input_chars,
        1,
        100_000,
    );
}
