//! Configuration schema types for the twin client.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults that talk to a local backend.

mod chat;
mod endpoint;

pub use chat::*;
pub use endpoint::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TwinConfig {
    pub endpoint: EndpointConfig,
    pub chat: ChatConfig,
}
