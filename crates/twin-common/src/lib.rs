pub mod errors;
pub mod id;

pub use errors::{ConfigError, TwinError};
pub use id::{new_correlation_id, SessionId};

/// Assistant reply shown when a chat exchange fails for any reason.
pub const DEFAULT_FALLBACK_MESSAGE: &str = "Sorry, I encountered an error. Please try again.";

pub type Result<T> = std::result::Result<T, TwinError>;
