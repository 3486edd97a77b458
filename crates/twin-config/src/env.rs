//! Environment variable overrides applied on top of the file config.

use tracing::debug;

use crate::schema::TwinConfig;

/// Overrides `endpoint.base_url`.
pub const ENV_API_URL: &str = "TWIN_API_URL";
/// Overrides `endpoint.api_key`. An empty value clears the key.
pub const ENV_API_KEY: &str = "TWIN_API_KEY";

/// Apply overrides using `lookup` to resolve variable names.
pub fn apply_overrides_from(config: &mut TwinConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(url) = lookup(ENV_API_URL) {
        let url = url.trim();
        if !url.is_empty() {
            debug!("{ENV_API_URL} overrides endpoint.base_url");
            config.endpoint.base_url = url.to_string();
        }
    }

    if let Some(key) = lookup(ENV_API_KEY) {
        debug!("{ENV_API_KEY} overrides endpoint.api_key");
        let key = key.trim();
        config.endpoint.api_key = (!key.is_empty()).then(|| key.to_string());
    }
}
