//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Digital Twin client configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# TWIN_API_URL and TWIN_API_KEY in the environment take precedence.

[endpoint]
base_url = "http://localhost:8000"
# api_key = ""                # sent as X-API-Key when set
# connect_timeout_secs = 10   # 1-60
# request_timeout_secs = 120  # 1-600

[chat]
# fallback_message = "Sorry, I encountered an error. Please try again."
# max_input_chars = 2000      # 1-100000
"##
    .to_string()
}
