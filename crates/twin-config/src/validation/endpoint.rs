//! Validation for the `[endpoint]` section.

use crate::schema::TwinConfig;

use super::helpers::{validate_not_blank, validate_range};

pub(crate) fn validate_endpoint(errors: &mut Vec<String>, config: &TwinConfig) {
    let endpoint = &config.endpoint;

    validate_not_blank(errors, "endpoint.base_url", &endpoint.base_url);
    let url = endpoint.base_url.trim();
    if !url.is_empty() && !(url.starts_with("http://") || url.starts_with("https://")) {
        errors.push(format!(
            "endpoint.base_url = {url:?} must start with http:// or https://"
        ));
    }

    if let Some(key) = &endpoint.api_key {
        if key.chars().any(|c| c.is_control()) {
            errors.push("endpoint.api_key contains control characters".into());
        }
    }

    validate_range(
        errors,
        "endpoint.connect_timeout_secs",
        endpoint.connect_timeout_secs,
        1,
        60,
    );
    validate_range(
        errors,
        "endpoint.request_timeout_secs",
        endpoint.request_timeout_secs,
        1,
        600,
    );
}
