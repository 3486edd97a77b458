//! Configuration for the Digital Twin chat client.
//!
//! Provides TOML-based configuration with environment overrides and
//! full validation. All config sections use sensible defaults so
//! partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use twin_config::load_config;
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("talking to {}", config.endpoint.base_url);
//! ```

pub mod env;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use env::{apply_overrides_from, ENV_API_KEY, ENV_API_URL};
pub use schema::{ChatConfig, EndpointConfig, TwinConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;
use twin_common::ConfigError;

/// Load, override, and validate the config.
///
/// Reads `path` when given (it must exist), otherwise the platform default
/// file (created with defaults on first run). Environment overrides are
/// applied afterwards and the result must pass validation.
pub fn load_config(path: Option<&Path>) -> Result<TwinConfig, ConfigError> {
    load_config_with(path, |name| std::env::var(name).ok())
}

fn load_config_with(
    path: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<TwinConfig, ConfigError> {
    let mut config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    apply_overrides_from(&mut config, lookup);
    validation::validate(&config)?;
    Ok(config)
}
