mod cli;
mod commands;
mod render;
mod repl;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;
use twin_chat::{BackendConfig, ChatSession, HttpBackend};
use twin_config::{EndpointConfig, TwinConfig};

use cli::{Args, Command};

const DEFAULT_LOG_DIRECTIVE: &str = "twin=info";

/// Filter directives for the subscriber.
///
/// `--log-level` is appended after `RUST_LOG`, so it wins for any target
/// both name. The default applies only when neither is set.
fn log_filters(cli: Option<&str>, rust_log: Option<&str>) -> String {
    let rust_log = rust_log.map(str::trim).filter(|s| !s.is_empty());
    match (rust_log, cli) {
        (Some(env), Some(cli)) => format!("{env},{cli}"),
        (Some(env), None) => env.to_string(),
        (None, Some(cli)) => cli.to_string(),
        (None, None) => DEFAULT_LOG_DIRECTIVE.to_string(),
    }
}

fn init_logging(cli: Option<&str>) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filters = log_filters(cli, rust_log.as_deref());
    let filter = EnvFilter::try_new(&filters).unwrap_or_else(|e| {
        eprintln!("Invalid log filter {filters:?} ({e}), using {DEFAULT_LOG_DIRECTIVE}");
        EnvFilter::new(DEFAULT_LOG_DIRECTIVE)
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn backend_config(endpoint: &EndpointConfig) -> BackendConfig {
    let config = BackendConfig::new(endpoint.base_url.trim())
        .with_connect_timeout(Duration::from_secs(u64::from(endpoint.connect_timeout_secs)))
        .with_timeout(Duration::from_secs(u64::from(endpoint.request_timeout_secs)));
    match endpoint.api_key {
        Some(ref key) => config.with_api_key(key.clone()),
        None => config,
    }
}

fn load(args: &Args) -> twin_common::Result<TwinConfig> {
    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let mut config = twin_config::load_config(args.config.as_deref())?;
    if let Some(ref url) = args.api_url {
        config.endpoint.base_url = url.clone();
    }
    Ok(config)
}

async fn run(args: Args) -> twin_common::Result<ExitCode> {
    let config = load(&args)?;
    tracing::debug!(endpoint = ?config.endpoint, "Config loaded");

    let backend = Arc::new(
        HttpBackend::new(backend_config(&config.endpoint)).map_err(commands::chat_error)?,
    );
    let session = Arc::new(
        ChatSession::new(backend.clone()).with_fallback_message(config.chat.fallback_message.clone()),
    );
    let max_input_chars = usize::try_from(config.chat.max_input_chars).unwrap_or(usize::MAX);

    match args.command.unwrap_or_default() {
        Command::Chat => repl::run(session, backend, max_input_chars).await,
        Command::Ask { text } => Ok(commands::ask(&session, &text.join(" "), max_input_chars).await),
        Command::Health => Ok(commands::health(&backend).await),
        Command::History { session_id } => {
            commands::history(&backend, &session_id.into()).await
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Variables already in the environment win over .env entries.
    let dotenv = dotenvy::dotenv();

    let args = cli::parse();
    init_logging(args.log_level.as_deref());

    tracing::info!("twin v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Ok(path) = dotenv {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("twin: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_config_carries_endpoint_settings() {
        let endpoint = EndpointConfig {
            base_url: " https://twin.example.com/api ".into(),
            api_key: Some("k".into()),
            connect_timeout_secs: 3,
            request_timeout_secs: 45,
        };
        let config = backend_config(&endpoint);
        assert_eq!(config.base_url, "https://twin.example.com/api");
        assert_eq!(config.api_key.as_deref(), Some("k"));
        assert_eq!(config.connect_timeout, Duration::from_secs(3));
        assert_eq!(config.timeout, Duration::from_secs(45));
    }

    #[test]
    fn default_filter_only_when_nothing_is_set() {
        assert_eq!(log_filters(None, None), "twin=info");
        assert_eq!(log_filters(None, Some("  ")), "twin=info");
    }

    #[test]
    fn rust_log_is_not_overridden_by_default() {
        assert_eq!(log_filters(None, Some("twin=debug")), "twin=debug");
    }

    #[test]
    fn cli_level_comes_last_so_it_wins() {
        assert_eq!(log_filters(Some("twin=trace"), None), "twin=trace");
        assert_eq!(
            log_filters(Some("twin=warn"), Some("twin=debug,reqwest=info")),
            "twin=debug,reqwest=info,twin=warn"
        );
    }

    #[test]
    fn backend_config_without_key() {
        let config = backend_config(&EndpointConfig::default());
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.api_key, None);
    }
}
