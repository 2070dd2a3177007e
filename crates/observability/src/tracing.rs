//! Tracing/logging initialization.
//!
//! Configured through the environment:
//! - `RUST_LOG`: `EnvFilter` directives (default `info`).
//! - `LOG_FORMAT`: `json` (default) or `pretty`/`text`.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Output format of the fmt subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    /// Case-insensitive; anything unrecognised falls back to JSON.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// Used when `RUST_LOG` is unset or invalid.
    pub default_filter: String,
    pub format: LogFormat,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            default_filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::Json,
        }
    }
}

impl TracingConfig {
    pub fn from_env() -> Self {
        let format = std::env::var("LOG_FORMAT")
            .map(|v| LogFormat::parse(&v))
            .unwrap_or_default();

        Self {
            format,
            ..Self::default()
        }
    }
}

/// Initialize tracing/logging for the process using environment configuration.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with(TracingConfig::from_env());
}

/// Initialize tracing/logging with an explicit configuration.
pub fn init_with(config: TracingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    // A second initialization loses the race for the global default; ignore it.
    let _ = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_parsing() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse(" Pretty "), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("TEXT"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("yaml"), LogFormat::Json);
    }

    #[test]
    fn default_config_is_json_at_info() {
        let config = TracingConfig::default();
        assert_eq!(config.default_filter, "info");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn init_is_idempotent() {
        init_with(TracingConfig::default());
        init_with(TracingConfig {
            default_filter: "debug".to_string(),
            format: LogFormat::Pretty,
        });
    }
}
