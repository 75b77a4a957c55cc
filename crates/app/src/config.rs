//! Application configuration loaded from environment variables.

use event_dispatcher::FailurePolicy;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Some(LogFormat::Pretty),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

/// Runtime configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
/// - `DISPATCH_POLICY`: `fail-fast` or `continue` (default: `fail-fast`)
/// - `LOG_FORMAT`: `pretty` or `json` (default: `pretty`)
///
/// Unrecognized values fall back to the default.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub dispatch_policy: FailurePolicy,
    pub log_format: LogFormat,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
            dispatch_policy: lookup("DISPATCH_POLICY")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.dispatch_policy),
            log_format: lookup("LOG_FORMAT")
                .and_then(|f| LogFormat::parse(&f))
                .unwrap_or(defaults.log_format),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            dispatch_policy: FailurePolicy::FailFast,
            log_format: LogFormat::Pretty,
        }
    }
}
