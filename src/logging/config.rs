use std::env;

/// Default filter: only warnings from this crate
pub const DEFAULT_FILTER: &str = "number_words=warn";

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// `EnvFilter` directives (default: "number_words=warn")
    pub filter: String,

    /// Log format: "compact", "pretty" or "json" (default: "compact")
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::Compact,
        }
    }
}

impl LogConfig {
    /// Load logging configuration from environment variables
    ///
    /// - `RUST_LOG`: filter directives
    /// - `NUMBER_WORDS_LOG_FORMAT`: `compact`, `pretty` or `json`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load logging configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(filter) = lookup("RUST_LOG") {
            if !filter.trim().is_empty() {
                config.filter = filter;
            }
        }

        if let Some(format_str) = lookup("NUMBER_WORDS_LOG_FORMAT") {
            config.format = match format_str.to_lowercase().as_str() {
                "json" => LogFormat::Json,
                "pretty" => LogFormat::Pretty,
                _ => LogFormat::Compact,
            };
        }

        config
    }
}
