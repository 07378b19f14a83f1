use std::env;

/// How conversion results are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line of words per argument, errors on stderr
    #[default]
    Plain,
    /// One JSON object per argument on stdout
    Json,
}

/// What each command-line argument is treated as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Each argument is a single number
    #[default]
    Number,
    /// Each argument is free text whose embedded numbers get spelled out
    Text,
}

/// Runtime settings for the command-line wrapper
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub output: OutputFormat,
    pub mode: RunMode,
}

impl Settings {
    /// Load settings from environment variables
    ///
    /// - `NUMBER_WORDS_OUTPUT`: `plain` (default) or `json`
    /// - `NUMBER_WORDS_MODE`: `number` (default) or `text`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup
    ///
    /// Unknown values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(val) = lookup("NUMBER_WORDS_OUTPUT") {
            settings.output = match val.trim().to_lowercase().as_str() {
                "json" => OutputFormat::Json,
                _ => OutputFormat::Plain,
            };
        }

        if let Some(val) = lookup("NUMBER_WORDS_MODE") {
            settings.mode = match val.trim().to_lowercase().as_str() {
                "text" => RunMode::Text,
                _ => RunMode::Number,
            };
        }

        settings
    }
}
