use serde::Deserialize;

/// ctxprobe CLI configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Log level filter for stderr diagnostics
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            log_level: std::env::var("CTXPROBE_LOG").unwrap_or(defaults.log_level),
        }
    }
}
