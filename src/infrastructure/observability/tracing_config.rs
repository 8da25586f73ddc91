use crate::presentation::config::LoggingSettings;

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    /// Fallback filter directives when RUST_LOG is unset.
    pub directives: String,
}

impl TracingConfig {
    pub fn from_settings(environment: impl Into<String>, logging: &LoggingSettings) -> Self {
        Self {
            environment: environment.into(),
            json_format: logging.enable_json,
            directives: logging.level.clone(),
        }
    }
}
