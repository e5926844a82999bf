/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    /// Fallback filter directive when `RUST_LOG` is not set.
    pub default_directive: String,
}

impl TracingConfig {
    pub fn with_level(mut self, level: &str) -> Self {
        if !level.trim().is_empty() {
            self.default_directive = format!("{},callsight=debug,tower_http=debug", level.trim());
        }
        self
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            default_directive: "info,callsight=debug,tower_http=debug".to_string(),
        }
    }
}
