/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 3000 | HTTP API port |
/// | DATABASE_PATH | ./vitrina.db | SQLite database file |
/// | WHATSAPP_WEBHOOK_URL | (unset) | outbound message relay endpoint |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | REQUEST_TIMEOUT_MS | 30000 | per-request timeout |
///
/// # Example
///
/// ```ignore
/// DATABASE_PATH=/data/vitrina.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// SQLite database file path
    pub database_path: String,
    /// Webhook endpoint that forwards order text to WhatsApp; when unset
    /// outbound messages are logged and dropped
    pub whatsapp_webhook_url: Option<String>,
    /// development | staging | production
    pub environment: String,
    /// Per-request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "./vitrina.db".into()),
            whatsapp_webhook_url: std::env::var("WHATSAPP_WEBHOOK_URL").ok(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
        }
    }

    /// Override the database path and port, used by tests
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_path_and_port() {
        let config = Config::with_overrides(":memory:", 0);
        assert_eq!(config.database_path, ":memory:");
        assert_eq!(config.http_port, 0);
    }
}
