//! Server State
//!
//! Shared application state handed to every handler.

use std::sync::Arc;

use shared::AppResult;

use crate::core::Config;
use crate::db::DbService;
use crate::notify::{FailureReporter, Messenger, NoopMessenger, TracingReporter, WebhookMessenger};

#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub db: DbService,
    /// Outbound order relay (WhatsApp); fire-and-forget
    pub messenger: Arc<dyn Messenger>,
    /// Sink for best-effort failures that must not block checkout
    pub reporter: Arc<dyn FailureReporter>,
}

impl ServerState {
    /// Open the database, run migrations, and wire the messenger
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db = DbService::new(&config.database_path).await?;

        let messenger: Arc<dyn Messenger> = match &config.whatsapp_webhook_url {
            Some(url) => Arc::new(WebhookMessenger::new(url.clone())),
            None => {
                tracing::warn!("WHATSAPP_WEBHOOK_URL not set, outbound messages will be dropped");
                Arc::new(NoopMessenger)
            }
        };

        Ok(Self {
            config: Arc::new(config.clone()),
            db,
            messenger,
            reporter: Arc::new(TracingReporter),
        })
    }

    /// State over an existing pool with a custom messenger, used by tests
    pub fn with_parts(config: Config, db: DbService, messenger: Arc<dyn Messenger>) -> Self {
        Self {
            config: Arc::new(config),
            db,
            messenger,
            reporter: Arc::new(TracingReporter),
        }
    }
}
