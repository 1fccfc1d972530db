//! Vitrina Storefront Server
//!
//! Multi-tenant WhatsApp storefront backend. Each store is a tenant
//! addressed by slug; the public storefront reads the catalog, quotes a
//! delivery fee, and submits checkouts that relay to the store owner's
//! WhatsApp number.
//!
//! # Module structure
//!
//! ```text
//! storefront-server/src/
//! ├── core/          # config, state, server
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # SQLite pool and repositories
//! ├── delivery/      # fee strategies and resolver
//! ├── checkout/      # cart aggregation, money, submission
//! ├── notify/        # WhatsApp relay, failure reporting
//! └── utils/         # logging
//! ```

pub mod api;
pub mod checkout;
pub mod core;
pub mod db;
pub mod delivery;
pub mod notify;
pub mod utils;

pub use crate::core::{Config, Server, ServerState};
pub use db::DbService;
pub use delivery::DeliveryQuote;

// Re-export unified error types from shared
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
 _    ___ __       _
| |  / (_) /______(_)___  ____ _
| | / / / __/ ___/ / __ \/ __ `/
| |/ / / /_/ /  / / / / / /_/ /
|___/_/\__/_/  /_/_/ /_/\__,_/

 Storefront Server
"#
    );
}

/// Load `.env` and initialize logging
pub fn setup_environment() {
    let _ = dotenv::dotenv();
    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}
