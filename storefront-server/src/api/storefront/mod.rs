//! Public storefront API module
//!
//! Customer-facing, addressed by store slug. No authentication; only
//! active stores resolve.

mod handler;

use axum::{routing::get, routing::post, Router};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/storefront/{slug}", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::catalog))
        .route("/delivery-quote", post(handler::delivery_quote))
        .route("/checkout", post(handler::checkout))
}
