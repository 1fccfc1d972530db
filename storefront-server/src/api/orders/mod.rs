//! Order API module

mod handler;

use axum::{routing::get, routing::put, Router};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/stores/{id}/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{order_id}", get(handler::get_by_id))
        .route("/{order_id}/status", put(handler::update_status))
}
