//! Delivery Zone API module

mod handler;

use axum::{routing::get, routing::put, Router};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/stores/{id}/zones", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{zone_id}", put(handler::update).delete(handler::delete))
}
