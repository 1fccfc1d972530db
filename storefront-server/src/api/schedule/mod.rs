//! Schedule API module

mod handler;

use axum::{routing::get, Router};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/api/stores/{id}/schedule",
        get(handler::get_schedule).put(handler::replace_schedule),
    )
}
