//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness check
//! - [`stores`] - store management (owner side)
//! - [`schedule`] - per-store schedule read/replace
//! - [`zones`] - delivery zone management
//! - [`categories`] - category management
//! - [`products`] - product management
//! - [`orders`] - order listing and status updates
//! - [`storefront`] - public catalog, delivery quotes, checkout

pub mod categories;
pub mod health;
pub mod orders;
pub mod products;
pub mod schedule;
pub mod storefront;
pub mod stores;
pub mod zones;

use axum::Router;

use crate::core::ServerState;

pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(stores::router())
        .merge(schedule::router())
        .merge(zones::router())
        .merge(categories::router())
        .merge(products::router())
        .merge(orders::router())
        .merge(storefront::router())
        .with_state(state)
}
