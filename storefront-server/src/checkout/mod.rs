//! Checkout Module
//!
//! Cart aggregation, decimal money arithmetic, and order submission.

pub mod cart;
pub mod money;
pub mod service;

pub use cart::CartLineInput;
pub use service::{submit, CheckoutOutcome, CheckoutRequest};
