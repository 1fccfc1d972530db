//! Delivery fee computation
//!
//! Three interchangeable strategies behind one resolver:
//!
//! - `distance`: great-circle distance from the store origin, per-km rate
//! - `zone`: customer-selected named zone, flat price with an optional
//!   free-delivery threshold
//! - `manual`: no numeric fee at checkout; agreed later over WhatsApp
//!
//! The resolver reads the store's configured method and dispatches; callers
//! only ever see a [`DeliveryQuote`].

pub mod distance;
pub mod manual;
pub mod resolver;
pub mod zone;

pub use resolver::{resolve_delivery_fee, DeliveryQuote, DeliveryRequest};
