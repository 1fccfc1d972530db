//! Notification Module
//!
//! Outbound WhatsApp relay and best-effort failure reporting.

pub mod report;
pub mod whatsapp;

pub use report::{FailureReporter, TracingReporter};
pub use whatsapp::{format_order_message, Messenger, NoopMessenger, WebhookMessenger};
