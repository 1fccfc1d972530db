//! Failure reporting for best-effort side effects
//!
//! Order persistence and the WhatsApp relay are independent, unordered
//! side effects; when one fails checkout still proceeds and the failure
//! lands here instead of in the response.

use shared::AppError;

pub trait FailureReporter: Send + Sync {
    fn report(&self, context: &str, error: &AppError);
}

/// Logs failures through tracing at error level
pub struct TracingReporter;

impl FailureReporter for TracingReporter {
    fn report(&self, context: &str, error: &AppError) {
        tracing::error!(
            code = %error.code,
            context = context,
            "best-effort operation failed: {}",
            error.message
        );
    }
}
