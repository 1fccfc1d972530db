//! Shared types for the Vitrina storefront platform
//!
//! Common types used across crates: data models, the unified error
//! system, the schedule model, and small utilities.

pub mod error;
pub mod models;
pub mod schedule;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

// Error re-exports (for convenient access)
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Schedule re-exports
pub use schedule::{SlotCheck, SlotInvalidReason, UnifiedSchedule};
