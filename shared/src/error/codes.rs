//! Unified error codes for the Vitrina platform
//!
//! This module defines all error codes used across the server and frontend.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 3xxx: Store / configuration errors
//! - 4xxx: Order errors
//! - 5xxx: Payment errors
//! - 6xxx: Catalog errors
//! - 7xxx: Delivery and schedule errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 3xxx: Store ====================
    /// Store not found
    StoreNotFound = 3001,
    /// Store is inactive
    StoreInactive = 3002,
    /// Store slug already exists
    StoreSlugExists = 3003,
    /// No delivery calculation method configured
    DeliveryMethodNotConfigured = 3004,
    /// Zone-based pricing selected but no active zones exist
    DeliveryZonesEmpty = 3005,
    /// Distance-based pricing selected but origin coordinates missing
    OriginCoordinatesMissing = 3006,
    /// Stored schedule failed validation
    ScheduleInvalid = 3007,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order has no line items
    OrderEmpty = 4002,
    /// Invalid order status transition
    InvalidStatusTransition = 4003,

    // ==================== 5xxx: Payment ====================
    /// Cash tendered is below the order total
    CashInsufficient = 5001,
    /// Cash payment without a tendered amount
    CashAmountMissing = 5002,
    /// Invalid payment method
    PaymentInvalidMethod = 5003,

    // ==================== 6xxx: Catalog ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Product is inactive
    ProductInactive = 6002,
    /// Product has invalid price
    ProductInvalidPrice = 6003,
    /// Category not found
    CategoryNotFound = 6101,
    /// Category has products
    CategoryHasProducts = 6102,
    /// Category name already exists
    CategoryNameExists = 6103,
    /// Product variant not found
    VariantNotFound = 6201,
    /// Product option not found
    OptionNotFound = 6301,

    // ==================== 7xxx: Delivery ====================
    /// Delivery is disabled for this store
    DeliveryDisabled = 7001,
    /// Delivery zone not found
    DeliveryZoneNotFound = 7002,
    /// Delivery zone is inactive
    DeliveryZoneInactive = 7003,
    /// Zone-based delivery without a selected zone
    ZoneNotSelected = 7004,
    /// Destination is beyond the maximum delivery distance
    DeliveryOutOfRange = 7005,
    /// Device location denied or unavailable
    GeolocationUnavailable = 7006,
    /// Delivery requested without destination coordinates or address
    DestinationMissing = 7007,

    // ==================== 71xx: Schedule ====================
    /// Store is closed at the requested instant
    StoreClosed = 7101,
    /// Scheduled orders are disabled
    SchedulingDisabled = 7102,
    /// Requested slot is below the minimum advance window
    SlotTooSoon = 7103,
    /// Requested slot is beyond the maximum advance window
    SlotTooFarAhead = 7104,
    /// Requested slot falls outside operating hours
    SlotOutsideHours = 7105,
    /// Time string is not valid HH:MM
    InvalidTimeFormat = 7106,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Network error
    NetworkError = 9003,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
    /// Outbound message relay failed
    MessageSendFailed = 9101,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Store
            ErrorCode::StoreNotFound => "Store not found",
            ErrorCode::StoreInactive => "Store is inactive",
            ErrorCode::StoreSlugExists => "Store slug already exists",
            ErrorCode::DeliveryMethodNotConfigured => {
                "No delivery calculation method configured"
            }
            ErrorCode::DeliveryZonesEmpty => "Store has no active delivery zones",
            ErrorCode::OriginCoordinatesMissing => "Store origin coordinates missing",
            ErrorCode::ScheduleInvalid => "Stored schedule failed validation",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderEmpty => "Order has no line items",
            ErrorCode::InvalidStatusTransition => "Invalid order status transition",

            // Payment
            ErrorCode::CashInsufficient => "Cash tendered is below the order total",
            ErrorCode::CashAmountMissing => "Cash payment requires a tendered amount",
            ErrorCode::PaymentInvalidMethod => "Invalid payment method",

            // Catalog
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ProductInactive => "Product is inactive",
            ErrorCode::ProductInvalidPrice => "Product has invalid price",
            ErrorCode::CategoryNotFound => "Category not found",
            ErrorCode::CategoryHasProducts => "Category has associated products",
            ErrorCode::CategoryNameExists => "Category name already exists",
            ErrorCode::VariantNotFound => "Product variant not found",
            ErrorCode::OptionNotFound => "Product option not found",

            // Delivery
            ErrorCode::DeliveryDisabled => "Delivery is disabled for this store",
            ErrorCode::DeliveryZoneNotFound => "Delivery zone not found",
            ErrorCode::DeliveryZoneInactive => "Delivery zone is inactive",
            ErrorCode::ZoneNotSelected => "No delivery zone selected",
            ErrorCode::DeliveryOutOfRange => "Destination is beyond the delivery range",
            ErrorCode::GeolocationUnavailable => "Location denied or unavailable",
            ErrorCode::DestinationMissing => "Delivery destination missing",

            // Schedule
            ErrorCode::StoreClosed => "Store is closed at the requested time",
            ErrorCode::SchedulingDisabled => "Scheduled orders are disabled",
            ErrorCode::SlotTooSoon => "Requested time is too soon",
            ErrorCode::SlotTooFarAhead => "Requested time is too far ahead",
            ErrorCode::SlotOutsideHours => "Requested time is outside operating hours",
            ErrorCode::InvalidTimeFormat => "Time must be in HH:MM format",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::MessageSendFailed => "Outbound message relay failed",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Store
            3001 => Ok(ErrorCode::StoreNotFound),
            3002 => Ok(ErrorCode::StoreInactive),
            3003 => Ok(ErrorCode::StoreSlugExists),
            3004 => Ok(ErrorCode::DeliveryMethodNotConfigured),
            3005 => Ok(ErrorCode::DeliveryZonesEmpty),
            3006 => Ok(ErrorCode::OriginCoordinatesMissing),
            3007 => Ok(ErrorCode::ScheduleInvalid),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::OrderEmpty),
            4003 => Ok(ErrorCode::InvalidStatusTransition),

            // Payment
            5001 => Ok(ErrorCode::CashInsufficient),
            5002 => Ok(ErrorCode::CashAmountMissing),
            5003 => Ok(ErrorCode::PaymentInvalidMethod),

            // Catalog
            6001 => Ok(ErrorCode::ProductNotFound),
            6002 => Ok(ErrorCode::ProductInactive),
            6003 => Ok(ErrorCode::ProductInvalidPrice),
            6101 => Ok(ErrorCode::CategoryNotFound),
            6102 => Ok(ErrorCode::CategoryHasProducts),
            6103 => Ok(ErrorCode::CategoryNameExists),
            6201 => Ok(ErrorCode::VariantNotFound),
            6301 => Ok(ErrorCode::OptionNotFound),

            // Delivery
            7001 => Ok(ErrorCode::DeliveryDisabled),
            7002 => Ok(ErrorCode::DeliveryZoneNotFound),
            7003 => Ok(ErrorCode::DeliveryZoneInactive),
            7004 => Ok(ErrorCode::ZoneNotSelected),
            7005 => Ok(ErrorCode::DeliveryOutOfRange),
            7006 => Ok(ErrorCode::GeolocationUnavailable),
            7007 => Ok(ErrorCode::DestinationMissing),

            // Schedule
            7101 => Ok(ErrorCode::StoreClosed),
            7102 => Ok(ErrorCode::SchedulingDisabled),
            7103 => Ok(ErrorCode::SlotTooSoon),
            7104 => Ok(ErrorCode::SlotTooFarAhead),
            7105 => Ok(ErrorCode::SlotOutsideHours),
            7106 => Ok(ErrorCode::InvalidTimeFormat),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),
            9101 => Ok(ErrorCode::MessageSendFailed),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
