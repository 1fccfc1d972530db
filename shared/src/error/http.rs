//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::NotFound
            | Self::StoreNotFound
            | Self::OrderNotFound
            | Self::ProductNotFound
            | Self::CategoryNotFound
            | Self::VariantNotFound
            | Self::OptionNotFound
            | Self::DeliveryZoneNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists
            | Self::StoreSlugExists
            | Self::CategoryNameExists
            | Self::CategoryHasProducts => StatusCode::CONFLICT,

            // 402 Payment Required
            Self::CashInsufficient => StatusCode::PAYMENT_REQUIRED,

            // 422 Unprocessable Entity (store misconfiguration: the customer
            // cannot fix these, checkout is blocked fail-safe)
            Self::DeliveryMethodNotConfigured
            | Self::DeliveryZonesEmpty
            | Self::OriginCoordinatesMissing
            | Self::ScheduleInvalid => StatusCode::UNPROCESSABLE_ENTITY,

            // 503 Service Unavailable (transient errors, client can retry)
            Self::NetworkError | Self::TimeoutError => StatusCode::SERVICE_UNAVAILABLE,

            // 500 Internal Server Error
            Self::InternalError
            | Self::DatabaseError
            | Self::ConfigError
            | Self::MessageSendFailed => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation/precondition errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_status() {
        assert_eq!(ErrorCode::Success.http_status(), StatusCode::OK);
    }

    #[test]
    fn test_not_found_status() {
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::StoreNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ErrorCode::DeliveryZoneNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_conflict_status() {
        assert_eq!(ErrorCode::AlreadyExists.http_status(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorCode::StoreSlugExists.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::CategoryHasProducts.http_status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_payment_required_status() {
        assert_eq!(
            ErrorCode::CashInsufficient.http_status(),
            StatusCode::PAYMENT_REQUIRED
        );
    }

    #[test]
    fn test_misconfiguration_status() {
        assert_eq!(
            ErrorCode::DeliveryMethodNotConfigured.http_status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ErrorCode::DeliveryZonesEmpty.http_status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ErrorCode::OriginCoordinatesMissing.http_status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_internal_error_status() {
        assert_eq!(
            ErrorCode::InternalError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ErrorCode::DatabaseError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_bad_request_status() {
        // Precondition failures surface as 400 with the specific condition
        assert_eq!(
            ErrorCode::ValidationFailed.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ErrorCode::StoreClosed.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::SlotTooSoon.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorCode::DeliveryOutOfRange.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::GeolocationUnavailable.http_status(),
            StatusCode::BAD_REQUEST
        );
    }
}
