//! Response types for the Attendance Rule Engine API.
//!
//! This module defines the success bodies that are not plain domain types,
//! the error response structure, and the mapping from [`EngineError`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::engine::WorkSummary;
use crate::error::EngineError;
use crate::models::{AttendanceEvent, CheckoutRecord};

/// Response body for `POST /check-out`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckOutResponse {
    /// The closed event.
    pub event: AttendanceEvent,
    /// Time worked.
    #[serde(flatten)]
    pub summary: WorkSummary,
}

/// Response body for `POST /auto-checkout`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoCheckoutResponse {
    /// The synthesized checkout, or null when none is due.
    pub checkout: Option<CheckoutRecord>,
    /// The event with the checkout applied, unchanged when none is due.
    pub event: AttendanceEvent,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates an invalid time format error response.
    pub fn invalid_time(message: impl Into<String>) -> Self {
        Self::with_details(
            "INVALID_TIME_FORMAT",
            message,
            "Times must be 24-hour HH:MM strings, e.g. \"09:00\"",
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::InvalidTimeFormat { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::invalid_time(message),
            },
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
            EngineError::NoShiftsScheduled { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "NO_SHIFTS_SCHEDULED",
                    message,
                    "A check-in needs at least one shift to be classified against",
                ),
            },
            EngineError::AlreadyCheckedOut { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("ALREADY_CHECKED_OUT", message),
            },
            EngineError::MissingCheckIn { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("MISSING_CHECK_IN", message),
            },
            EngineError::CheckOutBeforeCheckIn { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(message),
            },
        }
    }
}
