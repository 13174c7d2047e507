//! HTTP request handlers for the Attendance Rule Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Local;
use tracing::{info, warn};
use uuid::Uuid;

use super::request::{AutoCheckoutRequest, CheckInRequest, CheckOutRequest};
use super::response::{ApiError, ApiErrorResponse, AutoCheckoutResponse, CheckOutResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/check-in", post(check_in_handler))
        .route("/check-out", post(check_out_handler))
        .route("/auto-checkout", post(auto_checkout_handler))
        .with_state(state)
}

/// Handler for POST /check-in.
///
/// Classifies the check-in and returns the new attendance event together
/// with the day's shift coverage.
async fn check_in_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckInRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing check-in request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match state.engine().check_in(
        request.date,
        request.check_in_time,
        request.has_approved_leave,
        &request.shifts,
    ) {
        Ok(outcome) => {
            info!(
                correlation_id = %correlation_id,
                date = %request.date,
                status = %outcome.decision.status,
                late_minutes = ?outcome.decision.late_minutes,
                "Check-in classified"
            );
            json_response(StatusCode::OK, outcome)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /check-out.
async fn check_out_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckOutRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing check-out request");

    let CheckOutRequest {
        mut event,
        check_out_time,
        check_out_date,
    } = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let result = state
        .engine()
        .check_out(&mut event, check_out_date, check_out_time);
    match result {
        Ok(summary) => json_response(StatusCode::OK, CheckOutResponse { event, summary }),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /auto-checkout.
///
/// Reads the server clock once when the request omits `now`, so the
/// decision is made against a single snapshot.
async fn auto_checkout_handler(
    State(state): State<AppState>,
    payload: Result<Json<AutoCheckoutRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing auto-checkout request");

    let AutoCheckoutRequest {
        mut event,
        shift,
        now,
    } = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };
    let now = now.unwrap_or_else(|| Local::now().naive_local());

    match state.engine().close_if_due(&mut event, &shift, now) {
        Ok(checkout) => {
            info!(
                correlation_id = %correlation_id,
                now = %now,
                closed = checkout.is_some(),
                "Auto-checkout evaluated"
            );
            json_response(StatusCode::OK, AutoCheckoutResponse { checkout, event })
        }
        Err(err) => error_response(correlation_id, err),
    }
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, err: crate::error::EngineError) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    ApiErrorResponse::from(err).into_response()
}

/// Maps a JSON extraction failure to an error body.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("Invalid time") {
                ApiError::invalid_time(body_text)
            } else if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}
