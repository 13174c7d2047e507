//! HTTP API module for the Attendance Rule Engine.
//!
//! This module exposes the engine's check-in, check-out and auto-checkout
//! flows as JSON endpoints for the surrounding application.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AutoCheckoutRequest, CheckInRequest, CheckOutRequest};
pub use response::{ApiError, AutoCheckoutResponse, CheckOutResponse};
pub use state::AppState;
