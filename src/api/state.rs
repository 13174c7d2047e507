//! Application state for the Attendance Rule Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::engine::AttendanceEngine;

/// Shared application state.
///
/// Holds the engine, and with it the read-only configuration, shared across
/// all request handlers.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<AttendanceEngine>,
}

impl AppState {
    /// Creates a new application state around the given engine.
    pub fn new(engine: AttendanceEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Returns a reference to the engine.
    pub fn engine(&self) -> &AttendanceEngine {
        &self.engine
    }
}
