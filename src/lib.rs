//! Attendance Rule Engine
//!
//! This crate decides, from a check-in time and a day's shift schedule,
//! whether an employee is on time, late, absent or on leave. It handles
//! grace periods, back-to-back and overlapping shifts, cross-midnight shifts,
//! and auto-checkout of sessions nobody closed.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod rules;
