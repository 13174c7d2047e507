//! Configuration loading and management for the Attendance Rule Engine.
//!
//! This module provides functionality to load attendance thresholds and
//! cutoff times from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/attendance.yaml").unwrap();
//! println!("Late after {} minutes", loader.config().late_threshold_minutes);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::AttendanceConfig;
