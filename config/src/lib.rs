//! # Config Crate
//!
//! Centralized configuration constants for the curve-to-polyline pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_POINT_COUNT, MIN_POINT_COUNT};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // Use the sampling default when no point count is requested
//! let requested: Option<u32> = None;
//! let point_count = requested.unwrap_or(DEFAULT_POINT_COUNT);
//! assert!(point_count >= MIN_POINT_COUNT);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Host-Agnostic**: No editor- or platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
