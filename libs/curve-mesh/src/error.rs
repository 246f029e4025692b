//! # Mesh Errors
//!
//! Error types for the curve-to-polyline conversion.
//!
//! Unsupported spline kinds and degenerate splines are deliberately NOT
//! errors: they yield empty per-spline output so that a curve object
//! mixing spline types still converts its bezier splines.

use config::constants::MIN_POINT_COUNT;
use thiserror::Error;

/// Errors that can occur during polyline conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// The requested point count is below the hard minimum.
    #[error("Point count must be at least {min}, got {requested}")]
    InvalidPointCount { requested: u32, min: u32 },

    /// The curve source had no active curve object to convert.
    #[error("No active curve object")]
    NoActiveCurve,
}

impl MeshError {
    /// Creates an invalid point count error against the configured minimum.
    pub fn invalid_point_count(requested: u32) -> Self {
        Self::InvalidPointCount {
            requested,
            min: MIN_POINT_COUNT,
        }
    }
}
