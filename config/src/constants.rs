//! # Configuration Constants
//!
//! Centralized constants for the curve-to-polyline pipeline. Sampling
//! defaults, range bounds, and precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Sampling**: Default and bounding values for polyline point counts

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance. This value is chosen to balance precision with
/// robustness against floating-point errors.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

// =============================================================================
// SAMPLING CONSTANTS
// =============================================================================

/// Default number of polyline points generated per conversion.
///
/// Used when the caller does not request an explicit point count.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_POINT_COUNT;
///
/// let requested: Option<u32> = None;
/// let point_count = requested.unwrap_or(DEFAULT_POINT_COUNT);
/// assert_eq!(point_count, 12);
/// ```
pub const DEFAULT_POINT_COUNT: u32 = 12;

/// Minimum number of polyline points for a valid conversion.
///
/// A polyline needs at least two points to carry a single edge. Requests
/// below this bound are rejected as invalid; this is a hard limit.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_POINT_COUNT;
///
/// let requested = 1u32;
/// assert!(requested < MIN_POINT_COUNT); // would be rejected
/// ```
pub const MIN_POINT_COUNT: u32 = 2;

/// Soft upper bound on the polyline point count.
///
/// Values above this bound are still accepted but may be slow to
/// tessellate and heavy to render; the bound exists for UI sliders and
/// sanity checks, not for enforcement.
///
/// # Example
///
/// ```rust
/// use config::constants::SOFT_MAX_POINT_COUNT;
///
/// let requested = 5000u32;
/// let slider_position = requested.min(SOFT_MAX_POINT_COUNT);
/// assert_eq!(slider_position, SOFT_MAX_POINT_COUNT);
/// ```
pub const SOFT_MAX_POINT_COUNT: u32 = 1000;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
