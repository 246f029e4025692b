//! # Curve Types
//!
//! The data model consumed by the curve-to-polyline pipeline: control
//! points, splines, curves, and the object-level snapshot handed over by
//! a curve source.
//!
//! All values are read-only snapshots taken once at the start of a
//! conversion request. Nothing here is mutated in place or persists
//! across requests.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A single bezier control point.
///
/// Each point carries its position plus two handles controlling the
/// tangents of the adjacent segments: `handle_in` influences the segment
/// arriving at the point, `handle_out` the segment leaving it. All three
/// vectors are expressed in the same coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    /// Position of the point on the curve.
    pub position: DVec3,
    /// Handle for the incoming segment.
    pub handle_in: DVec3,
    /// Handle for the outgoing segment.
    pub handle_out: DVec3,
}

impl ControlPoint {
    /// Creates a control point with explicit handles.
    pub fn new(position: DVec3, handle_in: DVec3, handle_out: DVec3) -> Self {
        Self {
            position,
            handle_in,
            handle_out,
        }
    }

    /// Creates a control point whose handles coincide with its position.
    ///
    /// A segment between two such points degenerates to a straight line.
    pub fn sharp(position: DVec3) -> Self {
        Self {
            position,
            handle_in: position,
            handle_out: position,
        }
    }
}

/// The interpolation type of a spline.
///
/// Host editors mix spline types freely inside one curve object. Only
/// `Bezier` splines are tessellated; the other kinds pass through the
/// pipeline untouched (they contribute no geometry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplineKind {
    /// Cubic bezier interpolation between control points.
    Bezier,
    /// Straight segments between points, no interpolation.
    Poly,
    /// NURBS interpolation. Not evaluated by this pipeline.
    Nurbs,
}

/// One spline of a curve object.
///
/// A spline is an ordered run of control points, optionally cyclic
/// (the last point connects back to the first, forming a closed loop).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spline {
    /// Ordered control points.
    pub points: Vec<ControlPoint>,
    /// Whether the last point connects back to the first.
    pub cyclic: bool,
    /// Interpolation type.
    pub kind: SplineKind,
}

impl Spline {
    /// Creates an open bezier spline.
    pub fn bezier(points: Vec<ControlPoint>) -> Self {
        Self {
            points,
            cyclic: false,
            kind: SplineKind::Bezier,
        }
    }

    /// Creates a cyclic bezier spline.
    pub fn bezier_cyclic(points: Vec<ControlPoint>) -> Self {
        Self {
            points,
            cyclic: true,
            kind: SplineKind::Bezier,
        }
    }

    /// Returns the number of cubic segments this spline is made of.
    ///
    /// A cyclic spline with `N` points has `N` segments (one wraps back
    /// to the start); an open spline has `N - 1`. Splines with too few
    /// points yield zero segments.
    pub fn segment_count(&self) -> usize {
        if self.cyclic {
            self.points.len()
        } else {
            self.points.len().saturating_sub(1)
        }
    }
}

/// A curve: an ordered collection of independent splines.
///
/// Spline order is significant and preserved in any derived output.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Curve {
    /// Splines in input order.
    pub splines: Vec<Spline>,
}

impl Curve {
    /// Creates a curve from its splines.
    pub fn new(splines: Vec<Spline>) -> Self {
        Self { splines }
    }

    /// Creates a curve containing a single spline.
    pub fn single(spline: Spline) -> Self {
        Self {
            splines: vec![spline],
        }
    }
}

/// The placement of an object in the scene.
///
/// Rotation is stored as Euler angles in radians, matching the host
/// representation it is copied from. The pipeline never interprets the
/// transform; it is passed through verbatim to the produced mesh object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform3 {
    /// Object location.
    pub location: DVec3,
    /// Euler rotation in radians.
    pub rotation: DVec3,
    /// Per-axis scale.
    pub scale: DVec3,
}

impl Default for Transform3 {
    fn default() -> Self {
        Self {
            location: DVec3::ZERO,
            rotation: DVec3::ZERO,
            scale: DVec3::ONE,
        }
    }
}

/// A snapshot of the active curve object handed over by a curve source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveObject {
    /// Object name; seeds the name of the produced polyline object.
    pub name: String,
    /// Object transform, copied verbatim to the produced object.
    pub transform: Transform3,
    /// The curve data itself.
    pub curve: Curve,
}
