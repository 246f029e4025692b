//! # Curve to Polyline Conversion
//!
//! Assembles the per-spline tessellations of a curve into one merged
//! polyline mesh.

use crate::error::MeshError;
use crate::mesh::PolylineMesh;
use crate::tessellate::tessellate_spline;
use config::constants::MIN_POINT_COUNT;
use curve_types::Curve;

/// Converts a curve to a single polyline mesh.
///
/// Each spline is tessellated with the same `point_count` and merged in
/// input order; edge indices of later splines are shifted by the vertex
/// count accumulated so far. Splines that produce no geometry (non-bezier
/// kinds, too few points) contribute nothing and do not interrupt the
/// assembly of the remaining splines.
///
/// A curve with no splines, or whose splines are all skipped, yields an
/// empty mesh; whether that is meaningful is up to the caller.
///
/// # Arguments
///
/// * `curve` - The curve to convert
/// * `point_count` - Number of polyline points per spline (at least 2)
///
/// # Returns
///
/// The merged polyline mesh, or [`MeshError::InvalidPointCount`] when
/// `point_count` is below the minimum.
///
/// # Example
///
/// ```rust
/// use curve_mesh::curve_to_polyline;
/// use curve_types::{ControlPoint, Curve, Spline};
/// use glam::DVec3;
///
/// let spline = Spline::bezier(vec![
///     ControlPoint::sharp(DVec3::ZERO),
///     ControlPoint::sharp(DVec3::X),
/// ]);
/// let mesh = curve_to_polyline(&Curve::single(spline), 12).unwrap();
/// assert_eq!(mesh.vertex_count(), 12);
/// assert_eq!(mesh.edge_count(), 11);
/// ```
pub fn curve_to_polyline(curve: &Curve, point_count: u32) -> Result<PolylineMesh, MeshError> {
    if point_count < MIN_POINT_COUNT {
        return Err(MeshError::invalid_point_count(point_count));
    }

    let mut result = PolylineMesh::new();
    for spline in &curve.splines {
        let mesh = tessellate_spline(spline, point_count)?;
        result.merge(&mesh);
    }
    Ok(result)
}
