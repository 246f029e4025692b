//! # Spline Tessellation
//!
//! Samples one bezier spline into polyline vertices and edges.
//!
//! ## Algorithm
//!
//! 1. Build the edge list up front: a chain `(i, i+1)`, plus one
//!    wrap-around edge for cyclic splines
//! 2. Walk the requested sample count uniformly through segment-index
//!    space, locating the cubic segment and local parameter per sample
//! 3. Evaluate the cubic Bernstein blend of the segment's endpoints and
//!    handles at each sample
//!
//! Sampling is parametric-uniform: equal increments of segment index,
//! not of arc length. Sample density therefore follows segment count
//! rather than true spline length; there is no arc-length
//! reparametrization.

use crate::error::MeshError;
use crate::mesh::PolylineMesh;
use config::constants::MIN_POINT_COUNT;
use curve_types::{Spline, SplineKind};
use glam::DVec3;

/// Evaluates a point on one cubic bezier segment.
///
/// The segment runs from `p0` to `p1`; `h0_out` is the outgoing handle of
/// the start point and `h1_in` the incoming handle of the end point.
/// Computes the cubic Bernstein blend
///
/// ```text
/// (1-t)^3 * p0 + 3t(1-t)^2 * h0_out + 3t^2(1-t) * h1_in + t^3 * p1
/// ```
///
/// At `t = 0` the result is exactly `p0`; at `t = 1` exactly `p1` up to
/// floating rounding. `t` is not range-checked: values outside `[0, 1]`
/// extrapolate the segment rather than erroring.
pub fn bezier_point(p0: DVec3, h0_out: DVec3, h1_in: DVec3, p1: DVec3, t: f64) -> DVec3 {
    let mt = 1.0 - t;
    let c0 = mt * mt * mt;
    let c1 = 3.0 * t * mt * mt;
    let c2 = 3.0 * t * t * mt;
    let c3 = t * t * t;

    p0 * c0 + h0_out * c1 + h1_in * c2 + p1 * c3
}

/// Maps a global sample index to a segment and local parameter.
///
/// For a spline sampled with `point_count` output points, returns the
/// indices of the two control points bounding the cubic segment that
/// sample `sample` falls in, plus the local parameter `t` within it.
///
/// Cyclic splines advance `segments / point_count` per sample and wrap
/// both endpoint indices modulo the point count. Open splines advance
/// `segments / (point_count - 1)` and clamp the segment index to the
/// last segment instead of wrapping, so the final sample evaluates the
/// true endpoint at `t = 1`.
///
/// Callers must ensure `point_count >= 2` and `spline.segment_count() >= 1`.
pub fn locate_segment(spline: &Spline, point_count: u32, sample: u32) -> (usize, usize, f64) {
    let n = spline.points.len();
    let segments = spline.segment_count();

    let step = if spline.cyclic {
        segments as f64 / point_count as f64
    } else {
        segments as f64 / (point_count - 1) as f64
    };

    let progress = step * sample as f64;
    let mut index = progress.floor() as usize;
    let mut t = progress - index as f64;

    if spline.cyclic {
        (index % n, (index + 1) % n, t)
    } else {
        // Clamp instead of wrapping: the last sample lands exactly on the
        // segment boundary and must evaluate the final segment at t = 1,
        // not segment 0 at t = 0.
        if index >= segments {
            index = segments - 1;
            t = progress - index as f64;
        }
        (index, index + 1, t)
    }
}

/// Tessellates one spline into a polyline mesh.
///
/// Produces `point_count` vertices joined by a chain of edges; cyclic
/// splines get one extra edge connecting the tail back to the head.
///
/// Non-bezier splines and splines with no complete segment produce an
/// empty mesh rather than an error, so a curve object mixing spline
/// types still yields output for its bezier splines.
///
/// # Arguments
///
/// * `spline` - The spline to sample
/// * `point_count` - Number of output vertices (at least 2)
///
/// # Returns
///
/// The sampled polyline, or [`MeshError::InvalidPointCount`] when
/// `point_count` is below the minimum.
pub fn tessellate_spline(spline: &Spline, point_count: u32) -> Result<PolylineMesh, MeshError> {
    if point_count < MIN_POINT_COUNT {
        return Err(MeshError::invalid_point_count(point_count));
    }

    if spline.kind != SplineKind::Bezier {
        return Ok(PolylineMesh::new());
    }

    let segments = spline.segment_count();
    if segments < 1 {
        return Ok(PolylineMesh::new());
    }

    let count = point_count as usize;
    let edge_count = if spline.cyclic { count } else { count - 1 };
    let mut mesh = PolylineMesh::with_capacity(count, edge_count);

    // Edges first; they depend only on the sample count.
    for i in 0..count - 1 {
        mesh.add_edge(i as u32, (i + 1) as u32);
    }
    if spline.cyclic {
        mesh.add_edge((count - 1) as u32, 0);
    }

    for i in 0..point_count {
        let (a, b, t) = locate_segment(spline, point_count, i);
        let start = &spline.points[a];
        let end = &spline.points[b];
        mesh.add_vertex(bezier_point(
            start.position,
            start.handle_out,
            end.handle_in,
            end.position,
            t,
        ));
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::EPSILON;
    use curve_types::ControlPoint;

    fn assert_close(a: DVec3, b: DVec3) {
        assert!(
            (a - b).length() < EPSILON,
            "expected {:?} to be close to {:?}",
            a,
            b
        );
    }

    /// Three collinear sharp points along X; two straight segments.
    fn open_spline() -> Spline {
        Spline::bezier(vec![
            ControlPoint::sharp(DVec3::new(0.0, 0.0, 0.0)),
            ControlPoint::sharp(DVec3::new(1.0, 0.0, 0.0)),
            ControlPoint::sharp(DVec3::new(2.0, 0.0, 0.0)),
        ])
    }

    #[test]
    fn test_bezier_point_start() {
        let p0 = DVec3::new(1.0, 2.0, 3.0);
        let p1 = DVec3::new(4.0, 5.0, 6.0);
        let h0 = DVec3::new(0.5, 0.5, 0.5);
        let h1 = DVec3::new(3.5, 3.5, 3.5);
        assert_eq!(bezier_point(p0, h0, h1, p1, 0.0), p0);
    }

    #[test]
    fn test_bezier_point_end() {
        let p0 = DVec3::new(1.0, 2.0, 3.0);
        let p1 = DVec3::new(4.0, 5.0, 6.0);
        let h0 = DVec3::new(0.5, 0.5, 0.5);
        let h1 = DVec3::new(3.5, 3.5, 3.5);
        assert_close(bezier_point(p0, h0, h1, p1, 1.0), p1);
    }

    #[test]
    fn test_bezier_point_midpoint_blend() {
        // All four Bernstein weights at t = 0.5: 1/8, 3/8, 3/8, 1/8
        let p0 = DVec3::ZERO;
        let h0 = DVec3::ZERO;
        let h1 = DVec3::new(1.0, 0.0, 0.0);
        let p1 = DVec3::new(1.0, 0.0, 0.0);
        let mid = bezier_point(p0, h0, h1, p1, 0.5);
        assert_close(mid, DVec3::new(0.5, 0.0, 0.0));
    }

    #[test]
    fn test_locate_segment_open_clamps_last_sample() {
        let spline = Spline::bezier(vec![
            ControlPoint::sharp(DVec3::ZERO),
            ControlPoint::sharp(DVec3::X),
        ]);
        // One segment, three samples: the last lands on progress = 1.0
        let (a, b, t) = locate_segment(&spline, 3, 2);
        assert_eq!((a, b), (0, 1));
        assert!((t - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_locate_segment_cyclic_wraps() {
        let spline = Spline::bezier_cyclic(vec![
            ControlPoint::sharp(DVec3::ZERO),
            ControlPoint::sharp(DVec3::X),
        ]);
        // Two segments, four samples: sample 3 is halfway through the
        // wrap-around segment from point 1 back to point 0.
        let (a, b, t) = locate_segment(&spline, 4, 3);
        assert_eq!((a, b), (1, 0));
        assert!((t - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_tessellate_open_counts() {
        let mesh = tessellate_spline(&open_spline(), 7).unwrap();
        assert_eq!(mesh.vertex_count(), 7);
        assert_eq!(mesh.edge_count(), 6);
        for (i, edge) in mesh.edges().iter().enumerate() {
            assert_eq!(*edge, [i as u32, i as u32 + 1]);
        }
        assert!(mesh.validate());
    }

    #[test]
    fn test_tessellate_cyclic_counts() {
        let spline = Spline::bezier_cyclic(vec![
            ControlPoint::sharp(DVec3::ZERO),
            ControlPoint::sharp(DVec3::X),
            ControlPoint::sharp(DVec3::Y),
        ]);
        let mesh = tessellate_spline(&spline, 6).unwrap();
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.edge_count(), 6);
        assert_eq!(mesh.edge(5), [5, 0]); // tail connects to head
        assert!(mesh.validate());
    }

    #[test]
    fn test_tessellate_endpoints_exact() {
        let spline = open_spline();
        let mesh = tessellate_spline(&spline, 5).unwrap();
        assert_close(mesh.vertex(0), spline.points[0].position);
        assert_close(mesh.vertex(4), spline.points[2].position);
    }

    #[test]
    fn test_tessellate_segment_boundary_hits_control_point() {
        // Two segments, three samples: the middle sample lands exactly on
        // the segment boundary and must equal the middle control point.
        let spline = open_spline();
        let mesh = tessellate_spline(&spline, 3).unwrap();
        assert_close(mesh.vertex(1), spline.points[1].position);
    }

    #[test]
    fn test_tessellate_two_point_scenario() {
        let spline = Spline::bezier(vec![
            ControlPoint::new(DVec3::ZERO, DVec3::ZERO, DVec3::ZERO),
            ControlPoint::new(
                DVec3::new(1.0, 0.0, 0.0),
                DVec3::new(1.0, 0.0, 0.0),
                DVec3::new(1.0, 0.0, 0.0),
            ),
        ]);
        let mesh = tessellate_spline(&spline, 3).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.edges(), &[[0, 1], [1, 2]]);
        assert_close(mesh.vertex(0), DVec3::ZERO);
        assert_close(mesh.vertex(1), DVec3::new(0.5, 0.0, 0.0));
        assert_close(mesh.vertex(2), DVec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_tessellate_point_count_below_minimum() {
        let result = tessellate_spline(&open_spline(), 1);
        assert_eq!(result, Err(MeshError::invalid_point_count(1)));
    }

    #[test]
    fn test_tessellate_non_bezier_yields_empty() {
        let mut spline = open_spline();
        spline.kind = SplineKind::Nurbs;
        let mesh = tessellate_spline(&spline, 5).unwrap();
        assert!(mesh.is_empty());
        assert_eq!(mesh.edge_count(), 0);
    }

    #[test]
    fn test_tessellate_degenerate_yields_empty() {
        let spline = Spline::bezier(vec![ControlPoint::sharp(DVec3::ZERO)]);
        let mesh = tessellate_spline(&spline, 5).unwrap();
        assert!(mesh.is_empty());
        assert_eq!(mesh.edge_count(), 0);
    }

    #[test]
    fn test_tessellate_cyclic_single_point() {
        // One cyclic point forms one segment looping back onto itself.
        let spline = Spline::bezier_cyclic(vec![ControlPoint::new(
            DVec3::ZERO,
            DVec3::new(-1.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
        )]);
        let mesh = tessellate_spline(&spline, 4).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.edge_count(), 4);
        assert!(mesh.validate());
    }
}
