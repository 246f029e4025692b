//! # Curve Mesh
//!
//! Polyline mesh generation from bezier curves.
//! Converts curve data from `curve-types` into polyline meshes.
//!
//! ## Architecture
//!
//! ```text
//! CurveSource (Curve snapshot) → curve-mesh (PolylineMesh) → MeshSink
//! ```
//!
//! ## Algorithm
//!
//! Each bezier spline is sampled at a fixed number of points, uniformly
//! in segment-index space (not arc length), by evaluating the cubic
//! Bernstein blend of each segment's endpoints and handles. Per-spline
//! polylines are merged into one mesh with reindexed edges.
//!
//! ## Usage
//!
//! ```rust
//! use curve_mesh::curve_to_polyline;
//! use curve_types::{ControlPoint, Curve, Spline};
//! use glam::DVec3;
//!
//! let spline = Spline::bezier(vec![
//!     ControlPoint::sharp(DVec3::ZERO),
//!     ControlPoint::sharp(DVec3::X),
//! ]);
//! let mesh = curve_to_polyline(&Curve::single(spline), 12)?;
//! assert_eq!(mesh.vertex_count(), 12);
//! # Ok::<(), curve_mesh::MeshError>(())
//! ```

pub mod error;
pub mod from_curve;
pub mod mesh;
pub mod pipeline;
pub mod tessellate;

pub use error::MeshError;
pub use from_curve::curve_to_polyline;
pub use mesh::PolylineMesh;
pub use pipeline::{convert_active_curve, ConvertSettings, CurveSource, MeshSink};
