//! # Conversion Pipeline
//!
//! The host boundary of the converter: a [`CurveSource`] supplies the
//! active curve object, a [`MeshSink`] consumes the produced polyline.
//! Host-specific concerns (scene lookup, object linking and deletion,
//! undo handling) live entirely behind these traits; the pipeline itself
//! never touches global editor state.

use crate::error::MeshError;
use crate::from_curve::curve_to_polyline;
use crate::mesh::PolylineMesh;
use config::constants::DEFAULT_POINT_COUNT;
use curve_types::{CurveObject, Transform3};

/// Suffix appended to the source object's name for the produced mesh.
pub const POLYLINE_NAME_SUFFIX: &str = "_polyline";

/// Supplies the curve object a conversion operates on.
///
/// Returns `None` when nothing is selected or the selection is not a
/// curve; the pipeline reports that as [`MeshError::NoActiveCurve`]
/// before any tessellation runs.
pub trait CurveSource {
    /// Returns a snapshot of the active curve object, if any.
    fn active_curve(&self) -> Option<CurveObject>;
}

/// Consumes the polyline mesh produced by a conversion.
///
/// The sink receives the derived object name and the transform copied
/// verbatim from the source object; replacing or deleting the source
/// object is the sink's responsibility.
pub trait MeshSink {
    /// Creates a mesh object in the host from the produced polyline.
    fn create_mesh(&mut self, name: &str, transform: &Transform3, mesh: PolylineMesh);
}

/// Settings for one conversion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSettings {
    /// Number of polyline points generated per spline.
    ///
    /// Hard minimum 2; values above [`SOFT_MAX_POINT_COUNT`] are accepted
    /// but may be slow.
    ///
    /// [`SOFT_MAX_POINT_COUNT`]: config::constants::SOFT_MAX_POINT_COUNT
    pub point_count: u32,
}

impl Default for ConvertSettings {
    fn default() -> Self {
        Self {
            point_count: DEFAULT_POINT_COUNT,
        }
    }
}

/// Converts the source's active curve and hands the result to the sink.
///
/// The produced object is named `<source-name>_polyline` and carries the
/// source object's transform unchanged. An empty mesh (no splines, or
/// all splines skipped) is still delivered; the sink decides whether an
/// empty result is meaningful.
///
/// # Errors
///
/// * [`MeshError::NoActiveCurve`] when the source has no curve object
/// * [`MeshError::InvalidPointCount`] when the requested point count is
///   below the minimum
pub fn convert_active_curve<S, K>(
    source: &S,
    sink: &mut K,
    settings: &ConvertSettings,
) -> Result<(), MeshError>
where
    S: CurveSource + ?Sized,
    K: MeshSink + ?Sized,
{
    let object = source.active_curve().ok_or(MeshError::NoActiveCurve)?;
    let mesh = curve_to_polyline(&object.curve, settings.point_count)?;

    let name = format!("{}{}", object.name, POLYLINE_NAME_SUFFIX);
    sink.create_mesh(&name, &object.transform, mesh);
    Ok(())
}
