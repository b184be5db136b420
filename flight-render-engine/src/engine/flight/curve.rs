use bevy::math::cubic_splines::{
    CubicCardinalSpline, CubicCurve, CubicGenerator, InsufficientDataError,
};
use bevy::prelude::*;

use crate::engine::assets::scene_manifest::SceneManifest;

/// Immutable piecewise-smooth 3D path through ordered control points.
///
/// Catmull-Rom interpolation (cardinal spline, tension 0.5, open ends with
/// mirrored endpoint padding), queried by a normalised parameter in [0, 1].
pub struct FlightPath {
    curve: CubicCurve<Vec3>,
    segment_count: f32,
}

impl FlightPath {
    /// Build a path from at least two control points.
    pub fn new(control_points: Vec<Vec3>) -> Result<Self, InsufficientDataError> {
        let curve = CubicCardinalSpline::new_catmull_rom(control_points).to_curve()?;
        let segment_count = curve.segments().len() as f32;
        Ok(Self {
            curve,
            segment_count,
        })
    }

    /// Point on the path at normalised parameter `t`, clamped to [0, 1].
    /// `point_at(0.0)` is the first control point, `point_at(1.0)` the last.
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.curve.position(t.clamp(0.0, 1.0) * self.segment_count)
    }

    /// Unit direction of travel at normalised parameter `t`, clamped to [0, 1].
    pub fn tangent_at(&self, t: f32) -> Vec3 {
        self.curve
            .velocity(t.clamp(0.0, 1.0) * self.segment_count)
            .normalize_or_zero()
    }

    /// Uniformly spaced positions along the whole path, `subdivisions + 1`
    /// samples including both endpoints. Used for ribbon extrusion.
    pub fn sample_positions(&self, subdivisions: usize) -> Vec<Vec3> {
        let n = subdivisions.max(1);
        (0..=n)
            .map(|i| self.point_at(i as f32 / n as f32))
            .collect()
    }
}

/// The two paths of the scene: the one the camera rig follows and the
/// decorative one that is only rendered.
#[derive(Resource)]
pub struct FlightRoute {
    pub camera_path: FlightPath,
    pub decorative_path: FlightPath,
}

impl FlightRoute {
    pub fn from_manifest(manifest: &SceneManifest) -> Result<Self, InsufficientDataError> {
        Ok(Self {
            camera_path: FlightPath::new(manifest.flight_path.points())?,
            decorative_path: FlightPath::new(manifest.decorative_path.points())?,
        })
    }
}
