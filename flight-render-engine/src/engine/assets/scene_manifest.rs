use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Complete scene manifest as a Bevy asset. Mirrors the JSON structure
/// produced by the authoring tool exactly: model references, the two flight
/// path control polygons, and the placement tables for clouds and narration.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath, Resource)]
pub struct SceneManifest {
    pub models: ModelFiles,
    pub flight_path: PathData,
    /// Second rendered path. Purely decorative: drawn as a ribbon alongside
    /// the flight path but never sampled for motion.
    pub decorative_path: PathData,
    pub clouds: Vec<CloudPlacement>,
    pub narration: Vec<NarrationPlacement>,
}

/// glTF scene files referenced by the manifest, relative to the scene
/// directory in the assets root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelFiles {
    pub airplane: String,
    pub cloud: String,
}

/// Ordered control points of one Catmull-Rom path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathData {
    pub control_points: Vec<[f32; 3]>,
}

impl PathData {
    pub fn points(&self) -> Vec<Vec3> {
        self.control_points.iter().map(|p| Vec3::from(*p)).collect()
    }
}

/// Placement record for one cloud instance. Consumed by a generic instancer
/// that spawns the cloud model once per record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudPlacement {
    pub position: [f32; 3],
    pub scale: [f32; 3],
    #[serde(default)]
    pub rotation_y: f32,
}

impl CloudPlacement {
    pub fn transform(&self) -> Transform {
        Transform::from_translation(Vec3::from(self.position))
            .with_rotation(Quat::from_rotation_y(self.rotation_y))
            .with_scale(Vec3::from(self.scale))
    }
}

/// A narrative text block anchored to a point along the route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrationPlacement {
    pub position: [f32; 3],
    pub text: String,
}

impl NarrationPlacement {
    pub fn translation(&self) -> Vec3 {
        Vec3::from(self.position)
    }
}

impl SceneManifest {
    pub fn cloud_count(&self) -> usize {
        self.clouds.len()
    }

    pub fn narration_count(&self) -> usize {
        self.narration.len()
    }
}
