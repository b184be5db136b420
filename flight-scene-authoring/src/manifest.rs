/// Scene manifest generation for the flight experience.
use crate::layout;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Complete scene manifest linking model files, flight paths, and the
/// placement tables. Field layout matches what the render engine parses.
#[derive(Serialize)]
pub struct SceneManifest {
    pub models: ModelFiles,
    pub flight_path: PathData,
    pub decorative_path: PathData,
    pub clouds: Vec<CloudPlacement>,
    pub narration: Vec<NarrationPlacement>,
}

#[derive(Serialize)]
pub struct ModelFiles {
    pub airplane: String,
    pub cloud: String,
}

#[derive(Serialize)]
pub struct PathData {
    pub control_points: Vec<[f32; 3]>,
}

#[derive(Serialize)]
pub struct CloudPlacement {
    pub position: [f32; 3],
    pub scale: [f32; 3],
    pub rotation_y: f32,
}

#[derive(Serialize)]
pub struct NarrationPlacement {
    pub position: [f32; 3],
    pub text: String,
}

/// Writes the unified manifest.json into the output directory.
pub struct ManifestGenerator {
    output_dir: PathBuf,
}

impl ManifestGenerator {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
        }
    }

    pub fn generate_manifest(&self) -> Result<(), Box<dyn std::error::Error>> {
        let manifest = SceneManifest {
            models: ModelFiles {
                airplane: String::from("models/airplane.glb"),
                cloud: String::from("models/cloud.glb"),
            },
            flight_path: PathData {
                control_points: layout::flight_path_control_points(),
            },
            decorative_path: PathData {
                control_points: layout::decorative_path_control_points(),
            },
            clouds: layout::cloud_placements(),
            narration: layout::narration_blocks(),
        };

        fs::create_dir_all(&self.output_dir)?;
        let manifest_path = self.output_dir.join("manifest.json");
        let json = serde_json::to_string_pretty(&manifest)?;
        fs::write(&manifest_path, json)?;

        println!(
            "✓ Scene manifest written to {} ({} clouds, {} narration blocks)",
            manifest_path.display(),
            manifest.clouds.len(),
            manifest.narration.len()
        );

        Ok(())
    }
}
