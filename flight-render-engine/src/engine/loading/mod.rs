//! Asset loading and initialisation systems for the flight scene.
//!
//! Manages the staged pipeline from manifest parsing through model loading
//! to final scene graph construction, with progress tracking.

/// Scene manifest loading from JSON configuration.
///
/// Initiates glTF model loading once the manifest has parsed.
pub mod manifest_loader;

/// glTF scene load-state monitoring for the airplane and cloud models.
pub mod model_loader;

/// Loading progress tracking resource for state transitions.
pub mod progress;

/// Scene graph construction once the manifest and models are available.
///
/// Builds the flight paths and spawns the camera rig, airplane, clouds,
/// narration markers, and path ribbons.
pub mod scene_creator;
