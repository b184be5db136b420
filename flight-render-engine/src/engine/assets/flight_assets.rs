use bevy::prelude::*;

use crate::engine::assets::scene_manifest::SceneManifest;

/// Central handle store for everything the scene needs: the parsed manifest
/// plus the airplane and cloud glTF scenes it references.
#[derive(Resource, Default)]
pub struct FlightAssets {
    pub manifest: Option<Handle<SceneManifest>>,
    pub airplane_scene: Handle<Scene>,
    pub cloud_scene: Handle<Scene>,
}
