use bevy::prelude::*;

use crate::engine::assets::flight_assets::FlightAssets;
use crate::engine::assets::scene_manifest::SceneManifest;

#[derive(Component)]
pub struct CloudInstance;

/// Spawn one cloud scene instance per placement record in the manifest.
pub fn spawn_clouds(commands: &mut Commands, assets: &FlightAssets, manifest: &SceneManifest) {
    for placement in &manifest.clouds {
        commands.spawn((
            SceneRoot(assets.cloud_scene.clone()),
            placement.transform(),
            CloudInstance,
            Name::new("cloud"),
        ));
    }
}
