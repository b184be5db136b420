use bevy::gltf::GltfAssetLabel;
use bevy::prelude::*;

use crate::engine::assets::flight_assets::FlightAssets;
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::loading::progress::LoadingProgress;
use constants::path::RELATIVE_MANIFEST_PATH;

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<SceneManifest>>,
}

// Start the loading process
pub fn start_loading(mut manifest_loader: ResMut<ManifestLoader>, asset_server: Res<AssetServer>) {
    let manifest_path = format!("{}/manifest.json", RELATIVE_MANIFEST_PATH);
    println!("Loading scene manifest from: {}", manifest_path);
    manifest_loader.handle = Some(asset_server.load(&manifest_path));
}

// Insert the manifest resource and start model loading once parsed
pub fn load_manifest_system(
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    mut assets: ResMut<FlightAssets>,
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<SceneManifest>>,
) {
    if loading_progress.manifest_loaded {
        return;
    }

    if let Some(ref handle) = manifest_loader.handle {
        if let Some(manifest) = manifests.get(handle) {
            println!(
                "✓ Scene manifest loaded ({} clouds, {} narration blocks)",
                manifest.cloud_count(),
                manifest.narration_count()
            );
            assets.manifest = Some(handle.clone());
            commands.insert_resource(manifest.clone());
            loading_progress.manifest_loaded = true;

            start_model_loading(&asset_server, &mut assets, manifest);
        }
    }
}

fn start_model_loading(
    asset_server: &AssetServer,
    assets: &mut FlightAssets,
    manifest: &SceneManifest,
) {
    let airplane_path = format!("{}/{}", RELATIVE_MANIFEST_PATH, manifest.models.airplane);
    let cloud_path = format!("{}/{}", RELATIVE_MANIFEST_PATH, manifest.models.cloud);

    println!("Loading model scenes:");
    println!("  Airplane: {}", airplane_path);
    println!("  Cloud:    {}", cloud_path);

    assets.airplane_scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(airplane_path));
    assets.cloud_scene = asset_server.load(GltfAssetLabel::Scene(0).from_asset(cloud_path));
}
