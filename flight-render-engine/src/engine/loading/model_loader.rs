use bevy::prelude::*;

use crate::engine::assets::flight_assets::FlightAssets;
use crate::engine::loading::progress::LoadingProgress;

// Check whether both glTF scenes have finished loading
pub fn check_model_loading(
    mut loading_progress: ResMut<LoadingProgress>,
    assets: Res<FlightAssets>,
    asset_server: Res<AssetServer>,
) {
    if loading_progress.models_loaded || !loading_progress.manifest_loaded {
        return;
    }

    let airplane_state = asset_server.get_load_state(&assets.airplane_scene);
    let cloud_state = asset_server.get_load_state(&assets.cloud_scene);

    let airplane_loaded = matches!(airplane_state, Some(bevy::asset::LoadState::Loaded));
    let cloud_loaded = matches!(cloud_state, Some(bevy::asset::LoadState::Loaded));

    // A missing model should not wedge the pipeline; the scene still works
    // without the mesh, it just renders nothing for that instance.
    let airplane_failed = matches!(airplane_state, Some(bevy::asset::LoadState::Failed(_)));
    let cloud_failed = matches!(cloud_state, Some(bevy::asset::LoadState::Failed(_)));

    if (airplane_loaded || airplane_failed) && (cloud_loaded || cloud_failed) {
        if airplane_failed || cloud_failed {
            eprintln!("Warning: one or more model scenes failed to load; continuing without them");
        } else {
            println!("✓ Model scenes loaded successfully");
        }
        loading_progress.models_loaded = true;
    }
}
