use bevy::prelude::*;

use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::core::app_state::NarrationOverlay;
use crate::engine::flight::follower::CameraRig;
use constants::render_settings::NARRATION_VISIBLE_RADIUS;

/// A narrative line anchored to a point along the route.
#[derive(Component)]
pub struct NarrationText(pub String);

pub fn spawn_narration_markers(commands: &mut Commands, manifest: &SceneManifest) {
    for block in &manifest.narration {
        commands.spawn((
            Transform::from_translation(block.translation()),
            NarrationText(block.text.clone()),
            Name::new("narration_block"),
        ));
    }
}

/// Mirror the nearest narration block into the UI overlay while the rig is
/// within reading distance, clear it otherwise.
pub fn narration_overlay_system(
    rig_query: Query<&Transform, With<CameraRig>>,
    blocks: Query<(&Transform, &NarrationText), Without<CameraRig>>,
    mut overlay: Query<&mut Text, With<NarrationOverlay>>,
) {
    let Ok(rig) = rig_query.single() else {
        return;
    };
    let Ok(mut text) = overlay.single_mut() else {
        return;
    };

    let mut nearest: Option<(f32, &NarrationText)> = None;
    for (transform, narration) in &blocks {
        let distance = transform.translation.distance(rig.translation);
        if distance <= NARRATION_VISIBLE_RADIUS
            && nearest.is_none_or(|(best, _)| distance < best)
        {
            nearest = Some((distance, narration));
        }
    }

    match nearest {
        Some((_, narration)) if text.0 != narration.0 => text.0 = narration.0.clone(),
        None if !text.0.is_empty() => text.0.clear(),
        _ => {}
    }
}
