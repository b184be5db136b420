use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

#[derive(Component)]
pub struct FpsText;

/// Marker for the UI text element that mirrors the nearest narration block.
#[derive(Component)]
pub struct NarrationOverlay;

// Final transition to running state once the scene graph exists
pub fn transition_to_running(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.scene_created {
        println!("→ Scene ready, transitioning to Running state");
        next_state.set(AppState::Running);
    }
}
