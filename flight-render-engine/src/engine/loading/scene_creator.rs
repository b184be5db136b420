use bevy::prelude::*;

use crate::engine::assets::flight_assets::FlightAssets;
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::flight::curve::FlightRoute;
use crate::engine::flight::follower::{Airplane, CameraRig};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::scene::clouds::spawn_clouds;
use crate::engine::scene::narration::spawn_narration_markers;
use crate::engine::scene::ribbon::spawn_path_ribbons;
use constants::render_settings::{
    AIRPLANE_MODEL_LIFT, AIRPLANE_MODEL_SCALE, AIRPLANE_MODEL_YAW, CAMERA_FOV_DEGREES,
    CAMERA_RIG_OFFSET, FLOAT_SETTINGS,
};

// Build the scene graph once the manifest and models are available
pub fn create_scene_when_ready(
    mut commands: Commands,
    mut loading_progress: ResMut<LoadingProgress>,
    manifest: Option<Res<SceneManifest>>,
    assets: Res<FlightAssets>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if loading_progress.scene_created
        || loading_progress.build_failed
        || !loading_progress.models_loaded
    {
        return;
    }
    let Some(manifest) = manifest else {
        return;
    };

    let route = match FlightRoute::from_manifest(&manifest) {
        Ok(route) => route,
        Err(err) => {
            eprintln!("Failed to build flight paths from manifest: {err}");
            loading_progress.build_failed = true;
            return;
        }
    };

    spawn_camera_rig(&mut commands, &assets);
    spawn_clouds(&mut commands, &assets, &manifest);
    spawn_narration_markers(&mut commands, &manifest);
    spawn_path_ribbons(&mut commands, &mut meshes, &mut materials, &route);

    commands.insert_resource(route);
    loading_progress.scene_created = true;
    println!("✓ Scene graph created");
}

/// Rig hierarchy: rig group → (camera, airplane group → float pivot → model).
/// The follower drives the rig transform and the airplane group rotation;
/// everything else inherits.
fn spawn_camera_rig(commands: &mut Commands, assets: &FlightAssets) {
    commands
        .spawn((
            CameraRig,
            Transform::default(),
            Visibility::default(),
            Name::new("camera_rig"),
        ))
        .with_children(|rig| {
            rig.spawn((
                Camera3d::default(),
                Projection::Perspective(PerspectiveProjection {
                    fov: CAMERA_FOV_DEGREES.to_radians(),
                    ..default()
                }),
                Transform::from_translation(CAMERA_RIG_OFFSET),
            ));

            rig.spawn((
                Airplane,
                Transform::default(),
                Visibility::default(),
                Name::new("airplane"),
            ))
            .with_children(|airplane| {
                airplane
                    .spawn((FLOAT_SETTINGS, Transform::default(), Visibility::default()))
                    .with_children(|pivot| {
                        pivot.spawn((
                            SceneRoot(assets.airplane_scene.clone()),
                            Transform::from_xyz(0.0, AIRPLANE_MODEL_LIFT, 0.0)
                                .with_rotation(Quat::from_rotation_y(AIRPLANE_MODEL_YAW))
                                .with_scale(Vec3::splat(AIRPLANE_MODEL_SCALE)),
                        ));
                    });
            });
        });
}
