use std::f32::consts::FRAC_PI_2;

use bevy::math::EulerRot;
use bevy::prelude::*;

use crate::engine::flight::curve::{FlightPath, FlightRoute};
use crate::engine::flight::scroll::ScrollState;
use constants::flight::{
    AIRPLANE_BANK_SPEED, AIRPLANE_MAX_ANGLE_DEGREES, BANK_EXAGGERATION, CAMERA_FOLLOW_SPEED,
    CURVE_AHEAD_AIRPLANE, CURVE_AHEAD_CAMERA,
};

/// Parent group of the camera and the airplane. The follower moves this
/// transform along the flight path; the camera child inherits the motion.
#[derive(Component)]
pub struct CameraRig;

/// The banking airplane group, a child of the rig. Only its rotation is
/// driven here; position comes from the rig.
#[derive(Component)]
pub struct Airplane;

pub fn flight_follower(
    time: Res<Time>,
    scroll: Res<ScrollState>,
    route: Option<Res<FlightRoute>>,
    mut rig_query: Query<&mut Transform, (With<CameraRig>, Without<Airplane>)>,
    mut airplane_query: Query<&mut Transform, (With<Airplane>, Without<CameraRig>)>,
) {
    let Some(route) = route else {
        return;
    };
    let Ok(mut rig) = rig_query.single_mut() else {
        return;
    };
    let Ok(mut airplane) = airplane_query.single_mut() else {
        return;
    };

    advance_rig(
        &mut rig,
        &mut airplane,
        &route.camera_path,
        scroll.offset,
        time.delta_secs(),
    );
}

/// One frame of flight kinematics: ease the rig toward the current path
/// point, turn it toward the lookahead sample, and bank the airplane from
/// the path tangent. Mutates both transforms in place; never teleports.
pub fn advance_rig(
    rig: &mut Transform,
    airplane: &mut Transform,
    path: &FlightPath,
    scroll_offset: f32,
    delta: f32,
) {
    let offset = scroll_offset.clamp(0.0, 1.0);
    let current_point = path.point_at(offset);

    let follow = (delta * CAMERA_FOLLOW_SPEED).min(1.0);
    rig.translation = rig.translation.lerp(current_point, follow);

    let look_at_point = path.point_at((offset + CURVE_AHEAD_CAMERA).min(1.0));

    // The rig's +Z axis tracks the direction it came from; the camera child
    // faces -Z, so it ends up looking forward along the route.
    let target_look_back = (current_point - look_at_point).normalize_or_zero();
    let look_back = rig.back().as_vec3().lerp(target_look_back, follow);
    rig.look_to(-look_back, Vec3::Y);

    let bank = banking_angle(path, offset, target_look_back);

    // Keep the airplane's current pitch/yaw, replace only the roll.
    let (pitch, yaw, _) = airplane.rotation.to_euler(EulerRot::XYZ);
    let target_rotation = Quat::from_euler(EulerRot::XYZ, pitch, yaw, bank);
    airplane.rotation = airplane
        .rotation
        .slerp(target_rotation, (delta * AIRPLANE_BANK_SPEED).min(1.0));
}

/// Banking roll in radians for the airplane at `offset`, derived from the
/// path tangent slightly ahead and clamped to the configured maximum.
pub fn banking_angle(path: &FlightPath, offset: f32, target_look_back: Vec3) -> f32 {
    let tangent = path.tangent_at(offset + CURVE_AHEAD_AIRPLANE);

    // Non-smoothed reference frame at the current point, oriented the way
    // the rig is heading. Expressing the tangent in this frame isolates the
    // lateral component that should produce lean.
    let reference = Transform::default().looking_to(-target_look_back, Vec3::Y);
    let (_, reference_yaw, _) = reference.rotation.to_euler(EulerRot::XYZ);
    let local_tangent = Quat::from_rotation_y(-reference_yaw) * tangent;

    let raw = (-local_tangent.z).atan2(local_tangent.x) - FRAC_PI_2;
    let exaggerated = raw.to_degrees() * BANK_EXAGGERATION;

    exaggerated
        .clamp(-AIRPLANE_MAX_ANGLE_DEGREES, AIRPLANE_MAX_ANGLE_DEGREES)
        .to_radians()
}
