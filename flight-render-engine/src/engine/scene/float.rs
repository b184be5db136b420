use bevy::math::EulerRot;
use bevy::prelude::*;

use constants::render_settings::{FLOAT_AMPLITUDE, FLOAT_WOBBLE, FloatSettings};

/// Gentle sinusoidal bob and wobble of the airplane pivot, layered on top
/// of the scroll-driven banking which lives on the parent group.
pub fn float_airplane(time: Res<Time>, mut pivots: Query<(&FloatSettings, &mut Transform)>) {
    let elapsed = time.elapsed_secs();

    for (settings, mut transform) in &mut pivots {
        let phase = elapsed * settings.speed;

        transform.translation.y = phase.sin() * FLOAT_AMPLITUDE * settings.intensity;

        let wobble = FLOAT_WOBBLE * settings.rotation_intensity;
        transform.rotation = Quat::from_euler(
            EulerRot::XYZ,
            (phase * 0.7).sin() * wobble,
            0.0,
            (phase * 0.9).cos() * wobble,
        );
    }
}
