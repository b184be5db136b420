use bevy::prelude::*;

/// Gentle idle bobbing applied to the airplane pivot, independent of the
/// scroll-driven banking.
#[derive(Component, Clone, Copy)]
pub struct FloatSettings {
    pub intensity: f32,
    pub speed: f32,
    pub rotation_intensity: f32,
}

pub const FLOAT_SETTINGS: FloatSettings = FloatSettings {
    intensity: 2.0,
    speed: 2.0,
    rotation_intensity: 0.5,
};

/// Vertical travel of one unit of float intensity, metres.
pub const FLOAT_AMPLITUDE: f32 = 0.05;

/// Wobble of one unit of float rotation intensity, radians.
pub const FLOAT_WOBBLE: f32 = 0.04;

pub const CAMERA_FOV_DEGREES: f32 = 30.0;

/// Camera offset behind the rig origin, so the airplane sits in frame.
pub const CAMERA_RIG_OFFSET: Vec3 = Vec3::new(0.0, 0.0, 5.0);

/// Airplane model placement inside its float pivot.
pub const AIRPLANE_MODEL_SCALE: f32 = 0.2;
pub const AIRPLANE_MODEL_LIFT: f32 = 0.1;
pub const AIRPLANE_MODEL_YAW: f32 = std::f32::consts::FRAC_PI_2;

/// Rendered path ribbon dimensions.
pub const RIBBON_HALF_HEIGHT: f32 = 0.08;
pub const RIBBON_Y_OFFSET: f32 = -2.0;

pub const SKY_CLEAR_COLOUR: Color = Color::srgb(0.925, 0.925, 0.925);

pub const DIRECTIONAL_LIGHT_ILLUMINANCE: f32 = 1_000.0;

/// Distance from the camera rig within which a narration block is shown
/// in the overlay.
pub const NARRATION_VISIBLE_RADIUS: f32 = 50.0;
