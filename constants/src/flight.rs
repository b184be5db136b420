/// Lookahead along the flight path used to derive the camera facing
/// direction, in normalised curve parameter.
pub const CURVE_AHEAD_CAMERA: f32 = 0.008;

/// Lookahead used when sampling the tangent that drives airplane banking.
/// Slightly further ahead than the camera so the bank anticipates turns.
pub const CURVE_AHEAD_AIRPLANE: f32 = 0.02;

/// Hard limit on the airplane banking angle.
pub const AIRPLANE_MAX_ANGLE_DEGREES: f32 = 35.0;

/// Tuned exaggeration applied to the raw bank angle so shallow tangent
/// changes still read as a visible lean.
pub const BANK_EXAGGERATION: f32 = 2.4;

/// Responsiveness of the camera rig position/orientation follow.
/// Multiplied by the frame delta and clamped to 1 before lerping.
pub const CAMERA_FOLLOW_SPEED: f32 = 24.0;

/// Responsiveness of the airplane banking slerp. Deliberately much slower
/// than the camera so the lean lags the turn.
pub const AIRPLANE_BANK_SPEED: f32 = 2.0;

/// Spacing between consecutive flight path control points along -Z, metres.
pub const CURVE_DISTANCE: f32 = 250.0;

/// Subdivisions used when extruding the rendered path ribbons.
pub const RIBBON_STEPS: usize = 1000;
