//! Scroll-driven flight kinematics.
//!
//! A Catmull-Rom flight path, the per-frame camera/airplane follower, and
//! the scroll driver that maps wheel and key input onto route progress.

/// Catmull-Rom path sampling over ordered control points.
pub mod curve;

/// Per-frame camera rig and airplane banking update.
pub mod follower;

/// Scroll progress resource and its input system.
pub mod scroll;
