//! Shared tuning constants for the flight experience.
//!
//! Kept in a dedicated crate so the render engine and the offline scene
//! authoring tool agree on the same kinematics and layout values.

pub mod flight;
pub mod path;
pub mod render_settings;
pub mod scroll;
