//! Scroll-driven flight experience: a camera rig and airplane follow a
//! Catmull-Rom flight path through a cloud scene, with scroll progress
//! driving the motion and narration blocks passing by along the route.

pub mod engine;
