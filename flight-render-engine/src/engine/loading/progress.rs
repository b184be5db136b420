use bevy::prelude::*;

#[derive(Resource, Default)]
pub struct LoadingProgress {
    pub manifest_loaded: bool,
    pub models_loaded: bool,
    pub scene_created: bool,
    /// Set when the manifest data cannot produce a valid scene (for example
    /// a path with fewer than two control points). The app stays in the
    /// loading state rather than running without a route.
    pub build_failed: bool,
}
