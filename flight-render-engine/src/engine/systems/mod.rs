/// Frame-rate overlay updates from the diagnostics store.
pub mod fps_tracking;
