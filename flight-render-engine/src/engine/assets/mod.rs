/// Handle bookkeeping for the manifest and glTF model scenes.
pub mod flight_assets;

/// Scene manifest asset type mirroring the JSON layout data.
pub mod scene_manifest;
