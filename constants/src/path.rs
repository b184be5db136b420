/// Scene directory inside the Bevy assets root. The manifest and model
/// files referenced by it live under this prefix.
pub const RELATIVE_MANIFEST_PATH: &str = "scenes/flight";
