/// Placement-record instancer for the cloud model.
pub mod clouds;

/// Idle bobbing of the airplane pivot.
pub mod float;

/// Narration markers along the route and the proximity-driven overlay.
pub mod narration;

/// Extruded ribbon meshes visualising the two paths.
pub mod ribbon;
