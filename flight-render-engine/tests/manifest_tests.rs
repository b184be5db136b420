use bevy::math::Vec3;
use flight_render_engine::engine::assets::scene_manifest::SceneManifest;
use flight_render_engine::engine::flight::curve::FlightRoute;

const SHIPPED_MANIFEST: &str = include_str!("../../assets/scenes/flight/manifest.json");

#[cfg(test)]
mod manifest_tests {
    use super::*;

    fn shipped_manifest() -> SceneManifest {
        serde_json::from_str(SHIPPED_MANIFEST).expect("shipped manifest parses")
    }

    #[test]
    fn test_shipped_manifest_parses() {
        let manifest = shipped_manifest();

        assert_eq!(manifest.flight_path.control_points.len(), 8);
        assert_eq!(manifest.decorative_path.control_points.len(), 8);
        assert_eq!(manifest.cloud_count(), 28);
        assert_eq!(manifest.narration_count(), 13);
        assert!(manifest.models.airplane.ends_with(".glb"));
        assert!(manifest.models.cloud.ends_with(".glb"));
    }

    #[test]
    fn test_shipped_manifest_builds_both_routes() {
        let manifest = shipped_manifest();
        let route = FlightRoute::from_manifest(&manifest).expect("route builds");

        let start = route.camera_path.point_at(0.0);
        let end = route.camera_path.point_at(1.0);
        assert!(start.distance(Vec3::ZERO) < 1e-3);
        assert!(end.distance(Vec3::new(0.0, 0.0, -1750.0)) < 1e-3);

        assert!(route.decorative_path.point_at(0.5).is_finite());
    }

    #[test]
    fn test_cloud_placement_transform() {
        let manifest = shipped_manifest();
        let first = &manifest.clouds[0];
        let transform = first.transform();

        assert_eq!(transform.translation, Vec3::from(first.position));
        assert_eq!(transform.scale, Vec3::from(first.scale));
    }

    #[test]
    fn test_rotation_y_defaults_to_zero_when_absent() {
        let manifest: SceneManifest = serde_json::from_str(
            r#"{
                "models": { "airplane": "a.glb", "cloud": "c.glb" },
                "flight_path": { "control_points": [[0,0,0],[0,0,-10]] },
                "decorative_path": { "control_points": [[0,0,0],[0,0,-10]] },
                "clouds": [{ "position": [1,2,3], "scale": [1,1,1] }],
                "narration": []
            }"#,
        )
        .expect("minimal manifest parses");

        assert_eq!(manifest.clouds[0].rotation_y, 0.0);
    }

    #[test]
    fn test_narration_blocks_are_in_route_order() {
        let manifest = shipped_manifest();

        let mut last_z = f32::INFINITY;
        for block in &manifest.narration {
            let z = block.translation().z;
            assert!(z < last_z, "narration at z {z} out of route order");
            last_z = z;
        }
    }
}
