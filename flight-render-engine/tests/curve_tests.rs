use bevy::math::Vec3;
use constants::flight::{CURVE_AHEAD_CAMERA, CURVE_DISTANCE};
use flight_render_engine::engine::flight::curve::FlightPath;

#[cfg(test)]
mod curve_tests {
    use super::*;

    fn scene_path() -> FlightPath {
        FlightPath::new(vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -CURVE_DISTANCE),
            Vec3::new(100.0, 0.0, -2.0 * CURVE_DISTANCE),
            Vec3::new(-100.0, 0.0, -3.0 * CURVE_DISTANCE),
            Vec3::new(100.0, 0.0, -4.0 * CURVE_DISTANCE),
            Vec3::new(0.0, 0.0, -5.0 * CURVE_DISTANCE),
            Vec3::new(0.0, 0.0, -6.0 * CURVE_DISTANCE),
            Vec3::new(0.0, 0.0, -7.0 * CURVE_DISTANCE),
        ])
        .expect("scene control points are valid")
    }

    fn straight_path() -> FlightPath {
        FlightPath::new(vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -100.0),
            Vec3::new(0.0, 0.0, -200.0),
            Vec3::new(0.0, 0.0, -300.0),
        ])
        .expect("collinear control points are valid")
    }

    #[test]
    fn test_endpoints_match_control_points() {
        let path = scene_path();

        let start = path.point_at(0.0);
        let end = path.point_at(1.0);

        assert!(start.distance(Vec3::ZERO) < 1e-3, "start was {start:?}");
        assert!(
            end.distance(Vec3::new(0.0, 0.0, -7.0 * CURVE_DISTANCE)) < 1e-3,
            "end was {end:?}"
        );
    }

    #[test]
    fn test_every_sample_is_finite() {
        let path = scene_path();

        for i in 0..=1000 {
            let t = i as f32 / 1000.0;
            let point = path.point_at(t);
            assert!(point.is_finite(), "point_at({t}) produced {point:?}");

            let tangent = path.tangent_at(t);
            assert!(tangent.is_finite(), "tangent_at({t}) produced {tangent:?}");
        }
    }

    #[test]
    fn test_parameter_is_clamped_to_unit_range() {
        let path = scene_path();

        assert_eq!(path.point_at(-0.5), path.point_at(0.0));
        assert_eq!(path.point_at(1.5), path.point_at(1.0));
        assert_eq!(path.tangent_at(-0.5), path.tangent_at(0.0));
        assert_eq!(path.tangent_at(1.5), path.tangent_at(1.0));
    }

    #[test]
    fn test_lookahead_never_samples_beyond_end() {
        let path = scene_path();
        let end = path.point_at(1.0);

        // Past the point where offset + lookahead crosses 1, the clamped
        // lookahead sample must be exactly the end of the path.
        for offset in [1.0 - CURVE_AHEAD_CAMERA, 0.995, 0.999, 1.0] {
            let lookahead = path.point_at((offset + CURVE_AHEAD_CAMERA).min(1.0));
            if offset > 1.0 - CURVE_AHEAD_CAMERA {
                assert_eq!(lookahead, end);
            } else {
                assert!(lookahead.is_finite());
            }
        }
    }

    #[test]
    fn test_straight_path_tangent_points_forward() {
        let path = straight_path();

        for i in 0..=100 {
            let t = i as f32 / 100.0;
            let tangent = path.tangent_at(t);
            assert!(
                tangent.distance(Vec3::NEG_Z) < 1e-4,
                "tangent_at({t}) was {tangent:?}"
            );
        }
    }

    #[test]
    fn test_tangent_is_unit_length() {
        let path = scene_path();

        for i in 0..=100 {
            let t = i as f32 / 100.0;
            let length = path.tangent_at(t).length();
            assert!((length - 1.0).abs() < 1e-4, "tangent_at({t}) length {length}");
        }
    }

    #[test]
    fn test_single_control_point_is_rejected() {
        assert!(FlightPath::new(vec![Vec3::ZERO]).is_err());
        assert!(FlightPath::new(Vec::new()).is_err());
    }

    #[test]
    fn test_two_control_points_are_enough() {
        let path = FlightPath::new(vec![Vec3::ZERO, Vec3::new(0.0, 0.0, -10.0)])
            .expect("two points form a valid path");
        assert!(path.point_at(0.5).is_finite());
    }

    #[test]
    fn test_sample_positions_covers_both_endpoints() {
        let path = scene_path();
        let samples = path.sample_positions(100);

        assert_eq!(samples.len(), 101);
        assert_eq!(samples[0], path.point_at(0.0));
        assert_eq!(samples[100], path.point_at(1.0));
    }
}
