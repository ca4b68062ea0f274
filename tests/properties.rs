//! Property-based tests for bounds and normalization.
//!
//! Run with: cargo test --test properties

use normbox::{
    compute_bounds, normalize_to_box, normalize_with, recover_from_box, vector, Axis,
    NormalizeConfig, Point3, Scaling,
};
use proptest::prelude::*;

fn arb_point() -> impl Strategy<Value = Point3> {
    prop::array::uniform3(-1000.0..1000.0f32).prop_map(Point3::from_array)
}

fn arb_cloud() -> impl Strategy<Value = Vec<Point3>> {
    prop::collection::vec(arb_point(), 2..64)
}

fn has_volume(points: &[Point3]) -> bool {
    compute_bounds(points).is_ok_and(|b| b.first_degenerate_axis().is_none())
}

proptest! {
    #[test]
    fn bounds_enclose_and_touch(points in prop::collection::vec(arb_point(), 1..64)) {
        let bounds = compute_bounds(&points).unwrap();
        prop_assert!(points.iter().all(|&p| bounds.contains(p)));
        for axis in Axis::ALL {
            let (min, max) = bounds.range(axis);
            let i = axis.index();
            prop_assert!(min <= max);
            prop_assert!(points.iter().any(|p| p[i] == min));
            prop_assert!(points.iter().any(|p| p[i] == max));
        }
    }

    #[test]
    fn cross_is_anticommutative(a in arb_point(), b in arb_point()) {
        prop_assert_eq!(vector::cross(a, b), -vector::cross(b, a));
    }

    #[test]
    fn normalized_vectors_have_unit_length(v in arb_point()) {
        prop_assume!(vector::magnitude(v) > 1e-3);
        let n = vector::normalize(v);
        prop_assert!((vector::magnitude(n) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn fits_box_of_side(mut points in arb_cloud(), side in 0.01..100.0f32) {
        prop_assume!(has_volume(&points));
        normalize_to_box(side, &mut points).unwrap();

        let bounds = compute_bounds(&points).unwrap();
        let tolerance = side * 1e-5;
        for axis in Axis::ALL {
            let (min, max) = bounds.range(axis);
            prop_assert!((max - min - side).abs() <= tolerance, "{axis}: {min}..{max}");
            prop_assert!((max + min).abs() <= tolerance, "{axis}: {min}..{max}");
        }
    }

    #[test]
    fn normalization_is_a_projection(mut points in arb_cloud(), side in 0.01..100.0f32) {
        prop_assume!(has_volume(&points));
        normalize_to_box(side, &mut points).unwrap();
        let once = compute_bounds(&points).unwrap();

        normalize_to_box(side, &mut points).unwrap();
        let twice = compute_bounds(&points).unwrap();

        prop_assert!(once.min.abs_diff_eq(twice.min, side * 1e-5));
        prop_assert!(once.max.abs_diff_eq(twice.max, side * 1e-5));
    }

    #[test]
    fn uniform_preserves_ratios(mut points in arb_cloud()) {
        prop_assume!(has_volume(&points));
        let before = compute_bounds(&points).unwrap().extent();

        let config = NormalizeConfig::new(2.0).with_scaling(Scaling::Uniform);
        normalize_with(&mut points, &config).unwrap();
        let after = compute_bounds(&points).unwrap();

        prop_assert!((after.extent().max_element() - 2.0).abs() < 1e-5);
        prop_assert!(after.center().abs_diff_eq(Point3::ZERO, 1e-5));
        let expected = before / before.max_element() * 2.0;
        prop_assert!(after.extent().abs_diff_eq(expected, 1e-4));
    }

    #[test]
    fn recovers_original(points in arb_cloud(), uniform in any::<bool>()) {
        prop_assume!(has_volume(&points));
        let scaling = if uniform { Scaling::Uniform } else { Scaling::PerAxis };
        let config = NormalizeConfig::new(3.0).with_scaling(scaling);

        let mut normalized = points.clone();
        let original = normalize_with(&mut normalized, &config).unwrap();
        recover_from_box(&mut normalized, &original, &config).unwrap();

        for (recovered, expected) in normalized.iter().zip(&points) {
            prop_assert!(recovered.abs_diff_eq(*expected, 1e-2), "{expected} != {recovered}");
        }
    }
}
