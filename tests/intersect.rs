use nalgebra as na;
use obb_clip::{Obb, CORNER_COUNT};
use proptest::prelude::*;
use serde_json::json;
use std::f64::consts::{FRAC_PI_2, PI};

fn reference_boxes() -> (Obb, Obb) {
    let base = Obb::parse(&json!({
        "center": [0, 0, 0],
        "halfSize": [2, 1, 1.5],
        "quaternion": [0, 0, 0, 1]
    }))
    .unwrap();
    let clip = Obb::parse(&json!({
        "center": [2, 1, 1],
        "halfSize": [2.12132034355, 0.707106781186, 1],
        "quaternion": [0, 0, -0.3826834324, 0.9238795325]
    }))
    .unwrap();
    (base, clip)
}

#[test]
fn reference_boxes_intersect() {
    let (base, clip) = reference_boxes();
    assert!(base.intersect(&clip));
    assert!(clip.intersect(&base));
}

#[test]
fn reprojected_box_no_longer_intersects() {
    let (base, mut clip) = reference_boxes();
    clip.apply_transform(&na::Translation3::new(0.0, 0.0, 100.0));
    assert!(!base.intersect(&clip));
}

/// Largest gap between the two boxes' projections onto any of the fifteen
/// candidate separating axes. Positive means disjoint, negative overlapping.
fn separation(a: &Obb, b: &Obb) -> f64 {
    let axes_of = |obb: &Obb| {
        let rotation = obb.orientation().to_rotation_matrix();
        [0, 1, 2].map(|i| rotation.matrix().column(i).into_owned())
    };
    let a_axes = axes_of(a);
    let b_axes = axes_of(b);

    let mut candidates: Vec<na::Vector3<f64>> = a_axes.iter().chain(&b_axes).copied().collect();
    for u in &a_axes {
        for v in &b_axes {
            let cross = u.cross(v);
            if cross.norm() > 1e-6 {
                candidates.push(cross.normalize());
            }
        }
    }

    let radius = |axes: &[na::Vector3<f64>; 3], half: &na::Vector3<f64>, n: &na::Vector3<f64>| {
        (0..3).map(|i| axes[i].dot(n).abs() * half[i].abs()).sum::<f64>()
    };
    let offset = b.center() - a.center();
    candidates
        .iter()
        .map(|n| {
            offset.dot(n).abs()
                - radius(&a_axes, a.half_extents(), n)
                - radius(&b_axes, b.half_extents(), n)
        })
        .fold(f64::NEG_INFINITY, f64::max)
}

prop_compose! {
    fn rotation_strategy()(
        roll in 0.0..2.0 * PI,
        pitch in -FRAC_PI_2..FRAC_PI_2,
        yaw in 0.0..2.0 * PI,
    ) -> na::UnitQuaternion<f64> {
        na::UnitQuaternion::from_euler_angles(roll, pitch, yaw)
    }
}

prop_compose! {
    fn obb_strategy(max_offset: f64)(
        x in -max_offset..max_offset,
        y in -max_offset..max_offset,
        z in -max_offset..max_offset,
        hx in 0.1..3.0,
        hy in 0.1..3.0,
        hz in 0.1..3.0,
        rotation in rotation_strategy(),
    ) -> Obb {
        Obb::new(na::Point3::new(x, y, z), na::Vector3::new(hx, hy, hz), rotation)
    }
}

proptest! {
    #[test]
    fn box_intersects_itself(obb in obb_strategy(1e3)) {
        prop_assert!(obb.intersect(&obb));
    }
}

proptest! {
    #[test]
    fn intersection_is_symmetric(a in obb_strategy(5.0), b in obb_strategy(5.0)) {
        prop_assert_eq!(a.intersect(&b), b.intersect(&a));
    }
}

proptest! {
    #[test]
    fn intersection_agrees_with_separating_axes(a in obb_strategy(5.0), b in obb_strategy(5.0)) {
        let gap = separation(&a, &b);
        if gap > 1e-6 {
            prop_assert!(!a.intersect(&b));
        } else if gap < -1e-6 {
            prop_assert!(a.intersect(&b));
        }
    }
}

proptest! {
    #[test]
    fn boxes_separated_along_x_are_disjoint(
        a in obb_strategy(5.0),
        b in obb_strategy(5.0),
        gap in 1e-3..10.0,
    ) {
        let x_radius = |obb: &Obb| {
            (0..CORNER_COUNT)
                .map(|i| (obb.corner(i).x - obb.center().x).abs())
                .fold(0.0, f64::max)
        };
        let mut shifted_center = *a.center();
        shifted_center.x += x_radius(&a) + x_radius(&b) + gap;
        let b = Obb::new(shifted_center, *b.half_extents(), b.orientation());

        prop_assert!(!a.intersect(&b));
        prop_assert!(!b.intersect(&a));
    }
}

proptest! {
    #[test]
    fn contained_corner_implies_intersection(a in obb_strategy(2.0), b in obb_strategy(2.0)) {
        if (0..CORNER_COUNT).any(|i| a.contains_point(&b.corner(i))) {
            prop_assert!(a.intersect(&b));
        }
    }
}
