#![allow(clippy::float_cmp)]

use super::*;

const RADII: [f64; 5] = [1.0, 1.5, 2.0, 2.5, 3.0];

// --- Origin and degenerate radius ---

#[test]
fn origin_is_always_a_hit() {
    for r in RADII {
        assert!(classify(0.0, 0.0, r), "origin must hit for r = {r}");
    }
}

#[test]
fn zero_radius_collapses_to_origin() {
    assert!(classify(0.0, 0.0, 0.0));
    assert!(!classify(0.1, 0.0, 0.0));
    assert!(!classify(0.0, 0.1, 0.0));
    assert!(!classify(-0.1, 0.1, 0.0));
}

// --- Quarter disk (x≥0, y≥0) ---

#[test]
fn quarter_disk_interior() {
    assert!(Shape::QuarterDisk.contains(0.5, 0.5, 2.0));
    assert!(classify(1.0, 1.0, 2.0));
}

#[test]
fn quarter_disk_arc_boundary_is_a_hit() {
    for r in RADII {
        for deg in 0..=90 {
            let theta = f64::from(deg).to_radians();
            let (x, y) = (r * theta.cos(), r * theta.sin());
            // cos/sin can land a hair outside r²; pull in by one ulp-scale nudge.
            let scale = 1.0 - 1e-15;
            assert!(
                classify(x * scale, y * scale, r),
                "arc point at {deg}° must hit for r = {r}"
            );
        }
    }
}

#[test]
fn quarter_disk_just_outside_arc_is_a_miss() {
    let r = 2.0;
    assert!(!classify(r + 1e-9, 0.0, r));
    assert!(!classify(0.0, r + 1e-9, r));
    let d = (r / 2.0_f64.sqrt()) + 1e-6;
    assert!(!classify(d, d, r));
}

#[test]
fn quarter_disk_does_not_leak_into_other_quadrants() {
    // (-0.5, 0.5) is inside the *circle* of radius 2 but x < 0.
    assert!(!Shape::QuarterDisk.contains(-0.5, 0.5, 2.0));
    assert!(!Shape::QuarterDisk.contains(0.5, -0.5, 2.0));
}

// --- Rectangle (x≥0, y≤0) ---

#[test]
fn rectangle_interior() {
    assert!(Shape::Rectangle.contains(1.0, -0.5, 2.0));
    assert!(classify(1.9, -0.9, 2.0));
}

#[test]
fn rectangle_corners_are_hits() {
    let r = 2.0;
    assert!(Shape::Rectangle.contains(0.0, 0.0, r));
    assert!(Shape::Rectangle.contains(r, 0.0, r));
    assert!(Shape::Rectangle.contains(0.0, -r / 2.0, r));
    assert!(Shape::Rectangle.contains(r, -r / 2.0, r));
}

#[test]
fn rectangle_just_outside_is_a_miss() {
    let r = 2.0;
    assert!(!Shape::Rectangle.contains(r + 1e-9, -0.5, r));
    assert!(!Shape::Rectangle.contains(1.0, -r / 2.0 - 1e-9, r));
}

#[test]
fn shared_disk_rectangle_boundary() {
    // (r, 0) is on the arc and on the rectangle edge; just past it is a miss.
    for r in RADII {
        assert!(classify(r, 0.0, r));
        assert!(!classify(r + 1e-9, 0.0, r));
    }
}

// --- Triangle (x≤0, y≥0) ---

#[test]
fn triangle_interior() {
    assert!(Shape::Triangle.contains(-0.5, 0.5, 2.0));
    assert!(classify(-1.0, 0.5, 2.0));
}

#[test]
fn triangle_hypotenuse_is_a_hit() {
    // y = x + r from (-r, 0) to (0, r).
    let r = 2.0;
    assert!(classify(-2.0, 0.0, r));
    assert!(classify(-1.0, 1.0, r));
    assert!(classify(0.0, 2.0, r));
}

#[test]
fn triangle_vertices() {
    for r in RADII {
        assert!(classify(-r, 0.0, r));
        assert!(!classify(-r - 1e-9, 0.0, r));
    }
}

#[test]
fn triangle_above_hypotenuse_is_a_miss() {
    assert!(!classify(-1.0, 1.0 + 1e-9, 2.0));
    assert!(!classify(-1.5, 1.0, 2.0));
}

// --- Third quadrant (x<0, y<0) ---

#[test]
fn third_quadrant_never_hits() {
    for r in RADII {
        assert!(!classify(-0.001, -0.001, r));
        assert!(!classify(-0.5, -0.5, r));
        assert!(!classify(-r, -r, r));
    }
}

// --- Spec scenarios ---

#[test]
fn scenario_one_two_radius_two_misses() {
    // x≥0, y≥0 but 1² + 2² = 5 > 4.
    assert!(!classify(1.0, 2.0, 2.0));
}

#[test]
fn scenario_minus_one_one_radius_two_hits() {
    // y ≤ x + r → 1 ≤ 1, boundary inclusive.
    assert!(classify(-1.0, 1.0, 2.0));
}

// --- Predicate independence ---

#[test]
fn each_shape_claims_only_its_quadrant_point() {
    let r = 2.0;
    let disk_pt = (1.0, 1.0);
    let rect_pt = (1.0, -0.5);
    let tri_pt = (-0.5, 0.5);

    assert!(Shape::QuarterDisk.contains(disk_pt.0, disk_pt.1, r));
    assert!(!Shape::Rectangle.contains(disk_pt.0, disk_pt.1, r));
    assert!(!Shape::Triangle.contains(disk_pt.0, disk_pt.1, r));

    assert!(!Shape::QuarterDisk.contains(rect_pt.0, rect_pt.1, r));
    assert!(Shape::Rectangle.contains(rect_pt.0, rect_pt.1, r));
    assert!(!Shape::Triangle.contains(rect_pt.0, rect_pt.1, r));

    assert!(!Shape::QuarterDisk.contains(tri_pt.0, tri_pt.1, r));
    assert!(!Shape::Rectangle.contains(tri_pt.0, tri_pt.1, r));
    assert!(Shape::Triangle.contains(tri_pt.0, tri_pt.1, r));
}
