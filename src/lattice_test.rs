#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::SPACING;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn expected_count(width: f64, height: f64, spacing: f64) -> usize {
    let cols = (width / spacing).ceil() as usize + 2;
    let rows = (height / spacing).ceil() as usize + 2;
    cols * rows
}

// =============================================================
// Shape
// =============================================================

#[test]
fn build_100_by_100_has_five_by_five() {
    let lattice = Lattice::build(100.0, 100.0, SPACING);
    assert_eq!(lattice.cols(), 5);
    assert_eq!(lattice.rows(), 5);
    assert_eq!(lattice.len(), 25);
}

#[test]
fn build_100_by_100_origin_is_centered() {
    let lattice = Lattice::build(100.0, 100.0, SPACING);
    assert!(approx_eq(lattice.origin().x, -18.0));
    assert!(approx_eq(lattice.origin().y, -18.0));
    assert_eq!(lattice.dots()[0].home, lattice.origin());
}

#[test]
fn count_matches_formula_across_sizes() {
    for &(w, h) in &[
        (0.0, 0.0),
        (1.0, 1.0),
        (34.0, 34.0),
        (35.0, 68.0),
        (1280.0, 720.0),
        (1920.0, 1080.0),
        (375.0, 812.0),
    ] {
        let lattice = Lattice::build(w, h, SPACING);
        assert_eq!(lattice.len(), expected_count(w, h, SPACING), "viewport {w}x{h}");
    }
}

#[test]
fn zero_viewport_yields_margin_only_lattice() {
    let lattice = Lattice::build(0.0, 0.0, SPACING);
    assert_eq!(lattice.cols(), 2);
    assert_eq!(lattice.rows(), 2);
    assert!(approx_eq(lattice.origin().x, -17.0));
}

#[test]
fn negative_viewport_is_treated_as_zero() {
    let lattice = Lattice::build(-500.0, -1.0, SPACING);
    assert_eq!(lattice.len(), 4);
}

#[test]
fn nan_viewport_is_treated_as_zero() {
    let lattice = Lattice::build(f64::NAN, 100.0, SPACING);
    assert_eq!(lattice.cols(), 2);
    assert_eq!(lattice.rows(), 5);
}

#[test]
fn default_lattice_is_empty() {
    let lattice = Lattice::default();
    assert!(lattice.is_empty());
    assert_eq!(lattice.cols(), 0);
}

// =============================================================
// Placement
// =============================================================

#[test]
fn dots_are_column_major() {
    let lattice = Lattice::build(100.0, 100.0, SPACING);
    let dots = lattice.dots();
    assert_eq!((dots[0].col, dots[0].row), (0, 0));
    assert_eq!((dots[1].col, dots[1].row), (0, 1));
    assert_eq!((dots[5].col, dots[5].row), (1, 0));
}

#[test]
fn neighbours_are_one_spacing_apart() {
    let lattice = Lattice::build(300.0, 200.0, SPACING);
    let dots = lattice.dots();
    let rows = lattice.rows() as usize;
    assert!(approx_eq(dots[1].home.y - dots[0].home.y, SPACING));
    assert!(approx_eq(dots[rows].home.x - dots[0].home.x, SPACING));
}

#[test]
fn rendered_position_starts_at_home() {
    let lattice = Lattice::build(640.0, 480.0, SPACING);
    assert!(lattice.dots().iter().all(|d| d.pos == d.home));
}

#[test]
fn lattice_covers_viewport_with_margin() {
    for &(w, h) in &[(100.0, 100.0), (1280.0, 720.0), (33.0, 999.0)] {
        let lattice = Lattice::build(w, h, SPACING);
        for dot in lattice.dots() {
            assert!(dot.home.x >= -2.0 * SPACING && dot.home.x <= w + 2.0 * SPACING);
            assert!(dot.home.y >= -2.0 * SPACING && dot.home.y <= h + 2.0 * SPACING);
        }
        let first = lattice.dots()[0].home;
        let last = lattice.dots()[lattice.len() - 1].home;
        assert!(first.x <= 0.0 && first.y <= 0.0, "grid must start at or before the top-left edge");
        assert!(last.x >= w && last.y >= h, "grid must end at or past the bottom-right edge");
    }
}

#[test]
fn grid_is_symmetric_about_viewport_center() {
    let (w, h) = (1000.0, 600.0);
    let lattice = Lattice::build(w, h, SPACING);
    let first = lattice.dots()[0].home;
    let last = lattice.dots()[lattice.len() - 1].home;
    assert!(approx_eq(first.x + last.x, w));
    assert!(approx_eq(first.y + last.y, h));
}

#[test]
fn rebuild_replaces_every_dot() {
    let mut lattice = Lattice::build(100.0, 100.0, SPACING);
    for dot in lattice.dots_mut() {
        dot.pos = Point::new(999.0, 999.0);
    }
    let lattice = Lattice::build(100.0, 100.0, SPACING);
    assert!(lattice.dots().iter().all(|d| d.pos == d.home));
}

// =============================================================
// Size cap
// =============================================================

#[test]
fn sub_pixel_spacing_yields_empty_lattice() {
    let lattice = Lattice::build(1920.0, 1080.0, 0.000_001);
    assert!(lattice.is_empty());
    assert_eq!(lattice.cols(), 0);
}

#[test]
fn huge_viewport_yields_empty_lattice() {
    let lattice = Lattice::build(1e12, 1e12, SPACING);
    assert!(lattice.is_empty());
}

#[test]
fn grid_at_the_cap_is_built() {
    // 498 x 498 cells plus margin = 500 x 500 = 250_000 dots.
    let lattice = Lattice::build(498.0, 498.0, 1.0);
    assert_eq!(lattice.len(), crate::consts::MAX_DOTS);
    let lattice = Lattice::build(499.0, 498.0, 1.0);
    assert!(lattice.is_empty());
}

#[test]
fn minimum_spacing_covers_a_desktop_viewport_within_the_cap() {
    let lattice = Lattice::build(1280.0, 180.0, 1.0);
    assert_eq!(lattice.len(), 1282 * 182);
}
