#![allow(clippy::float_cmp)]

use super::*;
use crate::consts::POINTER_SENTINEL;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn dot_at(x: f64, y: f64) -> Dot {
    Dot::new(Point::new(x, y), 0, 0)
}

fn sentinel() -> Point {
    Point::new(POINTER_SENTINEL, POINTER_SENTINEL)
}

// =============================================================
// Ease
// =============================================================

#[test]
fn ease_is_one_at_pointer() {
    assert_eq!(Field::default().ease_at(0.0), Some(1.0));
}

#[test]
fn ease_is_cubic() {
    let ease = Field::default().ease_at(100.0).unwrap_or_default();
    assert!(approx_eq(ease, 0.125));
}

#[test]
fn ease_is_none_at_and_beyond_radius() {
    let field = Field::default();
    assert_eq!(field.ease_at(200.0), None);
    assert_eq!(field.ease_at(5000.0), None);
}

#[test]
fn ease_decreases_with_distance() {
    let field = Field::new(150.0);
    let mut last = f64::INFINITY;
    for d in 0..150 {
        let ease = field.ease_at(f64::from(d)).unwrap_or_default();
        assert!(ease < last);
        last = ease;
    }
}

// =============================================================
// Idle path
// =============================================================

#[test]
fn far_pointer_gives_idle_reaction() {
    let mut dot = dot_at(0.0, 0.0);
    let reaction = Field::default().react(&mut dot, Point::new(500.0, 0.0), &Palette::default());
    assert_eq!(reaction, Reaction::idle());
    assert_eq!(reaction.color, Rgb::new(255.0, 255.0, 255.0));
    assert_eq!(reaction.radius, 1.0);
    assert_eq!(reaction.alpha, 0.06);
}

#[test]
fn idle_reaction_is_independent_of_history() {
    let field = Field::default();
    let palette = Palette::default();
    let mut dot = dot_at(0.0, 0.0);
    for _ in 0..30 {
        field.react(&mut dot, Point::new(10.0, 10.0), &palette);
    }
    let reaction = field.react(&mut dot, Point::new(800.0, 800.0), &palette);
    assert_eq!(reaction, Reaction::idle());
}

#[test]
fn sentinel_pointer_leaves_dot_at_home() {
    let field = Field::default();
    let palette = Palette::default();
    let mut dot = dot_at(-18.0, -18.0);
    for _ in 0..100 {
        field.react(&mut dot, sentinel(), &palette);
        assert_eq!(dot.pos, dot.home);
    }
}

#[test]
fn displaced_dot_relaxes_home_slowly() {
    let mut dot = dot_at(0.0, 0.0);
    dot.pos = Point::new(10.0, 0.0);
    Field::default().react(&mut dot, sentinel(), &Palette::default());
    assert!(approx_eq(dot.pos.x, 10.0 * (1.0 - 0.06)));
}

// =============================================================
// Influenced path
// =============================================================

#[test]
fn near_pointer_blends_toward_attracted_target() {
    let mut dot = dot_at(0.0, 0.0);
    Field::default().react(&mut dot, Point::new(100.0, 0.0), &Palette::default());
    // ease = 0.125, target = 100 * 0.125 * 0.1 = 1.25, blended by 0.1.
    assert!(approx_eq(dot.pos.x, 0.125));
    assert!(approx_eq(dot.pos.y, 0.0));
}

#[test]
fn repeated_frames_converge_on_target_without_overshoot() {
    let field = Field::default();
    let palette = Palette::default();
    let mut dot = dot_at(0.0, 0.0);
    let pointer = Point::new(100.0, 0.0);
    let target = 1.25;
    let mut last = dot.pos.x;
    for _ in 0..300 {
        field.react(&mut dot, pointer, &palette);
        assert!(dot.pos.x >= last);
        assert!(dot.pos.x <= target + EPSILON);
        last = dot.pos.x;
    }
    assert!((dot.pos.x - target).abs() < 1e-6);
}

#[test]
fn near_pointer_grows_and_brightens() {
    let mut dot = dot_at(0.0, 0.0);
    let reaction = Field::default().react(&mut dot, Point::new(0.0, 0.0), &Palette::default());
    assert!(approx_eq(reaction.radius, 3.5));
    assert!(approx_eq(reaction.alpha, 0.91));
    assert!(reaction.active);
}

#[test]
fn faint_influence_is_not_active() {
    // ease = (1 - 190/200)^3 = 0.000125 < 0.03
    let mut dot = dot_at(0.0, 0.0);
    let reaction = Field::default().react(&mut dot, Point::new(190.0, 0.0), &Palette::default());
    assert!(!reaction.active);
    assert!(reaction.alpha > 0.06);
}

#[test]
fn active_threshold_boundary() {
    let field = Field::default();
    let palette = Palette::default();
    // ease > 0.03 ⇔ t > 0.03^(1/3) ≈ 0.3107 ⇔ distance < ≈137.86
    let mut near = dot_at(0.0, 0.0);
    assert!(field.react(&mut near, Point::new(137.0, 0.0), &palette).active);
    let mut far = dot_at(0.0, 0.0);
    assert!(!field.react(&mut far, Point::new(139.0, 0.0), &palette).active);
}

#[test]
fn influenced_color_comes_from_palette() {
    let palette = Palette::default();
    let mut dot = dot_at(0.0, 0.0);
    let pointer = Point::new(0.0, 50.0);
    let reaction = Field::default().react(&mut dot, pointer, &palette);
    let ease = Field::default().ease_at(50.0).unwrap_or_default();
    assert_eq!(reaction.color, palette.color_toward(pointer, ease));
}
