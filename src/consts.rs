//! Shared numeric constants for the dot grid.

use crate::palette::Rgb;

// ── Lattice ─────────────────────────────────────────────────────

/// Distance between neighbouring dots, in CSS pixels.
pub const SPACING: f64 = 34.0;

/// Extra rows/columns added beyond the viewport cover (one on each side).
pub const MARGIN_CELLS: f64 = 2.0;

/// Smallest accepted spacing, in CSS pixels.
pub const MIN_SPACING: f64 = 1.0;

/// Upper bound on lattice size. A viewport/spacing pair that needs more dots
/// than this gets an empty lattice instead.
pub const MAX_DOTS: usize = 250_000;

// ── Pointer ─────────────────────────────────────────────────────

/// Off-screen coordinate used when no pointer or touch is present.
pub const POINTER_SENTINEL: f64 = -1000.0;

/// Per-frame exponential blend of the smoothed pointer toward the raw pointer.
pub const POINTER_SMOOTHING: f64 = 0.12;

// ── Influence ───────────────────────────────────────────────────

/// Pointer influence radius in CSS pixels.
pub const INFLUENCE_RADIUS: f64 = 200.0;

/// Fraction of the home-to-pointer delta a fully eased dot is pulled by.
pub const ATTRACTION: f64 = 0.1;

/// Per-frame blend toward the attracted target while inside the radius.
pub const FOLLOW_BLEND: f64 = 0.1;

/// Per-frame blend back toward home while outside the radius.
pub const RELAX_BLEND: f64 = 0.06;

/// Ease above which a dot is eligible for connecting lines.
pub const ACTIVE_THRESHOLD: f64 = 0.03;

// ── Dot appearance ──────────────────────────────────────────────

/// Idle dot radius in CSS pixels.
pub const BASE_RADIUS: f64 = 1.0;

/// Radius added at full ease.
pub const RADIUS_GROWTH: f64 = 2.5;

/// Idle dot opacity.
pub const IDLE_ALPHA: f64 = 0.06;

/// Opacity added at full ease.
pub const ALPHA_GAIN: f64 = 0.85;

/// Idle dot color.
pub const IDLE_COLOR: Rgb = Rgb::new(255.0, 255.0, 255.0);

// ── Palette ─────────────────────────────────────────────────────

pub const BLUE: Rgb = Rgb::new(110.0, 155.0, 255.0);
pub const TEAL: Rgb = Rgb::new(80.0, 210.0, 220.0);
pub const VIOLET: Rgb = Rgb::new(167.0, 139.0, 250.0);

// ── Links ───────────────────────────────────────────────────────

/// Maximum distance between two active dots for a connecting line.
pub const LINE_MAX_DIST: f64 = 75.0;

/// Line opacity at zero distance.
pub const LINE_ALPHA: f64 = 0.18;

/// Line stroke width in CSS pixels.
pub const LINE_WIDTH: f64 = 0.5;

pub const LINE_COLOR: Rgb = Rgb::new(140.0, 170.0, 255.0);

// ── Surface ─────────────────────────────────────────────────────

/// Opacity added to the canvas each frame until it is fully visible.
pub const FADE_STEP: f64 = 0.012;

/// Content parallax offset in CSS pixels at a normalized pointer offset of 1.
pub const PARALLAX_STRENGTH: f64 = 14.0;

// ── DOM ─────────────────────────────────────────────────────────

pub const CANVAS_ID: &str = "grid";
pub const GLOW_ID: &str = "glow";
pub const CONTENT_ID: &str = "content";
