//! Angular color bands for dots near the pointer.
//!
//! The direction from a dot to the pointer is normalized to `[0, 1]` around
//! the full circle. Each [`ColorBand`] covers a slice of that range and blends
//! between two endpoint colors; the blend amount is scaled by the dot's ease
//! so faint dots stay close to the band's starting color.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use std::f64::consts::{PI, TAU};

use serde::Deserialize;

use crate::consts::{BLUE, TEAL, VIOLET};
use crate::geom::{Point, lerp};

/// An RGB color with channels in `0..=255`, kept as floats for blending.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub fn lerp(self, to: Self, t: f64) -> Self {
        Self { r: lerp(self.r, to.r, t), g: lerp(self.g, to.g, t), b: lerp(self.b, to.b, t) }
    }

    /// CSS `rgba()` string with channels truncated toward zero.
    #[must_use]
    pub fn css_rgba(self, alpha: f64) -> String {
        format!("rgba({},{},{},{alpha})", channel(self.r), channel(self.g), channel(self.b))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

/// One slice of the normalized angle range.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ColorBand {
    /// Inclusive lower bound of the slice.
    pub start: f64,
    /// Exclusive upper bound of the slice (inclusive for the last band).
    pub end: f64,
    pub from: Rgb,
    pub to: Rgb,
}

impl ColorBand {
    #[must_use]
    pub const fn new(start: f64, end: f64, from: Rgb, to: Rgb) -> Self {
        Self { start, end, from, to }
    }

    /// Position of `norm` within this band, `0.0` at `start` and `1.0` at `end`.
    ///
    /// Clamped to `[0, 1]`, so a `norm` in a gap before this band reads as `start`.
    #[must_use]
    pub fn position(&self, norm: f64) -> f64 {
        ((norm - self.start) / (self.end - self.start)).clamp(0.0, 1.0)
    }
}

/// The default three-band cycle: blue → teal → violet → blue.
pub const DEFAULT_BANDS: [ColorBand; 3] = [
    ColorBand::new(0.0, 0.33, BLUE, TEAL),
    ColorBand::new(0.33, 0.66, TEAL, VIOLET),
    ColorBand::new(0.66, 1.0, VIOLET, BLUE),
];

/// Ordered band lookup table.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    bands: Vec<ColorBand>,
}

impl Default for Palette {
    fn default() -> Self {
        Self { bands: DEFAULT_BANDS.to_vec() }
    }
}

impl Palette {
    /// Build a palette from ascending bands. An empty table falls back to the default bands.
    #[must_use]
    pub fn new(bands: Vec<ColorBand>) -> Self {
        if bands.is_empty() { Self::default() } else { Self { bands } }
    }

    #[must_use]
    pub fn bands(&self) -> &[ColorBand] {
        &self.bands
    }

    /// The band containing `norm`: the first whose `end` exceeds it, else the last.
    #[must_use]
    pub fn band_for(&self, norm: f64) -> Option<&ColorBand> {
        self.bands.iter().find(|band| norm < band.end).or_else(|| self.bands.last())
    }

    /// Color for a normalized angle, blended by `ease`.
    #[must_use]
    pub fn color_at(&self, norm: f64, ease: f64) -> Rgb {
        match self.band_for(norm) {
            Some(band) => band.from.lerp(band.to, band.position(norm) * ease),
            None => BLUE,
        }
    }

    /// Color for a dot whose pointer offset is `delta` (pointer minus home).
    #[must_use]
    pub fn color_toward(&self, delta: Point, ease: f64) -> Rgb {
        self.color_at(normalized_angle(delta), ease)
    }
}

/// `atan2(dy, dx)` mapped from `[-π, π]` to `[0, 1]`.
#[must_use]
pub fn normalized_angle(delta: Point) -> f64 {
    (delta.y.atan2(delta.x) + PI) / TAU
}
