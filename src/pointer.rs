//! Pointer tracking and the surface fade-in.
//!
//! Input callbacks only write the raw pointer. The frame loop reads it once
//! per frame and advances the smoothed pointer, which is what every visual
//! reaction uses. With no pointer present both coordinates sit at an
//! off-screen sentinel far enough away that no dot is influenced.

#[cfg(test)]
#[path = "pointer_test.rs"]
mod pointer_test;

use crate::consts::{FADE_STEP, POINTER_SENTINEL};
use crate::geom::Point;

/// The off-screen resting position.
pub const SENTINEL: Point = Point::new(POINTER_SENTINEL, POINTER_SENTINEL);

/// Raw and smoothed pointer coordinates in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerState {
    raw: Point,
    smooth: Point,
}

impl Default for PointerState {
    fn default() -> Self {
        Self { raw: SENTINEL, smooth: SENTINEL }
    }
}

impl PointerState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last position reported by an input event.
    #[must_use]
    pub fn raw(&self) -> Point {
        self.raw
    }

    /// Lagged position used for rendering.
    #[must_use]
    pub fn smooth(&self) -> Point {
        self.smooth
    }

    /// Whether the raw pointer is at the sentinel (no mouse or touch present).
    #[must_use]
    pub fn is_absent(&self) -> bool {
        self.raw == SENTINEL
    }

    /// Record a new raw position.
    pub fn move_to(&mut self, point: Point) {
        self.raw = point;
    }

    /// Reset the raw position to the sentinel. The smoothed position follows over later frames.
    pub fn release(&mut self) {
        self.raw = SENTINEL;
    }

    /// Blend the smoothed position toward the raw one by `factor`.
    pub fn advance(&mut self, factor: f64) -> Point {
        self.smooth = self.smooth.lerp(self.raw, factor);
        self.smooth
    }
}

/// Canvas opacity ramp from 0 to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeIn {
    opacity: f64,
    step: f64,
}

impl Default for FadeIn {
    fn default() -> Self {
        Self::new(FADE_STEP)
    }
}

impl FadeIn {
    #[must_use]
    pub fn new(step: f64) -> Self {
        Self { opacity: 0.0, step }
    }

    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.opacity >= 1.0
    }

    /// Step the opacity. Returns the new value, or `None` once saturated.
    pub fn advance(&mut self) -> Option<f64> {
        if self.is_complete() {
            return None;
        }
        self.opacity = (self.opacity + self.step).min(1.0);
        Some(self.opacity)
    }
}
