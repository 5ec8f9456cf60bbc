//! Pointer influence on individual dots.
//!
//! A dot within the influence radius of the smoothed pointer is eased toward
//! it, grows, brightens, and takes on a band color. Outside the radius it
//! relaxes back home with idle styling. Both paths blend the rendered
//! position over several frames instead of jumping.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use crate::consts::{
    ACTIVE_THRESHOLD, ALPHA_GAIN, ATTRACTION, BASE_RADIUS, FOLLOW_BLEND, IDLE_ALPHA, IDLE_COLOR, INFLUENCE_RADIUS,
    RADIUS_GROWTH, RELAX_BLEND,
};
use crate::geom::Point;
use crate::lattice::Dot;
use crate::palette::{Palette, Rgb};

/// How one dot should be drawn this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reaction {
    pub radius: f64,
    pub alpha: f64,
    pub color: Rgb,
    /// Eligible for connecting lines this frame.
    pub active: bool,
}

impl Reaction {
    /// Idle styling used outside the influence radius.
    #[must_use]
    pub const fn idle() -> Self {
        Self { radius: BASE_RADIUS, alpha: IDLE_ALPHA, color: IDLE_COLOR, active: false }
    }
}

/// Influence parameters shared by every dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    pub radius: f64,
}

impl Default for Field {
    fn default() -> Self {
        Self { radius: INFLUENCE_RADIUS }
    }
}

impl Field {
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Cubic ease for a pointer `distance` away, or `None` outside the radius.
    #[must_use]
    pub fn ease_at(&self, distance: f64) -> Option<f64> {
        if distance < self.radius {
            let t = 1.0 - distance / self.radius;
            Some(t * t * t)
        } else {
            None
        }
    }

    /// Advance `dot` one frame toward its target and return its styling.
    pub fn react(&self, dot: &mut Dot, pointer: Point, palette: &Palette) -> Reaction {
        let delta = Point::new(pointer.x - dot.home.x, pointer.y - dot.home.y);
        let distance = dot.home.distance(pointer);

        let Some(ease) = self.ease_at(distance) else {
            dot.pos = dot.pos.lerp(dot.home, RELAX_BLEND);
            return Reaction::idle();
        };

        let pull = ease * ATTRACTION;
        let target = Point::new(dot.home.x + delta.x * pull, dot.home.y + delta.y * pull);
        dot.pos = dot.pos.lerp(target, FOLLOW_BLEND);

        Reaction {
            radius: BASE_RADIUS + ease * RADIUS_GROWTH,
            alpha: IDLE_ALPHA + ease * ALPHA_GAIN,
            color: palette.color_toward(delta, ease),
            active: ease > ACTIVE_THRESHOLD,
        }
    }
}
