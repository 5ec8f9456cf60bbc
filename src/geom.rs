#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in CSS pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Blend each axis toward `target` by `t`.
    #[must_use]
    pub fn lerp(self, target: Self, t: f64) -> Self {
        Self { x: lerp(self.x, target.x, t), y: lerp(self.y, target.y, t) }
    }
}

/// Linear interpolation from `a` to `b`.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
