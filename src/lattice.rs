//! Lattice construction: a centered grid of dots covering the viewport.
//!
//! The lattice is rebuilt from scratch on every viewport change. No dot
//! survives a rebuild, so per-dot easing state resets with it.

#[cfg(test)]
#[path = "lattice_test.rs"]
mod lattice_test;

use crate::consts::{MARGIN_CELLS, MAX_DOTS};
use crate::geom::Point;

/// One lattice node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    /// Current rendered position.
    pub pos: Point,
    /// Undisplaced position assigned at construction.
    pub home: Point,
    pub col: u32,
    pub row: u32,
}

impl Dot {
    #[must_use]
    pub fn new(home: Point, col: u32, row: u32) -> Self {
        Self { pos: home, home, col, row }
    }
}

/// Ordered dots in column-major order, plus the grid shape that produced them.
#[derive(Debug, Clone, Default)]
pub struct Lattice {
    dots: Vec<Dot>,
    cols: u32,
    rows: u32,
    origin: Point,
}

impl Lattice {
    /// Build a lattice covering `width` x `height` with `spacing` between neighbours.
    ///
    /// Adds one column/row of margin on each side and centers the grid so the
    /// leftover space is split evenly. Negative or non-finite dimensions are
    /// treated as zero. A grid needing more than [`MAX_DOTS`] dots is not
    /// built; the result is empty.
    #[must_use]
    pub fn build(width: f64, height: f64, spacing: f64) -> Self {
        let width = sanitize_extent(width);
        let height = sanitize_extent(height);
        let cols = cell_count(width, spacing);
        let rows = cell_count(height, spacing);
        let Some(count) = (cols as usize).checked_mul(rows as usize).filter(|&n| n <= MAX_DOTS) else {
            tracing::warn!(
                width,
                height,
                spacing,
                cols,
                rows,
                max = MAX_DOTS,
                "dot grid too dense; lattice left empty"
            );
            return Self::default();
        };
        let origin = Point::new(
            (width - f64::from(cols.saturating_sub(1)) * spacing) / 2.0,
            (height - f64::from(rows.saturating_sub(1)) * spacing) / 2.0,
        );

        let mut dots = Vec::with_capacity(count);
        for col in 0..cols {
            for row in 0..rows {
                let home = Point::new(
                    origin.x + f64::from(col) * spacing,
                    origin.y + f64::from(row) * spacing,
                );
                dots.push(Dot::new(home, col, row));
            }
        }

        Self { dots, cols, rows, origin }
    }

    #[must_use]
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn dots_mut(&mut self) -> &mut [Dot] {
        &mut self.dots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    #[must_use]
    pub fn cols(&self) -> u32 {
        self.cols
    }

    #[must_use]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Home position of the first dot (column 0, row 0).
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }
}

fn sanitize_extent(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// `ceil(extent / spacing) + 2`, saturating at `u32::MAX`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn cell_count(extent: f64, spacing: f64) -> u32 {
    let cells = (extent / spacing).ceil() + MARGIN_CELLS;
    if cells.is_finite() { cells.clamp(0.0, f64::from(u32::MAX)) as u32 } else { MARGIN_CELLS as u32 }
}
