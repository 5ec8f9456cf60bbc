use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

use crate::config::GridConfig;
use crate::consts::LINE_ALPHA;
use crate::field::Field;
use crate::geom::Point;
use crate::lattice::Lattice;
use crate::palette::{Palette, Rgb};
use crate::pointer::{FadeIn, PointerState};
use crate::render;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// A dot ready to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotSprite {
    pub center: Point,
    pub radius: f64,
    pub color: Rgb,
    pub alpha: f64,
}

/// A connecting line between two active dots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub from: Point,
    pub to: Point,
    pub alpha: f64,
}

/// Everything one frame draws or restyles.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// New canvas opacity, present only while fading in.
    pub opacity: Option<f64>,
    /// Smoothed pointer, used to place the glow element.
    pub pointer: Point,
    /// Content parallax offset in CSS pixels.
    pub parallax: Point,
    pub dots: Vec<DotSprite>,
    pub links: Vec<Link>,
}

impl Frame {
    fn clear(&mut self) {
        self.opacity = None;
        self.dots.clear();
        self.links.clear();
    }
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub config: GridConfig,
    pub lattice: Lattice,
    pub pointer: PointerState,
    pub fade: FadeIn,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
    field: Field,
    palette: Palette,
    active: Vec<usize>,
    frame: Frame,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new(config: GridConfig) -> Self {
        Self {
            field: Field::new(config.influence_radius),
            palette: Palette::new(config.bands.clone()),
            fade: FadeIn::new(config.fade_step),
            config,
            lattice: Lattice::default(),
            pointer: PointerState::new(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
            active: Vec::new(),
            frame: Frame::default(),
        }
    }

    // --- Viewport ---

    /// Record new viewport dimensions and rebuild the lattice from scratch.
    pub fn set_viewport(&mut self, width: f64, height: f64, dpr: f64) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        self.lattice = Lattice::build(width, height, self.config.spacing);
        tracing::debug!(
            width,
            height,
            dpr = self.dpr,
            dots = self.lattice.len(),
            "dot grid lattice rebuilt"
        );
    }

    // --- Input events ---

    pub fn on_pointer_move(&mut self, point: Point) {
        self.pointer.move_to(point);
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer.release();
    }

    /// Track the first touch point. A touch move without touches is ignored.
    pub fn on_touch_move(&mut self, first_touch: Option<Point>) {
        if let Some(point) = first_touch {
            self.pointer.move_to(point);
        }
    }

    pub fn on_touch_end(&mut self) {
        self.pointer.release();
    }

    // --- Frame ---

    /// Advance every animated value by one frame and collect the draw list.
    pub fn step(&mut self) -> &Frame {
        self.frame.clear();
        self.frame.opacity = self.fade.advance();

        let pointer = self.pointer.advance(self.config.pointer_smoothing);
        self.frame.pointer = pointer;
        self.frame.parallax = self.parallax_offset(pointer);

        self.active.clear();
        for (index, dot) in self.lattice.dots_mut().iter_mut().enumerate() {
            let reaction = self.field.react(dot, pointer, &self.palette);
            if reaction.active {
                self.active.push(index);
            }
            self.frame.dots.push(DotSprite {
                center: dot.pos,
                radius: reaction.radius,
                color: reaction.color,
                alpha: reaction.alpha,
            });
        }

        self.collect_links();
        &self.frame
    }

    /// The most recent frame produced by [`Self::step`].
    #[must_use]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Indices of the dots that were active in the last frame.
    #[must_use]
    pub fn active(&self) -> &[usize] {
        &self.active
    }

    /// Offset for the content element, opposite the pointer's offset from center.
    #[must_use]
    pub fn parallax_offset(&self, pointer: Point) -> Point {
        let (w, h) = (self.viewport_width, self.viewport_height);
        if w <= 0.0 || h <= 0.0 {
            return Point::default();
        }
        let cx = (pointer.x - w * 0.5) / w;
        let cy = (pointer.y - h * 0.5) / h;
        let strength = self.config.parallax_strength;
        Point::new(cx * -strength, cy * -strength)
    }

    // Pairwise over the active subset only; no cap on its size.
    fn collect_links(&mut self) {
        let max = self.config.line_max_dist;
        let dots = self.lattice.dots();
        for (i, &a) in self.active.iter().enumerate() {
            for &b in &self.active[i + 1..] {
                let (from, to) = (dots[a].pos, dots[b].pos);
                let dist = from.distance(to);
                if dist < max {
                    let alpha = (1.0 - dist / max) * LINE_ALPHA;
                    self.frame.links.push(Link { from, to, alpha });
                }
            }
        }
    }
}

/// The full grid engine. Wraps `EngineCore` and owns the browser elements it draws to.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    glow: Option<HtmlElement>,
    content: Option<HtmlElement>,
    pub core: EngineCore,
}

impl Engine {
    /// Create an engine bound to a canvas and its 2D context.
    #[must_use]
    pub fn new(
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        glow: Option<HtmlElement>,
        content: Option<HtmlElement>,
        config: GridConfig,
    ) -> Self {
        Self { canvas, ctx, glow, content, core: EngineCore::new(config) }
    }

    /// Hide the canvas until the fade-in starts.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the style property cannot be set.
    pub fn hide(&self) -> Result<(), JsValue> {
        render::set_opacity(&self.canvas, 0.0)
    }

    // --- Viewport ---

    /// Resize the backing store for `dpr` and rebuild the lattice.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas style or context transform cannot be updated.
    pub fn set_viewport(&mut self, width: f64, height: f64, dpr: f64) -> Result<(), JsValue> {
        self.core.set_viewport(width, height, dpr);
        render::size_surface(&self.canvas, &self.ctx, self.core.viewport_width, self.core.viewport_height, self.core.dpr)
    }

    // --- Delegated input events ---

    pub fn on_pointer_move(&mut self, point: Point) {
        self.core.on_pointer_move(point);
    }

    pub fn on_pointer_leave(&mut self) {
        self.core.on_pointer_leave();
    }

    pub fn on_touch_move(&mut self, first_touch: Option<Point>) {
        self.core.on_touch_move(first_touch);
    }

    pub fn on_touch_end(&mut self) {
        self.core.on_touch_end();
    }

    // --- Render ---

    /// Step the animation and draw the resulting frame.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` or style call fails.
    pub fn render(&mut self) -> Result<(), JsValue> {
        let (width, height) = (self.core.viewport_width, self.core.viewport_height);
        let frame = self.core.step();
        render::draw(&self.ctx, frame, width, height)?;
        render::apply_styles(&self.canvas, self.glow.as_ref(), self.content.as_ref(), frame)
    }
}
