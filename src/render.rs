//! Rendering: draws a [`Frame`] to a 2D context and applies its style side effects.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`]
//! or element styles. It receives a finished frame and produces pixels; it
//! does not mutate any animation state.
//!
//! All fallible calls propagate errors via `Result<(), JsValue>`.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::TAU;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement};

use crate::consts::{LINE_COLOR, LINE_WIDTH};
use crate::engine::{DotSprite, Frame, Link};
use crate::geom::Point;

/// Clear the surface and draw dots, then links on top.
///
/// `viewport_w` and `viewport_h` are in CSS pixels; the context transform is
/// expected to already scale by the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    frame: &Frame,
    viewport_w: f64,
    viewport_h: f64,
) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);

    for dot in &frame.dots {
        draw_dot(ctx, dot)?;
    }

    if !frame.links.is_empty() {
        ctx.set_line_width(LINE_WIDTH);
        for link in &frame.links {
            draw_link(ctx, link);
        }
    }

    Ok(())
}

fn draw_dot(ctx: &CanvasRenderingContext2d, dot: &DotSprite) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(dot.center.x, dot.center.y, dot.radius, 0.0, TAU)?;
    ctx.set_fill_style_str(&dot.color.css_rgba(dot.alpha));
    ctx.fill();
    Ok(())
}

fn draw_link(ctx: &CanvasRenderingContext2d, link: &Link) {
    ctx.begin_path();
    ctx.move_to(link.from.x, link.from.y);
    ctx.line_to(link.to.x, link.to.y);
    ctx.set_stroke_style_str(&LINE_COLOR.css_rgba(link.alpha));
    ctx.stroke();
}

/// Push the frame's opacity, glow position, and parallax transform to the page.
///
/// Missing companion elements are skipped.
///
/// # Errors
///
/// Returns `Err` if a style property cannot be set.
pub fn apply_styles(
    canvas: &HtmlCanvasElement,
    glow: Option<&HtmlElement>,
    content: Option<&HtmlElement>,
    frame: &Frame,
) -> Result<(), JsValue> {
    if let Some(opacity) = frame.opacity {
        set_opacity(canvas, opacity)?;
    }

    if let Some(glow) = glow {
        let style = glow.style();
        style.set_property("left", &px(frame.pointer.x))?;
        style.set_property("top", &px(frame.pointer.y))?;
    }

    if let Some(content) = content {
        content.style().set_property("transform", &translate(frame.parallax))?;
    }

    Ok(())
}

/// Set the canvas CSS opacity.
///
/// # Errors
///
/// Returns `Err` if the style property cannot be set.
pub fn set_opacity(canvas: &HtmlCanvasElement, opacity: f64) -> Result<(), JsValue> {
    canvas.style().set_property("opacity", &opacity.to_string())
}

/// Size the backing store to `width × dpr` by `height × dpr` and scale the context by `dpr`.
///
/// # Errors
///
/// Returns `Err` if the CSS size or context transform cannot be set.
pub fn size_surface(
    canvas: &HtmlCanvasElement,
    ctx: &CanvasRenderingContext2d,
    width: f64,
    height: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    canvas.set_width(device_pixels(width, dpr));
    canvas.set_height(device_pixels(height, dpr));
    let style = canvas.style();
    style.set_property("width", &px(width))?;
    style.set_property("height", &px(height))?;
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)
}

/// Backing-store size for a CSS length, truncated like a canvas `width` assignment.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn device_pixels(css: f64, dpr: f64) -> u32 {
    let device = css * dpr;
    if device.is_finite() { device.clamp(0.0, f64::from(u32::MAX)) as u32 } else { 0 }
}

/// CSS pixel length. Negative zero prints as `0px`.
fn px(value: f64) -> String {
    format!("{}px", value + 0.0)
}

/// CSS `translate()` for the content parallax offset.
fn translate(offset: Point) -> String {
    format!("translate({},{})", px(offset.x), px(offset.y))
}
