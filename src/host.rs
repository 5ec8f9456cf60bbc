//! Browser host: element lookup, event wiring, and the animation-frame loop.
//!
//! Input listeners only write pointer and viewport fields on the engine; they
//! never draw. Drawing happens once per animation frame, and the next frame is
//! requested only after the current one finishes. Everything runs on the
//! browser's single thread, so a `RefCell` is enough to share the engine
//! between the loop and the listeners.
//!
//! The loop keeps itself alive through the pending frame callback. Dropping
//! the [`GridHandle`] does not stop it; call [`GridHandle::stop`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo_render::{AnimationFrame, request_animation_frame};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Document, Event, HtmlCanvasElement, HtmlElement, MouseEvent, TouchEvent, Window};

use crate::config::GridConfig;
use crate::engine::Engine;
use crate::error::MountError;
use crate::geom::Point;

/// Mount the dot grid on the page.
///
/// `config` is an optional JSON object of [`GridConfig`] overrides. An invalid
/// config is logged and replaced by the defaults. Returns `None`, leaving the
/// page untouched, when the canvas element or its 2D context is unavailable.
#[wasm_bindgen]
#[must_use]
pub fn mount(config: Option<String>) -> Option<GridHandle> {
    let config = config.map_or_else(GridConfig::default, |json| {
        GridConfig::from_json(&json).unwrap_or_else(|err| {
            tracing::warn!(%err, "invalid dot grid config; using defaults");
            GridConfig::default()
        })
    });

    match Host::mount(config) {
        Ok(host) => Some(GridHandle { host }),
        Err(err) => {
            tracing::debug!(%err, "dot grid disabled");
            None
        }
    }
}

/// Handle to a running grid. The only way to halt it is [`GridHandle::stop`].
#[wasm_bindgen]
pub struct GridHandle {
    host: Rc<Host>,
}

#[wasm_bindgen]
impl GridHandle {
    /// Cancel the pending frame and remove every listener. Idempotent.
    pub fn stop(&self) {
        self.host.stop();
    }

    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn running(&self) -> bool {
        self.host.running.get()
    }
}

impl GridHandle {
    /// Same as the `running` getter, for Rust callers.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running()
    }
}

struct Host {
    window: Window,
    engine: RefCell<Engine>,
    running: Cell<bool>,
    frame: RefCell<Option<AnimationFrame>>,
    listeners: RefCell<Vec<EventListener>>,
}

impl Host {
    fn mount(config: GridConfig) -> Result<Rc<Self>, MountError> {
        let window = web_sys::window().ok_or(MountError::MissingWindow)?;
        let document = window.document().ok_or(MountError::MissingDocument)?;
        let canvas = find_canvas(&document, &config.canvas_id)?;
        let ctx = context_2d(&canvas)?;
        let glow = find_html_element(&document, &config.glow_id);
        let content = find_html_element(&document, &config.content_id);
        tracing::debug!(
            canvas = %config.canvas_id,
            glow = glow.is_some(),
            content = content.is_some(),
            "mounting dot grid"
        );

        let mut engine = Engine::new(canvas, ctx, glow, content, config);
        engine.hide()?;
        let (width, height, dpr) = read_viewport(&window);
        engine.set_viewport(width, height, dpr)?;

        let host = Rc::new(Self {
            window,
            engine: RefCell::new(engine),
            running: Cell::new(true),
            frame: RefCell::new(None),
            listeners: RefCell::new(Vec::new()),
        });
        host.install_listeners(&document);
        host.schedule();
        Ok(host)
    }

    fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        self.frame.borrow_mut().take();
        self.listeners.borrow_mut().clear();
        tracing::debug!("dot grid stopped");
    }

    fn schedule(self: &Rc<Self>) {
        let host = Rc::clone(self);
        let handle = request_animation_frame(move |_ts| host.tick());
        *self.frame.borrow_mut() = Some(handle);
    }

    fn tick(self: &Rc<Self>) {
        self.frame.borrow_mut().take();
        if !self.running.get() {
            return;
        }
        if let Err(err) = self.engine.borrow_mut().render() {
            tracing::debug!(?err, "dot grid frame failed");
        }
        self.schedule();
    }

    fn resize(&self) {
        let (width, height, dpr) = read_viewport(&self.window);
        if let Err(err) = self.engine.borrow_mut().set_viewport(width, height, dpr) {
            tracing::debug!(?err, "dot grid resize failed");
        }
    }

    fn install_listeners(self: &Rc<Self>, document: &Document) {
        let mut listeners = Vec::with_capacity(5);

        let host = Rc::clone(self);
        listeners.push(EventListener::new(&self.window, "resize", move |_event: &Event| {
            host.resize();
        }));

        let host = Rc::clone(self);
        listeners.push(EventListener::new(document, "mousemove", move |event: &Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let point = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
            host.engine.borrow_mut().on_pointer_move(point);
        }));

        let host = Rc::clone(self);
        listeners.push(EventListener::new(document, "mouseleave", move |_event: &Event| {
            host.engine.borrow_mut().on_pointer_leave();
        }));

        let host = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            document,
            "touchmove",
            EventListenerOptions { phase: EventListenerPhase::Bubble, passive: true },
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<TouchEvent>() else {
                    return;
                };
                let first = event
                    .touches()
                    .get(0)
                    .map(|touch| Point::new(f64::from(touch.client_x()), f64::from(touch.client_y())));
                host.engine.borrow_mut().on_touch_move(first);
            },
        ));

        let host = Rc::clone(self);
        listeners.push(EventListener::new(document, "touchend", move |_event: &Event| {
            host.engine.borrow_mut().on_touch_end();
        }));

        *self.listeners.borrow_mut() = listeners;
    }
}

fn find_canvas(document: &Document, id: &str) -> Result<HtmlCanvasElement, MountError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| MountError::MissingSurface(id.to_owned()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| MountError::MissingSurface(id.to_owned()))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, MountError> {
    canvas
        .get_context("2d")?
        .ok_or(MountError::MissingContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| MountError::MissingContext)
}

fn find_html_element(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_ref::<HtmlElement>().cloned())
}

/// Window inner size in CSS pixels and the device pixel ratio (1 when unknown).
fn read_viewport(window: &Window) -> (f64, f64, f64) {
    let width = window.inner_width().map_or(0.0, |v| v.as_f64().unwrap_or(0.0));
    let height = window.inner_height().map_or(0.0, |v| v.as_f64().unwrap_or(0.0));
    let dpr = window.device_pixel_ratio();
    let dpr = if dpr > 0.0 { dpr } else { 1.0 };
    (width, height, dpr)
}
