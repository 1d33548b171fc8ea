//! Browser host: the canvas element, DOM listeners, and the JS-facing export.
//!
//! [`CanvasPanel`] is what page scripts construct. It creates a canvas with a
//! `width` x `height` backing store shown at CSS size `width / dpr`, appends it
//! to the page, and routes mouse and wheel events into a [`Viewport`]. Every
//! listener borrows the viewport for the length of one event, so events are
//! handled strictly one after another. The panel owns its listeners and
//! removes them, along with the canvas, when destroyed.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, CanvasRenderingContext2d, Document, Event, EventTarget, HtmlCanvasElement, HtmlElement,
    MouseEvent, WheelEvent,
};

use crate::config::ViewportConfig;
use crate::consts::{DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH};
use crate::engine::Viewport;
use crate::error::ViewportError;
use crate::host::{StatusReadout, SurfaceHost, SurfaceMetrics};
use crate::input::Cursor;
use crate::render;
use crate::state::Surface;
use crate::transform::RenderTransform;

type SharedViewport = Rc<RefCell<Viewport<CanvasHost>>>;

/// Install the panic hook and route `log`/`tracing` output to the dev console.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        tracing::warn!(%err, "console logger already installed");
    }
}

/// A `SurfaceHost` backed by an `HtmlCanvasElement`.
pub struct CanvasHost {
    document: Document,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    surface: Surface,
}

impl CanvasHost {
    /// Create the canvas inside a new wrapper element appended to `<body>`.
    ///
    /// Returns the host and the wrapper, which also swallows wheel events.
    ///
    /// # Errors
    ///
    /// Returns `Err` for an invalid surface or if any DOM call fails.
    pub fn create(
        document: &Document,
        width: u32,
        height: u32,
        device_pixel_scale: f64,
    ) -> Result<(Self, HtmlElement), JsValue> {
        let surface = Surface::new(width, height, device_pixel_scale).map_err(to_js_error)?;

        let wrapper: HtmlElement = document.create_element("div")?.dyn_into()?;
        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        canvas.set_width(width);
        canvas.set_height(height);
        let (css_width, css_height) = surface.css_size();
        let style = canvas.style();
        style.set_property("width", &format!("{css_width}px"))?;
        style.set_property("height", &format!("{css_height}px"))?;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;

        wrapper.append_child(&canvas)?;
        document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?
            .append_child(&wrapper)?;

        Ok((Self { document: document.clone(), canvas, ctx, surface }, wrapper))
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            el.set_inner_html(text);
        }
    }
}

impl SurfaceHost for CanvasHost {
    type Error = JsValue;

    fn measure_surface(&self) -> SurfaceMetrics {
        SurfaceMetrics {
            width: self.surface.width(),
            height: self.surface.height(),
            device_pixel_scale: self.surface.device_pixel_scale(),
        }
    }

    fn redraw(&mut self, transform: RenderTransform) -> Result<(), JsValue> {
        render::draw(&self.ctx, &self.surface, transform)
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        if let Err(err) = self.canvas.style().set_property("cursor", cursor.as_css()) {
            tracing::warn!(error = ?err, "failed to set cursor");
        }
    }

    fn report_status(&mut self, status: &StatusReadout) {
        self.set_text("zoom", &format!("zoom: {}", status.zoom));
        if let Some(p) = status.pointer {
            self.set_text("x", &format!("x: {}, ", p.x));
            self.set_text("y", &format!("y: {}, ", p.y));
        }
    }
}

// =============================================================
// DOM wiring
// =============================================================

/// A registered DOM listener, removed from its target when dropped.
struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        event: &'static str,
        options: Option<&AddEventListenerOptions>,
        callback: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, JsValue> {
        let function = callback.as_ref().unchecked_ref();
        match options {
            Some(options) => target.add_event_listener_with_callback_and_add_event_listener_options(event, function, options)?,
            None => target.add_event_listener_with_callback(event, function)?,
        }
        Ok(Self { target: target.clone(), event, callback })
    }

}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self.target.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref()) {
            tracing::warn!(event = self.event, error = ?err, "failed to remove listener");
        }
    }
}

fn listen_mouse<F>(canvas: &HtmlCanvasElement, event: &'static str, viewport: &SharedViewport, handler: F) -> Result<Listener, JsValue>
where
    F: Fn(&mut Viewport<CanvasHost>, &MouseEvent) + 'static,
{
    let viewport = Rc::clone(viewport);
    let cb = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
            return;
        };
        if let Ok(mut vp) = viewport.try_borrow_mut() {
            handler(&mut *vp, ev);
        }
    });
    Listener::attach(canvas, event, None, cb)
}

fn offset(ev: &MouseEvent) -> (f64, f64) {
    (f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

fn attach_pointer_handlers(canvas: &HtmlCanvasElement, viewport: &SharedViewport) -> Result<Vec<Listener>, JsValue> {
    let stop_click = Closure::<dyn FnMut(Event)>::new(|ev: Event| ev.stop_propagation());
    Ok(vec![
        listen_mouse(canvas, "mousedown", viewport, |vp, ev| {
            let (x, y) = offset(ev);
            vp.handle_pointer_down(x, y);
        })?,
        listen_mouse(canvas, "mousemove", viewport, |vp, ev| {
            let (x, y) = offset(ev);
            vp.handle_pointer_move(x, y);
        })?,
        listen_mouse(canvas, "mouseup", viewport, |vp, _| vp.handle_pointer_up())?,
        listen_mouse(canvas, "mouseleave", viewport, |vp, _| vp.handle_pointer_leave())?,
        Listener::attach(canvas, "click", None, stop_click)?,
    ])
}

fn attach_wheel_handlers(canvas: &HtmlCanvasElement, wrapper: &HtmlElement, viewport: &SharedViewport) -> Result<Vec<Listener>, JsValue> {
    // Non-passive, or preventDefault is ignored and the page scrolls too.
    let options = AddEventListenerOptions::new();
    options.set_passive(false);

    let viewport = Rc::clone(viewport);
    let on_wheel = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        ev.prevent_default();
        let Some(ev) = ev.dyn_ref::<WheelEvent>() else {
            return;
        };
        if let Ok(mut vp) = viewport.try_borrow_mut() {
            let (x, y) = offset(ev);
            vp.handle_wheel(x, y, ev.delta_y());
        }
    });
    let swallow = Closure::<dyn FnMut(Event)>::new(|ev: Event| ev.prevent_default());
    Ok(vec![
        Listener::attach(canvas, "wheel", Some(&options), on_wheel)?,
        Listener::attach(wrapper, "wheel", Some(&options), swallow)?,
    ])
}

fn to_js_error(err: ViewportError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

// =============================================================
// JS export
// =============================================================

/// A pan/zoom canvas mounted on the current page.
///
/// Call `destroy()` (or `free()`) to remove the canvas and its listeners.
#[wasm_bindgen]
pub struct CanvasPanel {
    viewport: SharedViewport,
    wrapper: HtmlElement,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl CanvasPanel {
    /// Mount a new panel. `width`/`height` are backing-store pixels
    /// (default 1200); `config` is an optional JSON options object.
    ///
    /// # Errors
    ///
    /// Rejects a zero-sized surface or an invalid config, and propagates DOM failures.
    #[wasm_bindgen(constructor)]
    pub fn new(width: Option<u32>, height: Option<u32>, config: Option<String>) -> Result<CanvasPanel, JsValue> {
        let config = match config {
            Some(raw) => ViewportConfig::from_json(&raw).map_err(to_js_error)?,
            None => ViewportConfig::default(),
        };
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window.document().ok_or_else(|| JsValue::from_str("no document"))?;
        let device_pixel_scale = window.device_pixel_ratio().max(1.0);

        let (host, wrapper) = CanvasHost::create(
            &document,
            width.unwrap_or(DEFAULT_SURFACE_WIDTH),
            height.unwrap_or(DEFAULT_SURFACE_HEIGHT),
            device_pixel_scale,
        )?;
        let canvas = host.canvas.clone();
        let viewport = match Viewport::new(host, config) {
            Ok(viewport) => Rc::new(RefCell::new(viewport)),
            Err(err) => {
                wrapper.remove();
                return Err(to_js_error(err));
            }
        };

        // Built before any `?` below so a partial mount is torn down by `Drop`.
        let mut panel = Self { viewport, wrapper, listeners: Vec::new() };
        let pointer = attach_pointer_handlers(&canvas, &panel.viewport)?;
        panel.listeners.extend(pointer);
        let wheel = attach_wheel_handlers(&canvas, &panel.wrapper, &panel.viewport)?;
        panel.listeners.extend(wheel);
        Ok(panel)
    }

    /// Restore zoom 1 and zero pan.
    pub fn reset(&self) {
        if let Ok(mut vp) = self.viewport.try_borrow_mut() {
            vp.reset();
        }
    }

    /// Current zoom factor, for status displays.
    ///
    /// # Errors
    ///
    /// Returns `Err` if called while the viewport is handling an event.
    #[wasm_bindgen(js_name = currentZoom)]
    pub fn current_zoom(&self) -> Result<f64, JsValue> {
        let vp = self.viewport.try_borrow().map_err(|err| JsValue::from_str(&err.to_string()))?;
        Ok(vp.current_zoom())
    }

    /// The viewport state and its render transform as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the viewport is mid-event or serialization fails.
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> Result<String, JsValue> {
        let vp = self.viewport.try_borrow().map_err(|err| JsValue::from_str(&err.to_string()))?;
        serde_json::to_string(&vp.snapshot()).map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// Remove every listener and detach the canvas from the page. Idempotent.
    pub fn destroy(&mut self) {
        self.listeners.clear();
        self.wrapper.remove();
    }

    /// Listeners currently registered by this panel.
    #[wasm_bindgen(js_name = listenerCount)]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Drop for CanvasPanel {
    fn drop(&mut self) {
        self.destroy();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "web_test.rs"]
mod web_test;
