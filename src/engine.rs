use serde::Serialize;

use crate::config::ViewportConfig;
use crate::error::ViewportError;
use crate::host::{StatusReadout, SurfaceHost, SurfaceMetrics};
use crate::input::{Cursor, InteractionState, wheel_zoom_delta};
use crate::state::{Surface, ViewportState};
use crate::transform::{self, Point, RenderTransform};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Side effects returned from input handlers for the host to carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetCursor(Cursor),
    RenderNeeded,
    StatusChanged(StatusReadout),
}

/// Serializable view of a viewport: its state plus the transform a renderer applies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportSnapshot {
    pub state: ViewportState,
    pub transform: RenderTransform,
}

/// Core controller state: all logic that does not depend on a host.
///
/// Separated from `Viewport` so it can be tested without a surface. Events are
/// processed one at a time, to completion, by a single owner.
#[derive(Debug, Clone)]
pub struct ViewportCore {
    pub state: ViewportState,
    pub input: InteractionState,
    pub config: ViewportConfig,
}

impl ViewportCore {
    /// Identity view over `surface`, idle.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::InvalidConfig`] if `config` fails validation.
    pub fn new(surface: Surface, config: ViewportConfig) -> Result<Self, ViewportError> {
        Ok(Self { state: ViewportState::identity(surface), input: InteractionState::Idle, config: config.validate()? })
    }

    // --- Pointer ---

    /// Start a drag at `pt`. Ignored while a drag is already active.
    pub fn on_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        if !pt.is_finite() || self.input.is_dragging() {
            return Vec::new();
        }
        self.input = InteractionState::Dragging { last: pt };
        tracing::debug!(x = pt.x, y = pt.y, "drag started");
        vec![Action::SetCursor(Cursor::Grabbing)]
    }

    /// Pan by the movement since the last sample when dragging; report the
    /// pointer position when axis readout is on.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        if !pt.is_finite() {
            return Vec::new();
        }
        let mut actions = Vec::new();
        if let InteractionState::Dragging { last } = self.input {
            self.state = transform::apply_pan(&self.state, pt.x - last.x, pt.y - last.y);
            self.input = InteractionState::Dragging { last: pt };
            actions.push(Action::RenderNeeded);
        }
        if self.config.show_axis_readout {
            actions.push(Action::StatusChanged(self.status(Some(pt))));
        }
        actions
    }

    /// End the drag, if any.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.end_drag()
    }

    /// Leaving the surface releases the drag exactly like a pointer-up.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.end_drag()
    }

    fn end_drag(&mut self) -> Vec<Action> {
        if !self.input.is_dragging() {
            return Vec::new();
        }
        self.input = InteractionState::Idle;
        tracing::debug!(pan_x = self.state.pan_x(), pan_y = self.state.pan_y(), "drag ended");
        vec![Action::SetCursor(Cursor::Default)]
    }

    // --- Wheel ---

    /// Zoom one step about `pt`. Does not touch the drag state.
    pub fn on_wheel(&mut self, pt: Point, raw_delta_y: f64) -> Vec<Action> {
        if !pt.is_finite() || !raw_delta_y.is_finite() {
            return Vec::new();
        }
        let delta = wheel_zoom_delta(raw_delta_y, self.config.zoom_step);
        let next = transform::apply_zoom(&self.state, pt, delta, self.config.zoom_floor);

        let mut actions = Vec::new();
        if next != self.state {
            self.state = next;
            actions.push(Action::RenderNeeded);
        }
        actions.push(Action::StatusChanged(self.status(None)));
        actions
    }

    // --- View ---

    /// Back to the identity view, cancelling any drag.
    pub fn reset(&mut self) -> Vec<Action> {
        let mut actions = self.end_drag();
        self.state = self.state.reset();
        actions.push(Action::RenderNeeded);
        actions.push(Action::StatusChanged(self.status(None)));
        actions
    }

    // --- Queries ---

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.state.zoom()
    }

    #[must_use]
    pub fn render_transform(&self) -> RenderTransform {
        transform::render_transform(&self.state)
    }

    #[must_use]
    pub fn snapshot(&self) -> ViewportSnapshot {
        ViewportSnapshot { state: self.state, transform: self.render_transform() }
    }

    fn status(&self, pointer: Option<Point>) -> StatusReadout {
        StatusReadout { zoom: self.state.zoom(), pointer }
    }
}

/// A viewport bound to a host. Wraps `ViewportCore` and carries out its actions.
pub struct Viewport<H: SurfaceHost> {
    core: ViewportCore,
    host: H,
}

impl<H: SurfaceHost> Viewport<H> {
    /// Measure the host's surface, build the identity view, and paint it once.
    ///
    /// # Errors
    ///
    /// Fails fast if the host reports a zero-sized surface or bad pixel scale,
    /// or if `config` is out of range.
    pub fn new(host: H, config: ViewportConfig) -> Result<Self, ViewportError> {
        let SurfaceMetrics { width, height, device_pixel_scale } = host.measure_surface();
        let surface = Surface::new(width, height, device_pixel_scale)?;
        let core = ViewportCore::new(surface, config)?;
        tracing::info!(width, height, device_pixel_scale, zoom_floor = core.config.zoom_floor, "viewport created");

        let mut viewport = Self { core, host };
        viewport.dispatch(vec![Action::RenderNeeded]);
        Ok(viewport)
    }

    // --- Input events ---

    pub fn handle_pointer_down(&mut self, x: f64, y: f64) {
        let actions = self.core.on_pointer_down(Point::new(x, y));
        self.dispatch(actions);
    }

    pub fn handle_pointer_move(&mut self, x: f64, y: f64) {
        let actions = self.core.on_pointer_move(Point::new(x, y));
        self.dispatch(actions);
    }

    pub fn handle_pointer_up(&mut self) {
        let actions = self.core.on_pointer_up();
        self.dispatch(actions);
    }

    pub fn handle_pointer_leave(&mut self) {
        let actions = self.core.on_pointer_leave();
        self.dispatch(actions);
    }

    pub fn handle_wheel(&mut self, x: f64, y: f64, raw_delta_y: f64) {
        let actions = self.core.on_wheel(Point::new(x, y), raw_delta_y);
        self.dispatch(actions);
    }

    pub fn reset(&mut self) {
        let actions = self.core.reset();
        self.dispatch(actions);
    }

    // --- Queries ---

    #[must_use]
    pub fn current_zoom(&self) -> f64 {
        self.core.zoom()
    }

    #[must_use]
    pub fn state(&self) -> &ViewportState {
        &self.core.state
    }

    #[must_use]
    pub fn snapshot(&self) -> ViewportSnapshot {
        self.core.snapshot()
    }

    #[must_use]
    pub fn interaction(&self) -> InteractionState {
        self.core.input
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    fn dispatch(&mut self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::SetCursor(cursor) => self.host.set_cursor(cursor),
                Action::RenderNeeded => {
                    let transform = self.core.render_transform();
                    if let Err(err) = self.host.redraw(transform) {
                        tracing::warn!(error = ?err, "redraw failed");
                    }
                }
                Action::StatusChanged(status) => self.host.report_status(&status),
            }
        }
    }
}
