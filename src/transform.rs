//! Transform math for the viewport.
//!
//! Everything here is a pure function from an old [`ViewportState`] to a new
//! one. There is no failure path: a zoom step that would reach the floor, or a
//! non-finite input, returns the state unchanged.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use serde::Serialize;

use crate::state::ViewportState;

/// A point in CSS, surface, or content space depending on context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// The affine transform a renderer applies: translate by the pan, then scale
/// uniformly by the zoom, with the origin at the surface's top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderTransform {
    pub pan_x: f64,
    pub pan_y: f64,
    pub zoom: f64,
}

impl RenderTransform {
    /// Row-major 2D affine coefficients `(a, b, c, d, e, f)` as taken by
    /// `CanvasRenderingContext2D.setTransform`.
    #[must_use]
    pub fn as_matrix(&self) -> [f64; 6] {
        [self.zoom, 0.0, 0.0, self.zoom, self.pan_x, self.pan_y]
    }
}

/// The transform a renderer needs to draw `state`.
#[must_use]
pub fn render_transform(state: &ViewportState) -> RenderTransform {
    RenderTransform { pan_x: state.pan_x(), pan_y: state.pan_y(), zoom: state.zoom() }
}

/// Change zoom by `zoom_delta`, keeping the content under `anchor` fixed.
///
/// `anchor` is the pointer position in CSS pixels relative to the surface's
/// top-left. If `zoom + zoom_delta <= zoom_floor` the step is rejected and the
/// input state is returned as-is.
#[must_use]
pub fn apply_zoom(state: &ViewportState, anchor: Point, zoom_delta: f64, zoom_floor: f64) -> ViewportState {
    if !zoom_delta.is_finite() || !anchor.is_finite() {
        return *state;
    }
    let zoom = state.zoom();
    let new_zoom = zoom + zoom_delta;
    if new_zoom <= zoom_floor {
        tracing::trace!(zoom, zoom_delta, zoom_floor, "zoom step rejected at floor");
        return *state;
    }

    let a = state.surface().css_to_surface(anchor);
    // The content point under the anchor is (a - pan) / zoom. Shifting the pan
    // by that point times the zoom change keeps it mapped to `a`.
    let pan_x = state.pan_x() - ((a.x - state.pan_x()) / zoom) * zoom_delta;
    let pan_y = state.pan_y() - ((a.y - state.pan_y()) / zoom) * zoom_delta;

    state.with_view(new_zoom, pan_x, pan_y)
}

/// Translate the view by a pointer movement of `(delta_x, delta_y)` CSS pixels.
///
/// Pan is unbounded and independent of zoom.
#[must_use]
pub fn apply_pan(state: &ViewportState, delta_x: f64, delta_y: f64) -> ViewportState {
    if !delta_x.is_finite() || !delta_y.is_finite() {
        return *state;
    }
    let d = state.surface().css_to_surface(Point::new(delta_x, delta_y));
    state.with_view(state.zoom(), state.pan_x() + d.x, state.pan_y() + d.y)
}
