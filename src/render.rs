//! Rendering: paints the scene to a 2D context under the viewport transform.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! The scene itself is a stand-in: a square and a small marker near the
//! bottom-right of the surface, enough to see pan and zoom working.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{PLACEHOLDER_MARKER_SIZE, PLACEHOLDER_SQUARE_SIZE};
use crate::state::Surface;
use crate::transform::RenderTransform;

/// An axis-aligned filled rectangle in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilledRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: &'static str,
}

/// The placeholder content for `surface`, bottom layer first.
#[must_use]
pub fn placeholder_scene(surface: &Surface) -> [FilledRect; 2] {
    let w = f64::from(surface.width());
    let h = f64::from(surface.height());
    let dps = surface.device_pixel_scale();
    let square = |size: f64, fill: &'static str| FilledRect {
        x: (w - size) / dps,
        y: (h - size) / dps,
        width: size,
        height: size,
        fill,
    };
    [square(PLACEHOLDER_SQUARE_SIZE, "black"), square(PLACEHOLDER_MARKER_SIZE, "red")]
}

/// Clear the whole backing surface, then paint the scene under `transform`.
///
/// # Errors
///
/// Returns `Err` if a `Canvas2D` transform call fails.
pub fn draw(ctx: &CanvasRenderingContext2d, surface: &Surface, transform: RenderTransform) -> Result<(), JsValue> {
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, f64::from(surface.width()), f64::from(surface.height()));

    let [a, b, c, d, e, f] = transform.as_matrix();
    ctx.set_transform(a, b, c, d, e, f)?;
    for rect in placeholder_scene(surface) {
        ctx.set_fill_style_str(rect.fill);
        ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
    }
    Ok(())
}
