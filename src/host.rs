//! Capabilities the viewport needs from whatever owns the real surface.
//!
//! The engine never touches a window, document, or drawing context. A host
//! measures the surface once, repaints on request, swaps the cursor, and may
//! show a status readout. The browser implementation lives in [`crate::web`];
//! tests use an in-memory recorder.

use crate::input::Cursor;
use crate::transform::{Point, RenderTransform};

/// Backing-surface size and density, as measured by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMetrics {
    pub width: u32,
    pub height: u32,
    pub device_pixel_scale: f64,
}

/// Values for a cosmetic status display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusReadout {
    /// Current zoom factor.
    pub zoom: f64,
    /// Pointer position in surface-relative CSS pixels, when axis readout is on.
    pub pointer: Option<Point>,
}

/// A drawable surface plus the UI around it.
pub trait SurfaceHost {
    /// Failure type of [`SurfaceHost::redraw`].
    type Error: std::fmt::Debug;

    /// Size and density of the backing surface. Queried once, at construction.
    fn measure_surface(&self) -> SurfaceMetrics;

    /// Clear the surface and repaint the content under `transform`.
    ///
    /// # Errors
    ///
    /// Returns the host's error if the drawing backend rejects a call. The
    /// viewport logs it and keeps going.
    fn redraw(&mut self, transform: RenderTransform) -> Result<(), Self::Error>;

    /// Show `cursor` over the surface.
    fn set_cursor(&mut self, cursor: Cursor);

    /// Update a status display. Hosts without one can ignore this.
    fn report_status(&mut self, _status: &StatusReadout) {}
}
