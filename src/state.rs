//! Viewport value object.
//!
//! A [`ViewportState`] is the pan offset and zoom factor applied to one
//! backing [`Surface`]. Pan is in backing-surface (device) pixels and is
//! applied before the uniform scale. The surface dimensions and pixel scale
//! are fixed at construction; pan and zoom only change through the functions
//! in [`crate::transform`], which return new values.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use serde::Serialize;

use crate::consts::IDENTITY_ZOOM;
use crate::error::ViewportError;
use crate::transform::Point;

/// Fixed dimensions of the backing drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Surface {
    width: u32,
    height: u32,
    device_pixel_scale: f64,
}

impl Surface {
    /// Describe a backing surface of `width` x `height` device pixels.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::InvalidSurface`] if either dimension is zero and
    /// [`ViewportError::InvalidPixelScale`] if the scale is not a positive finite number.
    pub fn new(width: u32, height: u32, device_pixel_scale: f64) -> Result<Self, ViewportError> {
        if width == 0 || height == 0 {
            return Err(ViewportError::InvalidSurface { width, height });
        }
        if !device_pixel_scale.is_finite() || device_pixel_scale <= 0.0 {
            return Err(ViewportError::InvalidPixelScale(device_pixel_scale));
        }
        Ok(Self { width, height, device_pixel_scale })
    }

    /// Backing-store width in device pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Backing-store height in device pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Device pixels per CSS pixel.
    #[must_use]
    pub fn device_pixel_scale(&self) -> f64 {
        self.device_pixel_scale
    }

    /// On-screen size in CSS pixels.
    #[must_use]
    pub fn css_size(&self) -> (f64, f64) {
        (f64::from(self.width) / self.device_pixel_scale, f64::from(self.height) / self.device_pixel_scale)
    }

    /// Convert a surface-relative CSS point to backing-surface pixels.
    #[must_use]
    pub fn css_to_surface(&self, css: Point) -> Point {
        Point::new(css.x * self.device_pixel_scale, css.y * self.device_pixel_scale)
    }
}

/// Pan/zoom state for one surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportState {
    zoom: f64,
    pan_x: f64,
    pan_y: f64,
    surface: Surface,
}

impl ViewportState {
    /// Identity view over a `width` x `height` backing surface.
    ///
    /// # Errors
    ///
    /// Fails fast on a zero dimension or a bad pixel scale; see [`Surface::new`].
    pub fn new(width: u32, height: u32, device_pixel_scale: f64) -> Result<Self, ViewportError> {
        Surface::new(width, height, device_pixel_scale).map(Self::identity)
    }

    /// Identity view over an already-validated surface.
    #[must_use]
    pub fn identity(surface: Surface) -> Self {
        Self { zoom: IDENTITY_ZOOM, pan_x: 0.0, pan_y: 0.0, surface }
    }

    /// The initial view over the same surface.
    #[must_use]
    pub fn reset(&self) -> Self {
        Self::identity(self.surface)
    }

    /// Same surface with a different pan and zoom.
    ///
    /// Only the transform functions build non-identity states, which keeps the
    /// zoom floor enforced in one place.
    pub(crate) fn with_view(&self, zoom: f64, pan_x: f64, pan_y: f64) -> Self {
        Self { zoom, pan_x, pan_y, surface: self.surface }
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    #[must_use]
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    #[must_use]
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    #[must_use]
    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Map a backing-surface point to content coordinates under this view.
    #[must_use]
    pub fn surface_to_content(&self, surface: Point) -> Point {
        Point::new((surface.x - self.pan_x) / self.zoom, (surface.y - self.pan_y) / self.zoom)
    }

    /// Map a content point to backing-surface coordinates under this view.
    #[must_use]
    pub fn content_to_surface(&self, content: Point) -> Point {
        Point::new(content.x * self.zoom + self.pan_x, content.y * self.zoom + self.pan_y)
    }
}
