//! Shared numeric constants for the viewport crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Default zoom floor. A zoom step whose result is at or below this is rejected.
pub const DEFAULT_ZOOM_FLOOR: f64 = 0.3;

/// Default magnitude of a single wheel tick.
pub const DEFAULT_ZOOM_STEP: f64 = 0.1;

/// Zoom factor of the initial (and reset) view.
pub const IDENTITY_ZOOM: f64 = 1.0;

// ── Surface ─────────────────────────────────────────────────────

/// Backing-store width used when the host does not specify one.
pub const DEFAULT_SURFACE_WIDTH: u32 = 1200;

/// Backing-store height used when the host does not specify one.
pub const DEFAULT_SURFACE_HEIGHT: u32 = 1200;

// ── Placeholder scene ───────────────────────────────────────────

/// Side of the placeholder square, in content units.
pub const PLACEHOLDER_SQUARE_SIZE: f64 = 100.0;

/// Side of the placeholder corner marker, in content units.
pub const PLACEHOLDER_MARKER_SIZE: f64 = 2.0;
