//! Construction-time failures.
//!
//! Event handling never fails: out-of-range zoom steps and stray pointer
//! events degrade to no-ops. The only errors are a bad surface or a bad
//! configuration, both rejected before a viewport exists.

/// Error returned when a viewport or its configuration cannot be built.
#[derive(Debug, thiserror::Error)]
pub enum ViewportError {
    /// One of the backing surface dimensions is zero.
    #[error("invalid surface size: {width}x{height}")]
    InvalidSurface { width: u32, height: u32 },
    /// The device pixel scale is zero, negative, or not finite.
    #[error("invalid device pixel scale: {0}")]
    InvalidPixelScale(f64),
    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// The configuration JSON could not be parsed.
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
}
