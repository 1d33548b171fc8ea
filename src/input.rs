//! Input model: the drag state machine and cursor affordances.
//!
//! `InteractionState` is the gesture tracked between pointer-down and
//! pointer-up. Only a drag carries context: the last pointer position, used
//! to turn absolute pointer samples into pan deltas.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::transform::Point;

/// Internal state for the interaction state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is panning by dragging.
    Dragging {
        /// CSS-pixel position of the previous pointer sample.
        last: Point,
    },
}

impl InteractionState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}

/// Wheel direction to signed zoom step. Scrolling down (positive delta) zooms out.
#[must_use]
pub fn wheel_zoom_delta(raw_delta_y: f64, step: f64) -> f64 {
    if raw_delta_y > 0.0 { -step } else { step }
}

/// Pointer affordance shown over the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    /// Platform default arrow.
    #[default]
    Default,
    /// Closed hand while a drag is in progress.
    Grabbing,
}

impl Cursor {
    /// CSS `cursor` property value.
    #[must_use]
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Grabbing => "grabbing",
        }
    }
}
