//! Pan/zoom viewport over a fixed-size drawing surface.
//!
//! This crate is compiled to WebAssembly and runs in the browser, but all of
//! its logic is host-independent. The user pans by dragging and zooms with the
//! wheel; zoom is anchored at the cursor so the content point under the pointer
//! stays put. Raw pointer/wheel events flow into the interaction state machine
//! ([`engine::ViewportCore`]), which feeds the pure transform math
//! ([`transform`]) and reports side effects as [`engine::Action`]s. A
//! [`host::SurfaceHost`] turns those actions into cursor changes and redraws.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Interaction controller: testable [`engine::ViewportCore`] and host-driving [`engine::Viewport`] |
//! | [`state`] | Viewport value object: pan, zoom, and the fixed backing surface |
//! | [`transform`] | Anchor-preserving zoom, pan, and the render transform |
//! | [`input`] | Interaction state (`Idle` / `Dragging`) and cursor affordances |
//! | [`host`] | Capability trait implemented by whatever owns the real surface |
//! | [`config`] | Zoom floor, zoom step, and status readout options |
//! | [`render`] | Placeholder scene and the Canvas2D painter |
//! | [`web`] | Browser host, DOM wiring, and the `wasm-bindgen` export |
//! | [`consts`] | Shared numeric defaults |
//! | [`error`] | Construction and configuration errors |

pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod host;
pub mod input;
pub mod render;
pub mod state;
pub mod transform;
pub mod web;

pub use config::ViewportConfig;
pub use engine::{Action, Viewport, ViewportCore, ViewportSnapshot};
pub use error::ViewportError;
pub use state::ViewportState;
