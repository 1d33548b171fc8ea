#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

fn state() -> ViewportState {
    ViewportState::new(1200, 800, 2.0).unwrap()
}

// --- Surface ---

#[test]
fn surface_stores_dimensions() {
    let s = Surface::new(1200, 800, 2.0).unwrap();
    assert_eq!(s.width(), 1200);
    assert_eq!(s.height(), 800);
    assert_eq!(s.device_pixel_scale(), 2.0);
}

#[test]
fn surface_zero_width_rejected() {
    let err = Surface::new(0, 800, 1.0).unwrap_err();
    assert!(matches!(err, ViewportError::InvalidSurface { width: 0, height: 800 }));
}

#[test]
fn surface_zero_height_rejected() {
    assert!(matches!(Surface::new(10, 0, 1.0), Err(ViewportError::InvalidSurface { .. })));
}

#[test]
fn surface_bad_pixel_scale_rejected() {
    for scale in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(
            matches!(Surface::new(10, 10, scale), Err(ViewportError::InvalidPixelScale(_))),
            "scale {scale} should be rejected"
        );
    }
}

#[test]
fn surface_css_size_divides_by_scale() {
    let s = Surface::new(1200, 800, 2.0).unwrap();
    assert_eq!(s.css_size(), (600.0, 400.0));
}

#[test]
fn surface_css_to_surface_multiplies_by_scale() {
    let s = Surface::new(100, 100, 1.5).unwrap();
    assert!(point_approx_eq(s.css_to_surface(Point::new(10.0, 20.0)), Point::new(15.0, 30.0)));
}

// --- Construction ---

#[test]
fn new_state_is_identity() {
    let s = state();
    assert_eq!(s.zoom(), 1.0);
    assert_eq!(s.pan_x(), 0.0);
    assert_eq!(s.pan_y(), 0.0);
}

#[test]
fn new_state_propagates_surface_error() {
    assert!(ViewportState::new(0, 0, 2.0).is_err());
}

// --- reset ---

#[test]
fn reset_returns_identity_view() {
    let moved = state().with_view(2.5, -300.0, 41.0);
    let reset = moved.reset();
    assert_eq!(reset.zoom(), 1.0);
    assert_eq!(reset.pan_x(), 0.0);
    assert_eq!(reset.pan_y(), 0.0);
}

#[test]
fn reset_preserves_surface() {
    let moved = state().with_view(0.7, 12.0, 13.0);
    assert_eq!(moved.reset().surface(), state().surface());
}

#[test]
fn reset_of_identity_is_identity() {
    assert_eq!(state().reset(), state());
}

// --- Coordinate mapping ---

#[test]
fn identity_maps_surface_to_content_unchanged() {
    let p = Point::new(50.0, 75.0);
    assert!(point_approx_eq(state().surface_to_content(p), p));
}

#[test]
fn surface_to_content_with_pan_and_zoom() {
    let s = state().with_view(2.0, 20.0, 10.0);
    // (20 - 20) / 2 = 0, (10 - 10) / 2 = 0
    assert!(point_approx_eq(s.surface_to_content(Point::new(20.0, 10.0)), Point::new(0.0, 0.0)));
}

#[test]
fn content_to_surface_with_pan_and_zoom() {
    let s = state().with_view(3.0, 20.0, 10.0);
    // 5*3 + 20 = 35, 5*3 + 10 = 25
    assert!(point_approx_eq(s.content_to_surface(Point::new(5.0, 5.0)), Point::new(35.0, 25.0)));
}

#[test]
fn mapping_round_trip_fractional_zoom() {
    let s = state().with_view(0.75, 13.7, -42.3);
    let content = Point::new(333.3, -999.9);
    assert!(point_approx_eq(s.surface_to_content(s.content_to_surface(content)), content));
}

// --- Serialization ---

#[test]
fn serializes_camel_case() {
    let json = serde_json::to_value(state()).unwrap();
    assert_eq!(json["zoom"], 1.0);
    assert_eq!(json["panX"], 0.0);
    assert_eq!(json["surface"]["devicePixelScale"], 2.0);
    assert_eq!(json["surface"]["width"], 1200);
}
