#![allow(clippy::float_cmp)]

use super::*;

fn surface(width: u32, height: u32, scale: f64) -> Surface {
    Surface::new(width, height, scale).unwrap()
}

#[test]
fn scene_square_sits_near_bottom_right() {
    let [square, _] = placeholder_scene(&surface(1200, 1200, 2.0));
    // (1200 - 100) / 2 = 550
    assert_eq!(square.x, 550.0);
    assert_eq!(square.y, 550.0);
    assert_eq!(square.width, 100.0);
    assert_eq!(square.height, 100.0);
    assert_eq!(square.fill, "black");
}

#[test]
fn scene_marker_is_drawn_last() {
    let [_, marker] = placeholder_scene(&surface(1200, 1200, 2.0));
    // (1200 - 2) / 2 = 599
    assert_eq!(marker.x, 599.0);
    assert_eq!(marker.y, 599.0);
    assert_eq!(marker.width, 2.0);
    assert_eq!(marker.fill, "red");
}

#[test]
fn scene_follows_non_square_surface() {
    let [square, marker] = placeholder_scene(&surface(800, 400, 1.0));
    assert_eq!((square.x, square.y), (700.0, 300.0));
    assert_eq!((marker.x, marker.y), (798.0, 398.0));
}

