use furniview_core::{Point, Room};
use furniview_designer::Viewport;
use proptest::prelude::*;

fn room(width: f64, length: f64) -> Room {
    Room {
        width,
        length,
        ..Room::default()
    }
}

#[test]
fn test_room_is_centred_at_unit_zoom() {
    let viewport = Viewport::new(800.0, 600.0);
    let top_left = viewport.room_top_left(&room(5.0, 4.0));
    assert_eq!(top_left, Point::new(150.0, 100.0));
}

#[test]
fn test_model_to_screen_applies_zoom_and_pan() {
    let mut viewport = Viewport::new(800.0, 600.0);
    viewport.set_zoom(2.0);
    viewport.set_pan(10, -20);
    let r = room(2.0, 2.0);

    // Top-left at 400 - 200 = 200, 300 - 200 = 100.
    let p = viewport.model_to_screen(&r, Point::new(1.0, 0.5));
    assert_eq!(p, Point::new(200.0 + 200.0 + 10.0, 100.0 + 100.0 - 20.0));
}

#[test]
fn test_zoom_steps_and_clamps() {
    let mut viewport = Viewport::default();
    viewport.zoom_in();
    assert!((viewport.zoom() - 1.2).abs() < 1e-12);

    for _ in 0..50 {
        viewport.zoom_in();
    }
    assert_eq!(viewport.zoom(), 5.0);

    for _ in 0..50 {
        viewport.zoom_out();
    }
    assert_eq!(viewport.zoom(), 0.2);
}

#[test]
fn test_reset_restores_defaults() {
    let mut viewport = Viewport::default();
    viewport.zoom_in();
    viewport.pan_by(15, 25);
    viewport.reset();
    assert_eq!(viewport.zoom(), 1.0);
    assert_eq!((viewport.pan_x(), viewport.pan_y()), (0, 0));
    assert_eq!(viewport.pixels_per_meter(), 100.0);
}

#[test]
fn test_display() {
    let mut viewport = Viewport::default();
    viewport.set_pan(3, -4);
    assert_eq!(viewport.to_string(), "Zoom: 1.00x | Pan: (3, -4)");
}

proptest! {
    #[test]
    fn prop_screen_model_round_trip(
        zoom in 0.2f64..=5.0,
        pan_x in -2000i32..2000,
        pan_y in -2000i32..2000,
        width in 0.5f64..50.0,
        length in 0.5f64..50.0,
        x in -10.0f64..60.0,
        y in -10.0f64..60.0,
    ) {
        let mut viewport = Viewport::new(1024.0, 768.0);
        viewport.set_zoom(zoom);
        viewport.set_pan(pan_x, pan_y);
        let r = room(width, length);

        let model = Point::new(x, y);
        let back = viewport.screen_to_model(&r, viewport.model_to_screen(&r, model));
        prop_assert!((back.x - x).abs() < 1e-9);
        prop_assert!((back.y - y).abs() < 1e-9);
    }
}
