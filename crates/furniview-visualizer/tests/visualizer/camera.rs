use furniview_visualizer::Camera3D;
use proptest::prelude::*;

#[test]
fn test_drag_orbits() {
    let mut camera = Camera3D::default();
    camera.drag(10.0, 5.0);
    assert!((camera.rotate_y - -18.0).abs() < 1e-9);
    assert!((camera.rotate_x - -21.0).abs() < 1e-9);
}

#[test]
fn test_scroll_direction() {
    let mut camera = Camera3D::default();
    camera.scroll(1.0);
    assert!((camera.zoom - 1.05).abs() < 1e-9);
    camera.scroll(-1.0);
    camera.scroll(0.0);
    assert!((camera.zoom - 1.0 / 1.05).abs() < 1e-9);
}

#[test]
fn test_reset_restores_defaults() {
    let mut camera = Camera3D::default();
    camera.set_rotation(45.0, 90.0);
    camera.scroll(1.0);
    camera.reset();
    assert_eq!(camera, Camera3D::default());
}

proptest! {
    #[test]
    fn prop_zoom_stays_in_range(ticks in prop::collection::vec(-3.0f64..3.0, 0..200)) {
        let mut camera = Camera3D::default();
        for delta in ticks {
            camera.scroll(delta);
            prop_assert!(camera.zoom >= 0.5 && camera.zoom <= 5.0);
        }
    }
}
