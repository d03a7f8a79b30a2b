use furniview_core::{Design, Furniture, Point, Rgba, Room, RoomShape};
use furniview_designer::{rasterize, DrawCommand, Renderer2D, RepaintHandle, Viewport, PLACEHOLDER_TEXT};
use image::Rgb;

fn design_with_room(width: f64, length: f64) -> Design {
    let room = Room {
        width,
        length,
        ..Room::default()
    };
    Design::new("Test", "", room, "tester")
}

fn line_count(commands: &[DrawCommand]) -> usize {
    commands
        .iter()
        .filter(|c| matches!(c, DrawCommand::Line { .. }))
        .count()
}

#[test]
fn test_placeholder_without_design() {
    let renderer = Renderer2D::default();
    let list = renderer.build_display_list(None, &Viewport::default(), None);
    assert!(list.is_placeholder());
    assert_eq!(list.commands.len(), 1);
}

#[test]
fn test_placeholder_for_degenerate_room() {
    let renderer = Renderer2D::default();
    let design = design_with_room(0.0, 4.0);
    let list = renderer.build_display_list(Some(&design), &Viewport::default(), None);
    assert!(list.is_placeholder());
}

#[test]
fn test_transform_matches_viewport() {
    let renderer = Renderer2D::default();
    let design = design_with_room(5.0, 4.0);
    let mut viewport = Viewport::new(800.0, 600.0);
    viewport.zoom_in();
    viewport.set_pan(12, -7);

    let list = renderer.build_display_list(Some(&design), &viewport, None);
    let model = Point::new(1.25, 3.5);
    let via_list = list.transform.apply(Point::new(model.x * 100.0, model.y * 100.0));
    let via_viewport = viewport.model_to_screen(design.room(), model);
    assert!((via_list.x - via_viewport.x).abs() < 1e-9);
    assert!((via_list.y - via_viewport.y).abs() < 1e-9);
}

#[test]
fn test_room_labels_and_furniture_labels() {
    let renderer = Renderer2D::default();
    let mut design = design_with_room(5.0, 4.0);
    design.add_furniture(Furniture::new("Armchair", "Chair", 0.8, 0.8, 0.9, Rgba::GRAY, "fabric"));

    let list = renderer.build_display_list(Some(&design), &Viewport::default(), None);
    let texts: Vec<&str> = list.texts().collect();
    assert_eq!(texts, vec!["New Room", "5.0m × 4.0m", "Armchair"]);
}

#[test]
fn test_hidden_labels() {
    let renderer = Renderer2D::new(true, false);
    let mut design = design_with_room(5.0, 4.0);
    design.add_furniture(Furniture::default());

    let list = renderer.build_display_list(Some(&design), &Viewport::default(), None);
    assert_eq!(list.texts().count(), 0);
}

#[test]
fn test_grid_every_metre() {
    let design = design_with_room(5.0, 3.0);
    let with_grid = Renderer2D::new(true, true).build_display_list(Some(&design), &Viewport::default(), None);
    // 6 vertical lines (0..=500) and 4 horizontal (0..=300).
    assert_eq!(line_count(&with_grid.commands), 10);

    let without = Renderer2D::new(false, true).build_display_list(Some(&design), &Viewport::default(), None);
    assert_eq!(line_count(&without.commands), 0);
}

#[test]
fn test_grid_skipped_for_oversized_room() {
    let design = design_with_room(1e7, 4.0);
    let list = Renderer2D::new(true, true).build_display_list(Some(&design), &Viewport::default(), None);
    assert!(!list.is_placeholder());
    assert_eq!(line_count(&list.commands), 0);
}

#[test]
fn test_l_shape_adds_extension() {
    let renderer = Renderer2D::default();
    let mut design = design_with_room(6.0, 3.0);
    let plain = renderer.build_display_list(Some(&design), &Viewport::default(), None);

    design.room_mut().shape = RoomShape::LShaped;
    let shaped = renderer.build_display_list(Some(&design), &Viewport::default(), None);
    assert_eq!(shaped.commands.len(), plain.commands.len() + 2);
    assert!(shaped.commands.iter().any(|c| matches!(
        c,
        DrawCommand::FillRect { x, y, width, height, .. }
            if *x == 0.0 && *y == 300.0 && *width == 200.0 && *height == 100.0
    )));
}

#[test]
fn test_furniture_rect_carries_rotation_and_color() {
    let renderer = Renderer2D::new(false, false);
    let mut design = design_with_room(5.0, 5.0);
    let mut sofa = Furniture::new("Sofa", "Sofa", 2.0, 1.0, 0.8, Rgba::rgb(70, 70, 140), "fabric").at(1.0, 2.0);
    sofa.rotation = 30.0;
    design.add_furniture(sofa);

    let list = renderer.build_display_list(Some(&design), &Viewport::default(), None);
    assert!(list.commands.iter().any(|c| *c
        == DrawCommand::FillRect {
            x: 100.0,
            y: 200.0,
            width: 200.0,
            height: 100.0,
            rotation: 30.0,
            color: Rgba::rgb(70, 70, 140),
        }));
}

#[test]
fn test_rendering_does_not_mutate_design() {
    let renderer = Renderer2D::default();
    let mut design = design_with_room(5.0, 5.0);
    design.add_furniture(Furniture::default().at(1.0, 1.0));
    let before = design.clone();

    let list = renderer.build_display_list(Some(&design), &Viewport::default(), None);
    let _ = rasterize(&list, 320, 240);
    assert_eq!(design, before);
}

#[test]
fn test_rasterize_floor_and_furniture() {
    let renderer = Renderer2D::new(false, false);
    let mut design = design_with_room(1.0, 1.0);
    design.add_furniture(
        Furniture::new("Box", "Cabinet", 0.4, 0.4, 0.5, Rgba::rgb(255, 0, 0), "wood").at(0.2, 0.2),
    );
    let viewport = Viewport::new(200.0, 200.0);

    let image = rasterize(&renderer.build_display_list(Some(&design), &viewport, None), 200, 200);
    assert_eq!(image.dimensions(), (200, 200));
    // Room spans pixels 50..150, furniture 70..110.
    assert_eq!(*image.get_pixel(5, 5), Rgb([255, 255, 255]));
    assert_eq!(*image.get_pixel(130, 60), Rgb([210, 180, 140]));
    assert_eq!(*image.get_pixel(90, 90), Rgb([255, 0, 0]));
}

#[test]
fn test_rasterize_placeholder_is_blank() {
    let list = Renderer2D::default().build_display_list(None, &Viewport::new(64.0, 48.0), None);
    let image = rasterize(&list, 64, 48);
    assert!(image.pixels().all(|p| *p == Rgb([255, 255, 255])));
    assert!(list.texts().any(|t| t == PLACEHOLDER_TEXT));
}

#[test]
fn test_repaint_handle_is_shared() {
    let handle = RepaintHandle::new();
    let clone = handle.clone();
    assert!(!handle.is_pending());

    clone.request();
    clone.request();
    assert!(handle.is_pending());
    assert_eq!(handle.request_count(), 2);
    assert!(handle.take());
    assert!(!clone.is_pending());
}
