use std::cell::RefCell;
use std::rc::Rc;

use furniview_core::{shared, Design, Error, Rgba, Room, RoomShape};
use furniview_designer::{DesignerError, RoomController};

fn controller() -> (RoomController, furniview_core::Shared<Design>) {
    let design = shared(Design::default());
    (RoomController::new(Some(design.clone())), design)
}

#[test]
fn test_update_dimensions() {
    let (mut controller, design) = controller();
    controller.update_room_dimensions(8.0, 6.0, 3.0).unwrap();
    let room = design.borrow().room().clone();
    assert_eq!((room.width, room.length, room.height), (8.0, 6.0, 3.0));
}

#[test]
fn test_invalid_dimensions_leave_room_unchanged() {
    let (mut controller, design) = controller();
    let before = design.borrow().room().clone();

    for (w, l, h) in [(0.0, 5.0, 2.5), (5.0, -1.0, 2.5), (51.0, 5.0, 2.5), (5.0, 5.0, 10.5)] {
        let err = controller.update_room_dimensions(w, l, h).unwrap_err();
        assert!(matches!(err, DesignerError::Model(Error::InvalidInput { .. })));
    }
    assert_eq!(*design.borrow().room(), before);
}

#[test]
fn test_validate_limits() {
    assert!(RoomController::validate_room_dimensions(50.0, 50.0, 10.0));
    assert!(!RoomController::validate_room_dimensions(50.1, 1.0, 1.0));
    assert!(!RoomController::validate_room_dimensions(1.0, 1.0, 0.0));
}

#[test]
fn test_shape_by_name() {
    let (mut controller, design) = controller();
    controller.update_room_shape("L-Shaped").unwrap();
    assert_eq!(design.borrow().room().shape, RoomShape::LShaped);

    assert!(matches!(
        controller.update_room_shape("Circular"),
        Err(DesignerError::Model(Error::UnknownRoomShape(_)))
    ));
    assert_eq!(design.borrow().room().shape, RoomShape::LShaped);
}

#[test]
fn test_color_schemes() {
    let (mut controller, design) = controller();
    assert!(controller.set_predefined_color_scheme("warm"));
    assert_eq!(design.borrow().room().color_scheme.name, "Warm");
    assert!(!controller.set_predefined_color_scheme("Neon"));

    let red = Rgba::rgb(255, 0, 0);
    controller.update_color_scheme(red, red, red, red).unwrap();
    let scheme = design.borrow().room().color_scheme.clone();
    assert_eq!((scheme.wall, scheme.floor, scheme.ceiling, scheme.accent), (red, red, red, red));

    let names: Vec<String> = controller
        .predefined_color_schemes()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["Modern", "Warm", "Cool"]);
}

#[test]
fn test_create_new_room_and_shapes() {
    let (mut controller, design) = controller();
    controller.update_room_name("Old").unwrap();
    let room = controller.create_new_room().unwrap();
    assert_eq!(room.name, "New Room");
    assert_eq!(design.borrow().room().id, room.id);
    assert_eq!(controller.available_room_shapes().len(), 3);
}

#[test]
fn test_without_design() {
    let mut controller = RoomController::default();
    assert!(controller.current_room().is_none());
    assert!(controller.update_room_name("x").is_err());
    assert!(!controller.set_predefined_color_scheme("Modern"));
    assert!(controller.create_new_room().is_err());
}

#[test]
fn test_listeners_receive_room() {
    let (mut controller, _) = controller();
    let names = Rc::new(RefCell::new(Vec::new()));
    let sink = names.clone();
    controller.add_listener(Box::new(move |room: &Room| sink.borrow_mut().push(room.name.clone())));

    controller.update_room_name("Study").unwrap();
    let _ = controller.update_room_dimensions(0.0, 1.0, 1.0);
    controller.update_room_name("Den").unwrap();
    assert_eq!(*names.borrow(), vec!["Study", "Den"]);
}
