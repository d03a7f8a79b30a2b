use furniview_core::{Design, Furniture};
use furniview_visualizer::{EngineState, SceneEngine};

fn design_named(name: &str) -> Design {
    let mut design = Design::default();
    design.set_name(name);
    design.add_furniture(Furniture::default().at(1.0, 1.0));
    design
}

#[test]
fn test_starts_empty() {
    let engine = SceneEngine::spawn().expect("spawn engine");
    engine.flush();
    assert!(engine.handle().is_running());

    engine.set_design(None);
    engine.flush();
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.state, EngineState::InitializedEmpty);
    assert!(snapshot.graph.is_placeholder());
}

#[test]
fn test_updates_before_start_collapse_to_latest() {
    let mut engine = SceneEngine::new();
    engine.set_design(Some(design_named("first")));
    engine.set_design(Some(design_named("second")));
    let last = design_named("third");
    let last_item = last.furniture()[0].id;
    engine.set_design(Some(last));
    assert_eq!(engine.state(), EngineState::Uninitialized);

    engine.start().expect("start engine");
    engine.flush();

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.state, EngineState::InitializedWithDesign);
    assert_eq!(snapshot.rebuilds, 1);
    assert!(snapshot.graph.furniture_node(last_item).is_some());
    assert_eq!(snapshot.graph.len(), 7);
}

#[test]
fn test_clearing_design_returns_to_empty() {
    let engine = SceneEngine::spawn().expect("spawn engine");
    engine.set_design(Some(design_named("room")));
    engine.flush();
    assert_eq!(engine.state(), EngineState::InitializedWithDesign);

    engine.set_design(None);
    engine.flush();
    assert_eq!(engine.state(), EngineState::InitializedEmpty);
    assert!(engine.snapshot().graph.is_placeholder());
}

#[test]
fn test_overrides_survive_rebuild_of_same_design() {
    let engine = SceneEngine::spawn().expect("spawn engine");
    let mut design = design_named("room");
    let id = design.furniture()[0].id;
    engine.set_design(Some(design.clone()));
    engine.set_visibility(id, false);
    engine.apply_shading(id, 0.75);
    engine.flush();

    design.set_name("renamed");
    engine.set_design(Some(design));
    engine.flush();
    let snapshot = engine.snapshot();
    let node = snapshot.graph.furniture_node(id).expect("furniture node");
    assert!(!node.visible);
    assert!((node.material.specular_power - 75.0).abs() < 1e-9);

    engine.handle().clear_overrides();
    engine.flush();
    let snapshot = engine.snapshot();
    assert!(snapshot.graph.furniture_node(id).expect("furniture node").visible);
}

#[test]
fn test_new_design_drops_overrides() {
    let engine = SceneEngine::spawn().expect("spawn engine");
    let design = design_named("room");
    let id = design.furniture()[0].id;
    engine.set_design(Some(design.clone()));
    engine.set_visibility(id, false);
    engine.flush();

    // Same furniture under a different design id.
    let mut other = design;
    other.id = uuid::Uuid::new_v4();
    engine.set_design(Some(other));
    engine.flush();
    let snapshot = engine.snapshot();
    assert!(snapshot.graph.furniture_node(id).expect("furniture node").visible);
}

#[test]
fn test_camera_commands_apply_in_order() {
    let engine = SceneEngine::spawn().expect("spawn engine");
    engine.rotate_view(10.0, 20.0);
    engine.drag(10.0, 5.0);
    engine.scroll(1.0);
    engine.flush();
    let camera = engine.snapshot().camera;
    assert!((camera.rotate_x - 9.0).abs() < 1e-9);
    assert!((camera.rotate_y - 22.0).abs() < 1e-9);
    assert!((camera.zoom - 1.05).abs() < 1e-9);

    engine.reset_view();
    engine.flush();
    let camera = engine.snapshot().camera;
    assert_eq!((camera.rotate_x, camera.rotate_y, camera.zoom), (-20.0, -20.0, 1.0));
}

#[test]
fn test_handle_submits_from_other_thread() {
    let engine = SceneEngine::spawn().expect("spawn engine");
    let handle = engine.handle();
    std::thread::spawn(move || handle.set_design(Some(design_named("remote"))))
        .join()
        .expect("submitter thread");
    engine.flush();
    assert_eq!(engine.state(), EngineState::InitializedWithDesign);
}

#[test]
fn test_shutdown_applies_queued_work() {
    let mut engine = SceneEngine::spawn().expect("spawn engine");
    let handle = engine.handle();
    engine.set_design(Some(design_named("room")));
    engine.shutdown();
    assert!(!handle.is_running());
    assert_eq!(handle.state(), EngineState::InitializedWithDesign);
}
