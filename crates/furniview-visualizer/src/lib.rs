//! # FurniView Visualizer
//!
//! The 3D view: an orbit camera, a scene graph of boxes built from the
//! design, a scene engine running on its own thread, and the controller that
//! edits the design from the 3D panel.
//!
//! ```text
//! Design3DController ── SceneHandle ──► SceneEngine thread
//!                                         ├── SceneGraph
//!                                         └── Camera3D
//! ```

pub mod camera;
pub mod design3d;
pub mod engine;
pub mod scene;

pub use camera::{Camera3D, CAMERA_DISTANCE};
pub use design3d::Design3DController;
pub use engine::{EngineState, SceneEngine, SceneHandle, SceneSnapshot, ENGINE_THREAD_NAME};
pub use scene::{
    Material, NodeKind, SceneGraph, SceneNode, ViewOverrides, WallSide, DEFAULT_SPECULAR_POWER,
    PLACEHOLDER_LABEL,
};
