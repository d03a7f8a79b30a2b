//! # FurniView
//!
//! A furniture layout designer with a 2D top-down editor and a 3D
//! perspective view kept in sync.
//!
//! ## Architecture
//!
//! FurniView is organized as a workspace with multiple crates:
//!
//! 1. **furniview-core** - Design model, units, geometry, listeners
//! 2. **furniview-storage** - Design files, user store, catalog file, config
//! 3. **furniview-designer** - 2D viewport, renderer, and controllers
//! 4. **furniview-visualizer** - 3D camera, scene graph, scene engine thread
//! 5. **furniview** - Application context and binary

pub mod app;
pub mod error;

pub use app::{ActivePanel, AppContext};
pub use error::{AppError, AppResult};

pub use furniview_core::{
    ColorScheme, Design, Furniture, FurnitureId, Point, Rgba, Room, RoomShape, Shared,
};
pub use furniview_designer::{
    Design2DController, DesignController, FurnitureCatalog, PointerTool, RoomController,
};
pub use furniview_storage::AppConfig;
pub use furniview_visualizer::{Design3DController, EngineState, SceneEngine};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
/// - Thread names, so scene engine output is easy to pick out
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
