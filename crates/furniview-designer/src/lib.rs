//! # FurniView Designer
//!
//! Editing tools for the top-down layout view.
//!
//! ## Components
//!
//! - **Viewport**: zoom, pan, and model/screen coordinate conversion
//! - **Design2DController**: selection, pointer tools, and furniture edits
//! - **Renderer**: display-list projection and tiny-skia rasterization
//! - **DesignController**: create, save, and load designs
//! - **RoomController**: room dimensions, shape, and color scheme
//! - **FurnitureCatalog**: furniture templates grouped by type
//!
//! ```text
//! Design2DController
//!   ├── Viewport (zoom / pan)
//!   └── Renderer2D (display list -> pixels)
//!
//! DesignController ── FileManager (.fvd files)
//! RoomController
//! FurnitureCatalog ── CatalogStore
//! ```

pub mod catalog;
pub mod design2d;
pub mod design_controller;
pub mod error;
pub mod renderer;
pub mod room_controller;
pub mod viewport;

pub use catalog::{default_furniture, FurnitureCatalog, TemplateUpdate, DEFAULT_TYPES};
pub use design2d::{Design2DController, PointerTool};
pub use design_controller::{DesignController, UNTITLED_DESIGN};
pub use error::{DesignerError, DesignerResult};
pub use renderer::{
    rasterize, DisplayList, DrawCommand, Renderer2D, RepaintHandle, ViewTransform,
    PLACEHOLDER_TEXT,
};
pub use room_controller::RoomController;
pub use viewport::Viewport;
