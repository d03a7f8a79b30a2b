//! View and model constants shared between the 2D and 3D paths.

/// Minimum 2D zoom factor.
pub const ZOOM_2D_MIN: f64 = 0.2;
/// Maximum 2D zoom factor.
pub const ZOOM_2D_MAX: f64 = 5.0;
/// Multiplier applied per 2D zoom step.
pub const ZOOM_2D_STEP: f64 = 1.2;

/// Minimum 3D zoom scale.
pub const ZOOM_3D_MIN: f64 = 0.5;
/// Maximum 3D zoom scale.
pub const ZOOM_3D_MAX: f64 = 5.0;
/// Multiplier applied per scroll tick in the 3D view.
pub const ZOOM_3D_STEP: f64 = 1.05;

/// Degrees of camera rotation per pixel of pointer drag in the 3D view.
pub const DRAG_DEGREES_PER_PIXEL: f64 = 0.2;

/// Default camera rotation around X and Y (degrees).
pub const DEFAULT_CAMERA_ROTATION: f64 = -20.0;

/// Smallest dimension (metres) a furniture item can be scaled down to.
pub const MIN_FURNITURE_DIMENSION: f64 = 0.1;

/// Largest room width or length accepted by validation (metres).
pub const MAX_ROOM_SPAN: f64 = 50.0;
/// Largest room height accepted by validation (metres).
pub const MAX_ROOM_HEIGHT: f64 = 10.0;

/// Grid spacing in scene units for the 2D view.
pub const GRID_SPACING_UNITS: f64 = 100.0;

/// Wall, floor, and ceiling slab thickness in scene units.
pub const SLAB_THICKNESS_UNITS: f64 = 5.0;
