//! # FurniView Core
//!
//! Core types and utilities shared by the FurniView crates.
//! Provides the design model (rooms, furniture, color schemes), unit
//! conversion between metres and scene units, axis-aligned geometry used for
//! hit-testing and collision checks, and the listener registry used for
//! model-change notification.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod listener;
pub mod model;
pub mod types;
pub mod units;

pub use error::{Error, Result};

pub use geometry::{Aabb, Point};

pub use listener::{ListenerHandle, ListenerRegistry};

pub use model::{ColorScheme, Design, Furniture, FurnitureId, Rgba, Room, RoomShape};

pub use types::{shared, Shared};

pub use units::{meters_to_units, units_to_meters, UNITS_PER_METER};
