//! Design model: the single source of truth both views read and write.
//!
//! ```text
//! Design
//!   ├── Room
//!   │     └── ColorScheme
//!   └── [Furniture]   (insertion order = paint order)
//! ```

mod color;
mod color_scheme;
mod design;
mod furniture;
mod room;

pub use color::Rgba;
pub use color_scheme::ColorScheme;
pub use design::Design;
pub use furniture::{Furniture, FurnitureId};
pub use room::{Room, RoomShape};
