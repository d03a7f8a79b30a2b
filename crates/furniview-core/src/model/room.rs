use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ColorScheme;
use crate::constants::{MAX_ROOM_HEIGHT, MAX_ROOM_SPAN};
use crate::geometry::Aabb;
use crate::{Error, Result};

/// Descriptive room shape. Geometry is always an axis-aligned box; the
/// L-shape only adds a decorative extension in 2D previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RoomShape {
    #[default]
    Rectangular,
    LShaped,
    Square,
}

impl RoomShape {
    pub const ALL: [RoomShape; 3] = [RoomShape::Rectangular, RoomShape::LShaped, RoomShape::Square];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Rectangular => "Rectangular",
            Self::LShaped => "L-Shaped",
            Self::Square => "Square",
        }
    }
}

impl fmt::Display for RoomShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RoomShape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "rectangular" => Ok(Self::Rectangular),
            "l-shaped" | "lshaped" => Ok(Self::LShaped),
            "square" => Ok(Self::Square),
            _ => Err(Error::UnknownRoomShape(s.to_string())),
        }
    }
}

/// The enclosing space. Dimensions are in metres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: Uuid,
    pub name: String,
    pub width: f64,
    pub length: f64,
    pub height: f64,
    pub shape: RoomShape,
    pub color_scheme: ColorScheme,
}

impl Default for Room {
    fn default() -> Self {
        Self::new("New Room", 5.0, 5.0, 2.5, RoomShape::Rectangular, ColorScheme::default())
    }
}

impl Room {
    pub fn new(
        name: impl Into<String>,
        width: f64,
        length: f64,
        height: f64,
        shape: RoomShape,
        color_scheme: ColorScheme,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            width,
            length,
            height,
            shape,
            color_scheme,
        }
    }

    /// Floor footprint with the origin at the room's top-left corner.
    pub fn footprint(&self) -> Aabb {
        Aabb::new(0.0, 0.0, self.width, self.length)
    }

    /// Whether all three dimensions are positive and finite.
    pub fn has_valid_dimensions(&self) -> bool {
        [self.width, self.length, self.height]
            .iter()
            .all(|d| d.is_finite() && *d > 0.0)
    }

    /// Validate proposed room dimensions.
    ///
    /// Every dimension must be positive; width and length are capped at 50 m
    /// and height at 10 m.
    pub fn validate_dimensions(width: f64, length: f64, height: f64) -> Result<()> {
        for (field, value) in [("width", width), ("length", length), ("height", height)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::invalid(field, format!("must be greater than 0, got {value}")));
            }
        }
        if width > MAX_ROOM_SPAN {
            return Err(Error::invalid("width", format!("must be at most {MAX_ROOM_SPAN} m")));
        }
        if length > MAX_ROOM_SPAN {
            return Err(Error::invalid("length", format!("must be at most {MAX_ROOM_SPAN} m")));
        }
        if height > MAX_ROOM_HEIGHT {
            return Err(Error::invalid("height", format!("must be at most {MAX_ROOM_HEIGHT} m")));
        }
        Ok(())
    }
}
