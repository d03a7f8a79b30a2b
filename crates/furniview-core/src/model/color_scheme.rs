use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Rgba;

/// Wall, floor, ceiling, and accent colors for a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub id: Uuid,
    pub name: String,
    pub wall: Rgba,
    pub floor: Rgba,
    pub ceiling: Rgba,
    pub accent: Rgba,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::new(
            "Default Color Scheme",
            Rgba::WHITE,
            Rgba::rgb(210, 180, 140),
            Rgba::WHITE,
            Rgba::rgb(70, 130, 180),
        )
    }
}

impl ColorScheme {
    pub fn new(name: impl Into<String>, wall: Rgba, floor: Rgba, ceiling: Rgba, accent: Rgba) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            wall,
            floor,
            ceiling,
            accent,
        }
    }

    pub fn modern() -> Self {
        Self::new(
            "Modern",
            Rgba::rgb(240, 240, 240),
            Rgba::rgb(60, 60, 60),
            Rgba::WHITE,
            Rgba::rgb(0, 150, 136),
        )
    }

    pub fn warm() -> Self {
        Self::new(
            "Warm",
            Rgba::rgb(255, 235, 205),
            Rgba::rgb(139, 69, 19),
            Rgba::rgb(255, 248, 220),
            Rgba::rgb(178, 34, 34),
        )
    }

    pub fn cool() -> Self {
        Self::new(
            "Cool",
            Rgba::rgb(240, 248, 255),
            Rgba::rgb(47, 79, 79),
            Rgba::WHITE,
            Rgba::rgb(70, 130, 180),
        )
    }

    /// The predefined schemes, in menu order.
    pub fn presets() -> Vec<ColorScheme> {
        vec![Self::modern(), Self::warm(), Self::cool()]
    }

    /// Look up a preset by name, ignoring case. Each call returns a fresh id.
    pub fn preset(name: &str) -> Option<ColorScheme> {
        Self::presets()
            .into_iter()
            .find(|scheme| scheme.name.eq_ignore_ascii_case(name))
    }
}
