use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Rgba;
use crate::geometry::Aabb;

/// Identity of a furniture item.
pub type FurnitureId = Uuid;

/// A placed item. Sizes and positions are in metres, position is room-local
/// with a top-left origin, rotation is in degrees about the vertical axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Furniture {
    pub id: FurnitureId,
    pub name: String,
    pub furniture_type: String,
    pub width: f64,
    pub length: f64,
    pub height: f64,
    pub color: Rgba,
    pub material: String,
    pub image_path: String,
    pub model_path: String,
    pub pos_x: f64,
    pub pos_y: f64,
    pub rotation: f64,
}

impl Default for Furniture {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: "New Furniture".to_string(),
            furniture_type: "chair".to_string(),
            width: 0.6,
            length: 0.6,
            height: 0.8,
            color: Rgba::GRAY,
            material: "wood".to_string(),
            image_path: "resources/images/furniture/default.png".to_string(),
            model_path: "resources/models/default.obj".to_string(),
            pos_x: 0.0,
            pos_y: 0.0,
            rotation: 0.0,
        }
    }
}

impl Furniture {
    /// Create an item at the origin with no rotation.
    pub fn new(
        name: impl Into<String>,
        furniture_type: impl Into<String>,
        width: f64,
        length: f64,
        height: f64,
        color: Rgba,
        material: impl Into<String>,
    ) -> Self {
        let furniture_type = furniture_type.into();
        let slug = furniture_type.to_lowercase();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            image_path: format!("resources/images/furniture/{slug}.png"),
            model_path: format!("resources/models/{slug}.obj"),
            furniture_type,
            width,
            length,
            height,
            color,
            material: material.into(),
            pos_x: 0.0,
            pos_y: 0.0,
            rotation: 0.0,
        }
    }

    /// Place the item, builder style.
    pub fn at(mut self, pos_x: f64, pos_y: f64) -> Self {
        self.pos_x = pos_x;
        self.pos_y = pos_y;
        self
    }

    /// Footprint ignoring rotation.
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos_x, self.pos_y, self.width, self.length)
    }

    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    /// Copy with a fresh id and the same attributes, placed at the origin
    /// with no rotation. Used when inserting catalog templates into a design.
    pub fn duplicate(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            pos_x: 0.0,
            pos_y: 0.0,
            rotation: 0.0,
            ..self.clone()
        }
    }
}
