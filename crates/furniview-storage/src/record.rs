//! Lenient on-disk records and the post-load repair pass.
//!
//! Design files carry no version field. Older or hand-edited files may lack
//! fields or hold `null` where the model requires a value, so loading goes
//! through these records, where every field is optional, and `into_design`
//! fills the gaps with model defaults. The result always satisfies the model
//! invariants: a room with in-range dimensions, a color scheme, and a
//! furniture list are present.

use chrono::{DateTime, Utc};
use furniview_core::{ColorScheme, Design, Furniture, Rgba, Room, RoomShape};
use serde::Deserialize;
use tracing::{debug, warn};
use uuid::Uuid;

#[derive(Debug, Default, Deserialize)]
pub struct DesignRecord {
    id: Option<Uuid>,
    name: Option<String>,
    description: Option<String>,
    room: Option<RoomRecord>,
    furniture: Option<Vec<Option<FurnitureRecord>>>,
    designer_id: Option<String>,
    created_at: Option<DateTime<Utc>>,
    last_modified: Option<DateTime<Utc>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RoomRecord {
    id: Option<Uuid>,
    name: Option<String>,
    width: Option<f64>,
    length: Option<f64>,
    height: Option<f64>,
    shape: Option<String>,
    color_scheme: Option<ColorSchemeRecord>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ColorSchemeRecord {
    id: Option<Uuid>,
    name: Option<String>,
    wall: Option<Rgba>,
    floor: Option<Rgba>,
    ceiling: Option<Rgba>,
    accent: Option<Rgba>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FurnitureRecord {
    id: Option<Uuid>,
    name: Option<String>,
    furniture_type: Option<String>,
    width: Option<f64>,
    length: Option<f64>,
    height: Option<f64>,
    color: Option<Rgba>,
    material: Option<String>,
    image_path: Option<String>,
    model_path: Option<String>,
    pos_x: Option<f64>,
    pos_y: Option<f64>,
    rotation: Option<f64>,
}

/// Counts fields filled in from defaults while repairing one file.
#[derive(Debug, Default)]
struct Repairs(Vec<&'static str>);

impl Repairs {
    fn fill<T>(&mut self, field: &'static str, value: Option<T>, default: impl FnOnce() -> T) -> T {
        match value {
            Some(v) => v,
            None => {
                self.0.push(field);
                default()
            }
        }
    }
}

impl DesignRecord {
    /// Repair missing fields and build a model design.
    pub fn into_design(self) -> Design {
        let mut repairs = Repairs::default();
        let defaults = Design::default();

        let room = match self.room {
            Some(room) => room.into_room(&mut repairs),
            None => {
                repairs.0.push("room");
                Room::default()
            }
        };

        let furniture = match self.furniture {
            Some(items) => {
                let total = items.len();
                let kept: Vec<Furniture> = items
                    .into_iter()
                    .flatten()
                    .map(|item| item.into_furniture(&mut repairs))
                    .collect();
                if kept.len() != total {
                    warn!("Dropped {} empty furniture entries", total - kept.len());
                }
                kept
            }
            None => {
                repairs.0.push("furniture");
                Vec::new()
            }
        };

        let created_at = repairs.fill("created_at", self.created_at, Utc::now);
        let last_modified = repairs.fill("last_modified", self.last_modified, || created_at);

        let design = Design::from_parts(
            repairs.fill("id", self.id, Uuid::new_v4),
            repairs.fill("name", self.name, || defaults.name().to_string()),
            repairs.fill("description", self.description, String::new),
            room,
            furniture,
            repairs.fill("designer_id", self.designer_id, String::new),
            created_at,
            last_modified,
        );

        if !repairs.0.is_empty() {
            debug!(
                "Repaired design {} with defaults for: {}",
                design.id,
                repairs.0.join(", ")
            );
        }
        design
    }
}

impl RoomRecord {
    fn into_room(self, repairs: &mut Repairs) -> Room {
        let defaults = Room::default();
        let shape = match self.shape.as_deref().map(str::parse::<RoomShape>) {
            Some(Ok(shape)) => shape,
            Some(Err(_)) | None => {
                repairs.0.push("room.shape");
                RoomShape::default()
            }
        };
        let color_scheme = match self.color_scheme {
            Some(scheme) => scheme.into_color_scheme(repairs),
            None => {
                repairs.0.push("room.color_scheme");
                ColorScheme::default()
            }
        };

        let mut room = Room {
            id: repairs.fill("room.id", self.id, Uuid::new_v4),
            name: repairs.fill("room.name", self.name, || defaults.name.clone()),
            width: repairs.fill("room.width", self.width, || defaults.width),
            length: repairs.fill("room.length", self.length, || defaults.length),
            height: repairs.fill("room.height", self.height, || defaults.height),
            shape,
            color_scheme,
        };
        if let Err(e) = Room::validate_dimensions(room.width, room.length, room.height) {
            warn!("Stored room {} is out of range: {}", room.id, e);
            repairs.0.push("room.dimensions");
            room.width = defaults.width;
            room.length = defaults.length;
            room.height = defaults.height;
        }
        room
    }
}

impl ColorSchemeRecord {
    fn into_color_scheme(self, repairs: &mut Repairs) -> ColorScheme {
        let defaults = ColorScheme::default();
        ColorScheme {
            id: repairs.fill("color_scheme.id", self.id, Uuid::new_v4),
            name: repairs.fill("color_scheme.name", self.name, || defaults.name.clone()),
            wall: repairs.fill("color_scheme.wall", self.wall, || defaults.wall),
            floor: repairs.fill("color_scheme.floor", self.floor, || defaults.floor),
            ceiling: repairs.fill("color_scheme.ceiling", self.ceiling, || defaults.ceiling),
            accent: repairs.fill("color_scheme.accent", self.accent, || defaults.accent),
        }
    }
}

impl FurnitureRecord {
    fn into_furniture(self, repairs: &mut Repairs) -> Furniture {
        let d = Furniture::default();
        Furniture {
            id: repairs.fill("furniture.id", self.id, Uuid::new_v4),
            name: repairs.fill("furniture.name", self.name, || d.name.clone()),
            furniture_type: repairs.fill("furniture.furniture_type", self.furniture_type, || {
                d.furniture_type.clone()
            }),
            width: repairs.fill("furniture.width", self.width, || d.width),
            length: repairs.fill("furniture.length", self.length, || d.length),
            height: repairs.fill("furniture.height", self.height, || d.height),
            color: repairs.fill("furniture.color", self.color, || d.color),
            material: repairs.fill("furniture.material", self.material, || d.material.clone()),
            image_path: repairs.fill("furniture.image_path", self.image_path, || {
                d.image_path.clone()
            }),
            model_path: repairs.fill("furniture.model_path", self.model_path, || {
                d.model_path.clone()
            }),
            pos_x: repairs.fill("furniture.pos_x", self.pos_x, || 0.0),
            pos_y: repairs.fill("furniture.pos_y", self.pos_y, || 0.0),
            rotation: repairs.fill("furniture.rotation", self.rotation, || 0.0),
        }
    }
}
