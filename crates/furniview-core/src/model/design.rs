use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Furniture, FurnitureId, Room};

/// The saved unit of work: one room plus placed furniture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Design {
    pub id: Uuid,
    name: String,
    description: String,
    room: Room,
    furniture: Vec<Furniture>,
    pub designer_id: String,
    pub created_at: DateTime<Utc>,
    last_modified: DateTime<Utc>,
}

impl Default for Design {
    fn default() -> Self {
        Self::new("New Design", "", Room::default(), "")
    }
}

impl Design {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        room: Room,
        designer_id: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            room,
            furniture: Vec::new(),
            designer_id: designer_id.into(),
            created_at: now,
            last_modified: now,
        }
    }

    /// Reassemble a design from stored parts without touching timestamps.
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: Uuid,
        name: String,
        description: String,
        room: Room,
        furniture: Vec<Furniture>,
        designer_id: String,
        created_at: DateTime<Utc>,
        last_modified: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            room,
            furniture,
            designer_id,
            created_at,
            last_modified,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.touch();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.touch();
    }

    pub fn room(&self) -> &Room {
        &self.room
    }

    /// Mutable room access. Callers are expected to `touch()` after editing.
    pub fn room_mut(&mut self) -> &mut Room {
        &mut self.room
    }

    pub fn set_room(&mut self, room: Room) {
        self.room = room;
        self.touch();
    }

    /// Furniture in paint order.
    pub fn furniture(&self) -> &[Furniture] {
        &self.furniture
    }

    pub fn set_furniture(&mut self, furniture: Vec<Furniture>) {
        self.furniture = furniture;
        self.touch();
    }

    pub fn add_furniture(&mut self, furniture: Furniture) {
        self.furniture.push(furniture);
        self.touch();
    }

    /// Remove an item by id, returning it if it was present.
    pub fn remove_furniture(&mut self, id: FurnitureId) -> Option<Furniture> {
        let index = self.furniture.iter().position(|f| f.id == id)?;
        let removed = self.furniture.remove(index);
        self.touch();
        Some(removed)
    }

    pub fn furniture_by_id(&self, id: FurnitureId) -> Option<&Furniture> {
        self.furniture.iter().find(|f| f.id == id)
    }

    pub fn furniture_by_id_mut(&mut self, id: FurnitureId) -> Option<&mut Furniture> {
        self.furniture.iter_mut().find(|f| f.id == id)
    }

    pub fn furniture_count(&self) -> usize {
        self.furniture.len()
    }

    pub fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }

    /// Refresh the modification timestamp.
    pub fn touch(&mut self) {
        self.last_modified = Utc::now();
    }
}
