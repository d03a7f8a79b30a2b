//! Room editing for the current design.
//!
//! Input is validated before the room is touched; a rejected call leaves the
//! design unchanged and notifies nobody.

use furniview_core::listener::RoomChangedFn;
use furniview_core::{
    ColorScheme, Design, Error, ListenerHandle, ListenerRegistry, Rgba, Room, RoomShape, Shared,
};
use tracing::debug;

use crate::error::DesignerResult;

/// Edits the room of the current design.
#[derive(Default)]
pub struct RoomController {
    design: Option<Shared<Design>>,
    listeners: ListenerRegistry<RoomChangedFn>,
}

impl RoomController {
    pub fn new(design: Option<Shared<Design>>) -> Self {
        Self {
            design,
            listeners: ListenerRegistry::new(),
        }
    }

    pub fn add_listener(&mut self, listener: Box<RoomChangedFn>) -> ListenerHandle {
        self.listeners.add(listener)
    }

    pub fn remove_listener(&mut self, handle: ListenerHandle) -> bool {
        self.listeners.remove(handle)
    }

    pub fn set_current_design(&mut self, design: Option<Shared<Design>>) {
        self.design = design;
        self.notify();
    }

    /// Copy of the current room.
    pub fn current_room(&self) -> Option<Room> {
        self.design.as_ref().map(|d| d.borrow().room().clone())
    }

    pub fn update_room_dimensions(&mut self, width: f64, length: f64, height: f64) -> DesignerResult<()> {
        Room::validate_dimensions(width, length, height)?;
        self.edit(|room| {
            room.width = width;
            room.length = length;
            room.height = height;
        })?;
        debug!("Room dimensions set to {}x{}x{}", width, length, height);
        Ok(())
    }

    /// Set the shape by display name, e.g. `"L-Shaped"`.
    pub fn update_room_shape(&mut self, shape: &str) -> DesignerResult<()> {
        let shape: RoomShape = shape.parse()?;
        self.edit(|room| room.shape = shape)
    }

    pub fn update_room_name(&mut self, name: &str) -> DesignerResult<()> {
        self.edit(|room| room.name = name.to_string())
    }

    /// Apply a preset scheme by name. Returns false for an unknown name or
    /// when no design is loaded.
    pub fn set_predefined_color_scheme(&mut self, name: &str) -> bool {
        let Some(scheme) = ColorScheme::preset(name) else {
            return false;
        };
        self.edit(|room| room.color_scheme = scheme).is_ok()
    }

    /// Replace the four colors of the room's current scheme.
    pub fn update_color_scheme(
        &mut self,
        wall: Rgba,
        floor: Rgba,
        ceiling: Rgba,
        accent: Rgba,
    ) -> DesignerResult<()> {
        self.edit(|room| {
            let scheme = &mut room.color_scheme;
            scheme.wall = wall;
            scheme.floor = floor;
            scheme.ceiling = ceiling;
            scheme.accent = accent;
        })
    }

    pub fn available_room_shapes(&self) -> Vec<RoomShape> {
        RoomShape::ALL.to_vec()
    }

    pub fn predefined_color_schemes(&self) -> Vec<ColorScheme> {
        ColorScheme::presets()
    }

    /// Replace the room with a default one.
    pub fn create_new_room(&mut self) -> DesignerResult<Room> {
        let room = Room::default();
        let design = self.design.clone().ok_or(Error::NoDesign)?;
        design.borrow_mut().set_room(room.clone());
        self.notify();
        Ok(room)
    }

    pub fn validate_room_dimensions(width: f64, length: f64, height: f64) -> bool {
        Room::validate_dimensions(width, length, height).is_ok()
    }

    fn edit(&mut self, apply: impl FnOnce(&mut Room)) -> DesignerResult<()> {
        let design = self.design.clone().ok_or(Error::NoDesign)?;
        {
            let mut design = design.borrow_mut();
            apply(design.room_mut());
            design.touch();
        }
        self.notify();
        Ok(())
    }

    fn notify(&self) {
        let Some(design) = &self.design else {
            return;
        };
        let design = design.borrow();
        self.listeners.notify(|listener| listener(design.room()));
    }
}
