//! 3D view controller
//!
//! Edits the shared design from the 3D panel and forwards the result to the
//! scene engine. Unlike the 2D view, moves here are clamped to the room.

use std::collections::HashMap;

use furniview_core::constants::MIN_FURNITURE_DIMENSION;
use furniview_core::listener::DesignChangedFn;
use furniview_core::{
    Design, Furniture, FurnitureId, ListenerHandle, ListenerRegistry, Rgba, Shared,
};
use tracing::debug;

use crate::camera::Camera3D;
use crate::engine::SceneHandle;

/// Controller for the 3D view.
pub struct Design3DController {
    design: Option<Shared<Design>>,
    selected: Option<FurnitureId>,
    visibility: HashMap<FurnitureId, bool>,
    camera: Camera3D,
    auto_rotate: bool,
    engine: SceneHandle,
    listeners: ListenerRegistry<DesignChangedFn>,
}

impl Design3DController {
    pub fn new(engine: SceneHandle) -> Self {
        Self {
            design: None,
            selected: None,
            visibility: HashMap::new(),
            camera: Camera3D::default(),
            auto_rotate: false,
            engine,
            listeners: ListenerRegistry::new(),
        }
    }

    pub fn add_listener(&mut self, listener: Box<DesignChangedFn>) -> ListenerHandle {
        self.listeners.add(listener)
    }

    pub fn remove_listener(&mut self, handle: ListenerHandle) -> bool {
        self.listeners.remove(handle)
    }

    pub fn engine(&self) -> &SceneHandle {
        &self.engine
    }

    /// Replace the viewed design. Every item becomes visible and the
    /// selection is cleared.
    pub fn set_current_design(&mut self, design: Option<Shared<Design>>) {
        self.visibility = design
            .as_ref()
            .map(|d| d.borrow().furniture().iter().map(|f| (f.id, true)).collect())
            .unwrap_or_default();
        self.design = design;
        self.selected = None;
        self.engine.clear_overrides();
        self.changed();
    }

    pub fn current_design(&self) -> Option<Shared<Design>> {
        self.design.clone()
    }

    pub fn selected_id(&self) -> Option<FurnitureId> {
        self.selected
    }

    pub fn selected_furniture(&self) -> Option<Furniture> {
        let id = self.selected?;
        self.design.as_ref()?.borrow().furniture_by_id(id).cloned()
    }

    /// Select by id. An unknown id clears the selection.
    pub fn select_furniture(&mut self, id: FurnitureId) {
        self.selected = self
            .design
            .as_ref()
            .and_then(|d| d.borrow().furniture_by_id(id).map(|f| f.id));
        self.changed();
    }

    /// Move an item, keeping it inside the room where it fits.
    pub fn move_furniture(&mut self, id: FurnitureId, x: f64, y: f64) {
        self.edit(id, |furniture, room_width, room_length| {
            furniture.pos_x = x.min(room_width - furniture.width).max(0.0);
            furniture.pos_y = y.min(room_length - furniture.length).max(0.0);
        });
    }

    pub fn rotate_furniture(&mut self, id: FurnitureId, degrees: f64) {
        self.edit(id, |furniture, _, _| furniture.rotation = degrees);
    }

    pub fn change_furniture_color(&mut self, id: FurnitureId, color: Rgba) {
        self.edit(id, |furniture, _, _| furniture.color = color);
    }

    /// Scale width by `sx`, length by `sy` and height by `sz`, never below
    /// the minimum furniture size.
    pub fn scale_furniture(&mut self, id: FurnitureId, sx: f64, sy: f64, sz: f64) {
        self.edit(id, |furniture, _, _| {
            furniture.width = (furniture.width * sx).max(MIN_FURNITURE_DIMENSION);
            furniture.length = (furniture.length * sy).max(MIN_FURNITURE_DIMENSION);
            furniture.height = (furniture.height * sz).max(MIN_FURNITURE_DIMENSION);
        });
    }

    pub fn scale_furniture_uniform(&mut self, id: FurnitureId, scale: f64) {
        self.scale_furniture(id, scale, scale, scale);
    }

    pub fn set_furniture_visibility(&mut self, id: FurnitureId, visible: bool) {
        self.visibility.insert(id, visible);
        self.engine.set_visibility(id, visible);
    }

    pub fn is_furniture_visible(&self, id: FurnitureId) -> bool {
        self.visibility.get(&id).copied().unwrap_or(true)
    }

    pub fn apply_shading(&self, id: FurnitureId, intensity: f64) {
        self.engine.apply_shading(id, intensity);
    }

    pub fn rotate_view(&mut self, x_deg: f64, y_deg: f64) {
        self.camera.set_rotation(x_deg, y_deg);
        self.engine.rotate_view(x_deg, y_deg);
    }

    pub fn reset_view(&mut self) {
        self.camera.reset();
        self.engine.reset_view();
    }

    /// Camera angles as `(x, y)` degrees.
    pub fn current_rotation(&self) -> (f64, f64) {
        (self.camera.rotate_x, self.camera.rotate_y)
    }

    pub fn zoom(&self) -> f64 {
        self.camera.zoom
    }

    pub fn toggle_auto_rotate(&mut self) -> bool {
        self.auto_rotate = !self.auto_rotate;
        debug!("Auto-rotate {}", if self.auto_rotate { "on" } else { "off" });
        self.auto_rotate
    }

    pub fn is_auto_rotate_enabled(&self) -> bool {
        self.auto_rotate
    }

    /// Orbit the camera by a pointer drag in pixels.
    pub fn pointer_dragged(&mut self, dx: f64, dy: f64) {
        self.camera.drag(dx, dy);
        self.engine.drag(dx, dy);
    }

    pub fn scrolled(&mut self, delta: f64) {
        self.camera.scroll(delta);
        self.engine.scroll(delta);
    }

    fn edit(&mut self, id: FurnitureId, apply: impl FnOnce(&mut Furniture, f64, f64)) {
        let Some(design) = self.design.clone() else {
            return;
        };
        let found = {
            let mut design = design.borrow_mut();
            let (room_width, room_length) = (design.room().width, design.room().length);
            let found = design
                .furniture_by_id_mut(id)
                .map(|f| apply(f, room_width, room_length))
                .is_some();
            if found {
                design.touch();
            }
            found
        };
        if found {
            self.changed();
        } else {
            debug!("No furniture {} in design", id);
        }
    }

    /// Push the design to the engine and notify listeners.
    fn changed(&self) {
        let design = self.design.as_ref().map(|d| d.borrow());
        self.engine.set_design(design.as_deref().cloned());

        let selected = self
            .selected
            .and_then(|id| design.as_deref().and_then(|d| d.furniture_by_id(id)));
        self.listeners
            .notify(|listener| listener(design.as_deref(), selected));
    }
}
