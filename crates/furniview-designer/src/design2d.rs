//! 2D layout controller
//!
//! Maps pointer events on the 2D canvas to design mutations. Holds the
//! selection, the viewport, and the renderer state; every mutation notifies
//! design listeners with `(design, selected)` and requests a repaint.
//!
//! Hit-testing and collision use the unrotated footprint of each item, and
//! moves are not clamped to the room.

use furniview_core::listener::DesignChangedFn;
use furniview_core::{
    Design, Furniture, FurnitureId, ListenerHandle, ListenerRegistry, Point, Rgba, Shared,
};
use image::RgbImage;
use tracing::debug;

use crate::renderer::{rasterize, DisplayList, Renderer2D, RepaintHandle};
use crate::viewport::Viewport;

/// Active pointer tool on the 2D canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerTool {
    #[default]
    Select,
    Move,
    Rotate,
}

#[derive(Debug, Clone, Copy)]
struct DragState {
    last: Point,
}

/// Controller for the top-down layout view.
pub struct Design2DController {
    design: Option<Shared<Design>>,
    selected: Option<FurnitureId>,
    viewport: Viewport,
    renderer: Renderer2D,
    listeners: ListenerRegistry<DesignChangedFn>,
    tool: PointerTool,
    drag: Option<DragState>,
}

impl Default for Design2DController {
    fn default() -> Self {
        Self::new(Viewport::default(), Renderer2D::default())
    }
}

impl Design2DController {
    pub fn new(viewport: Viewport, renderer: Renderer2D) -> Self {
        Self {
            design: None,
            selected: None,
            viewport,
            renderer,
            listeners: ListenerRegistry::new(),
            tool: PointerTool::default(),
            drag: None,
        }
    }

    pub fn add_listener(&mut self, listener: Box<DesignChangedFn>) -> ListenerHandle {
        self.listeners.add(listener)
    }

    pub fn remove_listener(&mut self, handle: ListenerHandle) -> bool {
        self.listeners.remove(handle)
    }

    /// Replace the edited design. Clears the selection.
    pub fn set_current_design(&mut self, design: Option<Shared<Design>>) {
        self.design = design;
        self.selected = None;
        self.drag = None;
        self.changed();
    }

    pub fn current_design(&self) -> Option<Shared<Design>> {
        self.design.clone()
    }

    pub fn selected_id(&self) -> Option<FurnitureId> {
        self.selected
    }

    /// Copy of the selected item, if it is still in the design.
    pub fn selected_furniture(&self) -> Option<Furniture> {
        let id = self.selected?;
        let design = self.design.as_ref()?;
        let design = design.borrow();
        design.furniture_by_id(id).cloned()
    }

    /// Select the first item whose footprint contains the screen point.
    /// No match clears the selection.
    pub fn select_furniture(&mut self, screen: Point) {
        self.selected = self.hit_test(screen);
        if let Some(id) = self.selected {
            debug!("Selected furniture {}", id);
        }
        self.changed();
    }

    /// Item under a screen point, first match in paint order.
    pub fn hit_test(&self, screen: Point) -> Option<FurnitureId> {
        let design = self.design.as_ref()?;
        let design = design.borrow();
        let model = self.viewport.screen_to_model(design.room(), screen);
        design
            .furniture()
            .iter()
            .find(|f| f.aabb().contains_point(&model))
            .map(|f| f.id)
    }

    /// Append an item and select it.
    pub fn add_furniture(&mut self, furniture: Furniture) {
        let Some(design) = &self.design else {
            return;
        };
        debug!("Adding furniture {} ({})", furniture.id, furniture.name);
        self.selected = Some(furniture.id);
        design.borrow_mut().add_furniture(furniture);
        self.changed();
    }

    pub fn remove_furniture(&mut self, id: FurnitureId) {
        let Some(design) = &self.design else {
            return;
        };
        if self.selected == Some(id) {
            self.selected = None;
        }
        if design.borrow_mut().remove_furniture(id).is_some() {
            debug!("Removed furniture {}", id);
        }
        self.changed();
    }

    /// Set an item's position in metres. Not clamped to the room.
    pub fn move_furniture(&mut self, id: FurnitureId, x: f64, y: f64) {
        self.edit(id, |f| {
            f.pos_x = x;
            f.pos_y = y;
        });
    }

    pub fn move_furniture_relative(&mut self, id: FurnitureId, dx: f64, dy: f64) {
        self.edit(id, |f| {
            f.pos_x += dx;
            f.pos_y += dy;
        });
    }

    /// Set rotation in degrees, stored as given.
    pub fn rotate_furniture(&mut self, id: FurnitureId, degrees: f64) {
        self.edit(id, |f| f.rotation = degrees);
    }

    pub fn change_furniture_color(&mut self, id: FurnitureId, color: Rgba) {
        self.edit(id, |f| f.color = color);
    }

    fn edit(&mut self, id: FurnitureId, apply: impl FnOnce(&mut Furniture)) {
        let Some(design) = &self.design else {
            return;
        };
        let found = {
            let mut design = design.borrow_mut();
            match design.furniture_by_id_mut(id) {
                Some(furniture) => {
                    apply(furniture);
                    debug!(
                        "Updated furniture {} at ({:.2}, {:.2}) rot {:.1}",
                        id, furniture.pos_x, furniture.pos_y, furniture.rotation
                    );
                    true
                }
                None => false,
            }
        };
        if found {
            design.borrow_mut().touch();
            self.changed();
        }
    }

    /// Whether `furniture` strictly overlaps any other item in the design.
    pub fn check_furniture_collision(&self, furniture: &Furniture) -> bool {
        let Some(design) = &self.design else {
            return false;
        };
        design
            .borrow()
            .furniture()
            .iter()
            .filter(|other| other.id != furniture.id)
            .any(|other| Self::check_collision_between(furniture, other))
    }

    /// Strict footprint overlap between two items; touching edges do not
    /// collide.
    pub fn check_collision_between(a: &Furniture, b: &Furniture) -> bool {
        a.aabb().overlaps(&b.aabb())
    }

    /// Whether the item's footprint lies inside the room, edges inclusive.
    pub fn is_furniture_within_room(&self, furniture: &Furniture) -> bool {
        let Some(design) = &self.design else {
            return false;
        };
        design.borrow().room().footprint().contains(&furniture.aabb())
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
        self.renderer.request_repaint();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
        self.renderer.request_repaint();
    }

    pub fn pan(&mut self, dx: i32, dy: i32) {
        self.viewport.pan_by(dx, dy);
        self.renderer.request_repaint();
    }

    pub fn reset_view(&mut self) {
        self.viewport.reset();
        self.renderer.request_repaint();
    }

    pub fn toggle_grid(&mut self) {
        self.renderer.toggle_grid();
    }

    pub fn toggle_labels(&mut self) {
        self.renderer.toggle_labels();
    }

    /// Current zoom factor.
    pub fn scale(&self) -> f64 {
        self.viewport.zoom()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.viewport.set_canvas_size(width, height);
        self.renderer.request_repaint();
    }

    pub fn renderer(&self) -> &Renderer2D {
        &self.renderer
    }

    pub fn repaint_handle(&self) -> RepaintHandle {
        self.renderer.repaint_handle()
    }

    pub fn display_list(&self) -> DisplayList {
        let design = self.design.as_ref().map(|d| d.borrow());
        self.renderer
            .build_display_list(design.as_deref(), &self.viewport, self.selected)
    }

    /// Rasterize the current view at the viewport's canvas size.
    pub fn render(&self) -> RgbImage {
        let width = self.viewport.canvas_width().max(1.0) as u32;
        let height = self.viewport.canvas_height().max(1.0) as u32;
        rasterize(&self.display_list(), width, height)
    }

    pub fn tool(&self) -> PointerTool {
        self.tool
    }

    pub fn set_tool(&mut self, tool: PointerTool) {
        self.tool = tool;
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Pointer down. Select mode selects; Move and Rotate start a drag and
    /// pick up the item under the pointer if nothing is selected yet.
    pub fn pointer_pressed(&mut self, screen: Point) {
        match self.tool {
            PointerTool::Select => self.select_furniture(screen),
            PointerTool::Move | PointerTool::Rotate => {
                self.drag = Some(DragState { last: screen });
                if self.selected_furniture().is_none() {
                    self.select_furniture(screen);
                }
            }
        }
    }

    /// Pointer motion while pressed.
    pub fn pointer_dragged(&mut self, screen: Point) {
        let Some(drag) = self.drag else {
            return;
        };
        let Some(selected) = self.selected_furniture() else {
            return;
        };

        match self.tool {
            PointerTool::Move => {
                let dx = self.viewport.pixels_to_meters(screen.x - drag.last.x);
                let dy = self.viewport.pixels_to_meters(screen.y - drag.last.y);
                self.move_furniture_relative(selected.id, dx, dy);
                self.drag = Some(DragState { last: screen });
            }
            PointerTool::Rotate => {
                let Some(center) = self.screen_center_of(&selected) else {
                    return;
                };
                let angle = (screen.y - center.y).atan2(screen.x - center.x).to_degrees();
                self.rotate_furniture(selected.id, angle);
            }
            PointerTool::Select => {}
        }
    }

    pub fn pointer_released(&mut self) {
        self.drag = None;
    }

    fn screen_center_of(&self, furniture: &Furniture) -> Option<Point> {
        let design = self.design.as_ref()?;
        let design = design.borrow();
        Some(
            self.viewport
                .model_to_screen(design.room(), furniture.aabb().center()),
        )
    }

    fn changed(&self) {
        let design = self.design.as_ref().map(|d| d.borrow());
        let design = design.as_deref();
        let selected = self
            .selected
            .and_then(|id| design.and_then(|d| d.furniture_by_id(id)));
        self.listeners.notify(|listener| listener(design, selected));
        self.renderer.request_repaint();
    }
}
