//! Design lifecycle: create, edit metadata, save and load.

use furniview_core::listener::DesignChangedFn;
use furniview_core::{
    shared, Design, Error, Furniture, FurnitureId, ListenerHandle, ListenerRegistry, Room, Shared,
};
use furniview_storage::{FileManager, StorageError};
use tracing::{debug, info, warn};

use crate::error::DesignerResult;

/// Name given to freshly created designs.
pub const UNTITLED_DESIGN: &str = "Untitled Design";

/// Owns the current design and its link to a saved file.
pub struct DesignController {
    design: Option<Shared<Design>>,
    files: FileManager,
    last_saved_file_name: Option<String>,
    listeners: ListenerRegistry<DesignChangedFn>,
}

impl DesignController {
    pub fn new(files: FileManager) -> Self {
        Self {
            design: None,
            files,
            last_saved_file_name: None,
            listeners: ListenerRegistry::new(),
        }
    }

    pub fn add_listener(&mut self, listener: Box<DesignChangedFn>) -> ListenerHandle {
        self.listeners.add(listener)
    }

    pub fn remove_listener(&mut self, handle: ListenerHandle) -> bool {
        self.listeners.remove(handle)
    }

    pub fn file_manager(&self) -> &FileManager {
        &self.files
    }

    pub fn current_design(&self) -> Option<Shared<Design>> {
        self.design.clone()
    }

    /// Replace the current design. Forgets the saved file name.
    pub fn set_current_design(&mut self, design: Option<Shared<Design>>) {
        self.design = design;
        self.last_saved_file_name = None;
        self.notify();
    }

    /// Start a new design with a default room.
    pub fn create_new_design(&mut self, designer_id: &str) -> Shared<Design> {
        let design = shared(Design::new(
            UNTITLED_DESIGN,
            format!("New design created by {designer_id}"),
            Room::default(),
            designer_id,
        ));
        info!("Created new design for {}", designer_id);
        self.set_current_design(Some(design.clone()));
        design
    }

    pub fn update_design_name(&mut self, name: &str) -> DesignerResult<()> {
        self.require()?.borrow_mut().set_name(name);
        self.notify();
        Ok(())
    }

    pub fn update_design_description(&mut self, description: &str) -> DesignerResult<()> {
        self.require()?.borrow_mut().set_description(description);
        self.notify();
        Ok(())
    }

    pub fn add_furniture(&mut self, furniture: Furniture) -> DesignerResult<()> {
        debug!("Adding furniture {} to design", furniture.id);
        self.require()?.borrow_mut().add_furniture(furniture);
        self.notify();
        Ok(())
    }

    /// Returns false if no item has this id.
    pub fn remove_furniture(&mut self, id: FurnitureId) -> DesignerResult<bool> {
        let removed = self.require()?.borrow_mut().remove_furniture(id).is_some();
        if removed {
            self.notify();
        }
        Ok(removed)
    }

    /// Copies of every item in paint order.
    pub fn all_furniture(&self) -> Vec<Furniture> {
        self.design
            .as_ref()
            .map(|d| d.borrow().furniture().to_vec())
            .unwrap_or_default()
    }

    pub fn update_furniture_position(&mut self, id: FurnitureId, x: f64, y: f64) -> DesignerResult<bool> {
        self.update_furniture(id, |f| {
            f.pos_x = x;
            f.pos_y = y;
        })
    }

    pub fn update_furniture_rotation(&mut self, id: FurnitureId, degrees: f64) -> DesignerResult<bool> {
        self.update_furniture(id, |f| f.rotation = degrees)
    }

    fn update_furniture(&mut self, id: FurnitureId, apply: impl FnOnce(&mut Furniture)) -> DesignerResult<bool> {
        let design = self.require()?;
        let updated = {
            let mut design = design.borrow_mut();
            let found = design.furniture_by_id_mut(id).map(apply).is_some();
            if found {
                design.touch();
            }
            found
        };
        if updated {
            self.notify();
        }
        Ok(updated)
    }

    /// Save under `name` and remember it for [`DesignController::save_design`].
    pub fn save_design_as(&mut self, name: &str) -> DesignerResult<()> {
        let design = self.require()?;
        self.files.save_design(&design.borrow(), name)?;
        self.last_saved_file_name = Some(name.to_string());
        Ok(())
    }

    /// Save under the last used name.
    pub fn save_design(&mut self) -> DesignerResult<()> {
        let name = self
            .last_saved_file_name
            .clone()
            .ok_or(StorageError::NoPreviousFileName)?;
        self.save_design_as(&name)
    }

    /// Load a stored design and make it current. On failure the current
    /// design is left unchanged.
    pub fn load_design(&mut self, name: &str) -> DesignerResult<Shared<Design>> {
        let design = shared(self.files.load_design(name)?);
        self.set_current_design(Some(design.clone()));
        self.last_saved_file_name = Some(name.to_string());
        info!("Loaded design '{}'", name);
        Ok(design)
    }

    pub fn saved_designs(&self) -> Vec<String> {
        self.files.list_designs()
    }

    pub fn design_exists(&self, name: &str) -> bool {
        self.files.design_exists(name)
    }

    pub fn delete_design(&mut self, name: &str) -> bool {
        let deleted = self.files.delete_design(name);
        if deleted && self.last_saved_file_name.as_deref() == Some(name) {
            self.last_saved_file_name = None;
        }
        deleted
    }

    pub fn last_saved_file_name(&self) -> Option<&str> {
        self.last_saved_file_name.as_deref()
    }

    /// Whether the current design differs from its stored copy, judged by
    /// modification time. Unsaved or unreadable counts as modified.
    pub fn is_design_modified(&self) -> bool {
        let (Some(name), Some(design)) = (&self.last_saved_file_name, &self.design) else {
            return true;
        };
        match self.files.load_design(name) {
            Ok(saved) => saved.last_modified() != design.borrow().last_modified(),
            Err(e) => {
                warn!("Could not read saved design '{}': {}", name, e);
                true
            }
        }
    }

    fn require(&self) -> Result<Shared<Design>, Error> {
        self.design.clone().ok_or(Error::NoDesign)
    }

    fn notify(&self) {
        let design = self.design.as_ref().map(|d| d.borrow());
        let design = design.as_deref();
        self.listeners.notify(|listener| listener(design, None));
    }
}
