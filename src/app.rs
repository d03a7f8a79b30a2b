//! Application context.
//!
//! Owns every controller plus the scene engine and wires them together:
//!
//! ```text
//! DesignController ───(design changed)──► SceneEngine.set_design + 2D repaint
//! Design2DController ──(design changed)──► SceneEngine.set_design
//! Design3DController ──(design changed)──► 2D repaint request
//! RoomController ─────(room changed)────► SceneEngine.set_design + 2D repaint
//! ```
//!
//! Design operations require a logged-in user.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use furniview_core::{Design, Error, Furniture, FurnitureId, Room, Shared};
use furniview_designer::{
    Design2DController, DesignController, FurnitureCatalog, Renderer2D, RoomController, Viewport,
};
use furniview_storage::{AppConfig, CatalogStore, FileManager, UserStore};
use furniview_visualizer::{Design3DController, SceneEngine};
use tracing::{info, warn};

use crate::error::{AppError, AppResult};

/// Top-level panels of the main window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePanel {
    #[default]
    Dashboard,
    RoomSetup,
    Catalog,
    Design2D,
    Design3D,
    Management,
}

impl ActivePanel {
    pub const ALL: [ActivePanel; 6] = [
        ActivePanel::Dashboard,
        ActivePanel::RoomSetup,
        ActivePanel::Catalog,
        ActivePanel::Design2D,
        ActivePanel::Design3D,
        ActivePanel::Management,
    ];

    /// Panels that edit the current design.
    pub fn requires_design(self) -> bool {
        matches!(self, Self::RoomSetup | Self::Design2D | Self::Design3D)
    }
}

impl fmt::Display for ActivePanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Dashboard => "Dashboard",
            Self::RoomSetup => "Room Setup",
            Self::Catalog => "Furniture Catalog",
            Self::Design2D => "2D Design",
            Self::Design3D => "3D View",
            Self::Management => "Design Management",
        };
        f.write_str(label)
    }
}

pub struct AppContext {
    config: AppConfig,
    users: UserStore,
    catalog: FurnitureCatalog,
    designs: DesignController,
    rooms: RoomController,
    design2d: Design2DController,
    design3d: Design3DController,
    active_design: Rc<RefCell<Option<Shared<Design>>>>,
    panel: ActivePanel,
    engine: SceneEngine,
}

impl AppContext {
    /// Open the stores, build the controllers, and start the scene engine.
    pub fn init(config: AppConfig) -> AppResult<Self> {
        let storage = &config.storage;
        let users = UserStore::open(&storage.users_file)?;
        let catalog = FurnitureCatalog::open(CatalogStore::new(&storage.catalog_file));
        let mut designs = DesignController::new(FileManager::new(&storage.designs_dir));

        let mut engine = SceneEngine::new();
        engine.start()?;

        let view = &config.view;
        let mut design2d = Design2DController::new(
            Viewport::new(f64::from(view.canvas_width), f64::from(view.canvas_height)),
            Renderer2D::new(view.show_grid, view.show_labels),
        );
        let mut design3d = Design3DController::new(engine.handle());
        let mut rooms = RoomController::default();
        let active_design: Rc<RefCell<Option<Shared<Design>>>> = Rc::new(RefCell::new(None));

        let scene = engine.handle();
        let repaint = design2d.repaint_handle();
        designs.add_listener(Box::new(
            move |design: Option<&Design>, _selected: Option<&Furniture>| {
                scene.set_design(design.cloned());
                repaint.request();
            },
        ));

        let scene = engine.handle();
        design2d.add_listener(Box::new(
            move |design: Option<&Design>, _selected: Option<&Furniture>| {
                scene.set_design(design.cloned());
            },
        ));

        let repaint = design2d.repaint_handle();
        design3d.add_listener(Box::new(
            move |_design: Option<&Design>, _selected: Option<&Furniture>| repaint.request(),
        ));

        let scene = engine.handle();
        let repaint = design2d.repaint_handle();
        let current = active_design.clone();
        rooms.add_listener(Box::new(move |_room: &Room| {
            if let Some(design) = current.borrow().as_ref() {
                scene.set_design(Some(design.borrow().clone()));
            }
            repaint.request();
        }));

        info!(
            "Application context ready ({} catalog items, designs in {})",
            catalog.items().len(),
            designs.file_manager().dir().display()
        );

        Ok(Self {
            config,
            users,
            catalog,
            designs,
            rooms,
            design2d,
            design3d,
            active_design,
            panel: ActivePanel::default(),
            engine,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn login(&mut self, username: &str, password: &str) -> bool {
        self.users.login(username, password)
    }

    /// Log out and close the current design.
    pub fn logout(&mut self) {
        self.users.logout();
        self.attach(None);
        self.designs.set_current_design(None);
        self.panel = ActivePanel::Dashboard;
    }

    pub fn register(&mut self, username: &str, password: &str) -> AppResult<bool> {
        Ok(self.users.register_user(username, password)?)
    }

    pub fn current_user(&self) -> Option<&str> {
        self.users.current_user()
    }

    pub fn is_logged_in(&self) -> bool {
        self.users.is_logged_in()
    }

    /// Start a new design owned by the logged-in user.
    pub fn new_design(&mut self) -> AppResult<Shared<Design>> {
        let user = self.require_user()?;
        let design = self.designs.create_new_design(&user);
        self.attach(Some(design.clone()));
        Ok(design)
    }

    pub fn open_design(&mut self, name: &str) -> AppResult<Shared<Design>> {
        self.require_user()?;
        let design = self.designs.load_design(name)?;
        self.attach(Some(design.clone()));
        Ok(design)
    }

    /// Save the current design, under `name` if given or the last used
    /// name otherwise.
    pub fn save_current(&mut self, name: Option<&str>) -> AppResult<()> {
        self.require_user()?;
        match name {
            Some(name) => self.designs.save_design_as(name)?,
            None => self.designs.save_design()?,
        }
        Ok(())
    }

    pub fn close_design(&mut self) {
        self.designs.set_current_design(None);
        self.attach(None);
        if self.panel.requires_design() {
            self.panel = ActivePanel::Dashboard;
        }
    }

    pub fn current_design(&self) -> Option<Shared<Design>> {
        self.active_design.borrow().clone()
    }

    /// Place a copy of a catalog template in the current design.
    pub fn place_from_catalog(&mut self, template: FurnitureId) -> AppResult<FurnitureId> {
        if self.current_design().is_none() {
            return Err(Error::NoDesign.into());
        }
        let item = self
            .catalog
            .get(template)
            .map(|t| self.catalog.create_copy(t))
            .ok_or(Error::FurnitureNotFound(template))?;
        let id = item.id;
        self.design2d.add_furniture(item);
        Ok(id)
    }

    /// Switch panels. Panels that need a design fall back to the dashboard
    /// when none is loaded.
    pub fn switch_panel(&mut self, panel: ActivePanel) -> ActivePanel {
        self.panel = if panel.requires_design() && self.current_design().is_none() {
            warn!("{} needs an open design", panel);
            ActivePanel::Dashboard
        } else {
            panel
        };
        self.panel
    }

    pub fn active_panel(&self) -> ActivePanel {
        self.panel
    }

    pub fn catalog(&self) -> &FurnitureCatalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut FurnitureCatalog {
        &mut self.catalog
    }

    pub fn designs(&self) -> &DesignController {
        &self.designs
    }

    pub fn designs_mut(&mut self) -> &mut DesignController {
        &mut self.designs
    }

    pub fn rooms_mut(&mut self) -> &mut RoomController {
        &mut self.rooms
    }

    pub fn design2d(&self) -> &Design2DController {
        &self.design2d
    }

    pub fn design2d_mut(&mut self) -> &mut Design2DController {
        &mut self.design2d
    }

    pub fn design3d(&self) -> &Design3DController {
        &self.design3d
    }

    pub fn design3d_mut(&mut self) -> &mut Design3DController {
        &mut self.design3d
    }

    pub fn engine(&self) -> &SceneEngine {
        &self.engine
    }

    /// Stop the scene engine and save the catalog.
    pub fn shutdown(&mut self) -> AppResult<()> {
        self.engine.shutdown();
        self.catalog.save()?;
        info!("Application context shut down");
        Ok(())
    }

    fn require_user(&self) -> AppResult<String> {
        self.users
            .current_user()
            .map(str::to_string)
            .ok_or(AppError::NotLoggedIn)
    }

    fn attach(&mut self, design: Option<Shared<Design>>) {
        *self.active_design.borrow_mut() = design.clone();
        self.rooms.set_current_design(design.clone());
        self.design2d.set_current_design(design.clone());
        self.design3d.set_current_design(design);
    }
}
