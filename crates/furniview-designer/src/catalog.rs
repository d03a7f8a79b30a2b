//! Furniture template catalog.
//!
//! Templates are grouped into type buckets. The default buckets always
//! exist, even when empty; new types get a bucket on first use.

use furniview_core::listener::CatalogChangedFn;
use furniview_core::{Furniture, FurnitureId, ListenerHandle, ListenerRegistry, Rgba};
use furniview_storage::{CatalogStore, StorageResult};
use tracing::{info, warn};

/// Type buckets present in every catalog, in menu order.
pub const DEFAULT_TYPES: [&str; 8] = [
    "Chair", "Table", "Sofa", "Bed", "Cabinet", "Desk", "Bookshelf", "Lamp",
];

/// Templates seeded into an empty catalog.
pub fn default_furniture() -> Vec<Furniture> {
    vec![
        Furniture::new("Dining Chair", "Chair", 0.5, 0.5, 0.9, Rgba::rgb(120, 81, 45), "wood"),
        Furniture::new("Office Chair", "Chair", 0.6, 0.6, 1.0, Rgba::rgb(40, 40, 40), "leather"),
        Furniture::new("Dining Table", "Table", 1.6, 0.9, 0.75, Rgba::rgb(110, 85, 60), "wood"),
        Furniture::new("Coffee Table", "Table", 1.2, 0.6, 0.45, Rgba::rgb(100, 70, 40), "wood"),
        Furniture::new("3-Seater Sofa", "Sofa", 2.0, 0.9, 0.8, Rgba::rgb(70, 70, 140), "fabric"),
        Furniture::new("Loveseat", "Sofa", 1.4, 0.9, 0.8, Rgba::rgb(170, 80, 90), "fabric"),
        Furniture::new("Queen Bed", "Bed", 1.6, 2.0, 0.5, Rgba::rgb(160, 120, 80), "wood"),
        Furniture::new("TV Cabinet", "Cabinet", 1.8, 0.5, 0.6, Rgba::rgb(100, 90, 80), "wood"),
    ]
}

/// New attribute values for [`FurnitureCatalog::update`].
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateUpdate {
    pub name: String,
    pub furniture_type: String,
    pub width: f64,
    pub length: f64,
    pub height: f64,
    pub color: Rgba,
    pub material: String,
}

/// The template list backed by a catalog file.
pub struct FurnitureCatalog {
    store: CatalogStore,
    items: Vec<Furniture>,
    types: Vec<String>,
    listeners: ListenerRegistry<CatalogChangedFn>,
}

impl FurnitureCatalog {
    /// Load the catalog file, seeding and saving the defaults when it is
    /// missing, unreadable, or empty.
    pub fn open(store: CatalogStore) -> Self {
        let mut catalog = Self {
            store,
            items: Vec::new(),
            types: DEFAULT_TYPES.iter().map(|t| t.to_string()).collect(),
            listeners: ListenerRegistry::new(),
        };

        match catalog.store.load().filter(|items| !items.is_empty()) {
            Some(items) => {
                for item in &items {
                    catalog.ensure_type(&item.furniture_type);
                }
                catalog.items = items;
            }
            None => {
                for item in default_furniture() {
                    catalog.ensure_type(&item.furniture_type);
                    catalog.items.push(item);
                }
                if let Err(e) = catalog.save() {
                    warn!("Error saving furniture catalog: {}", e);
                }
                info!("Seeded furniture catalog with {} items", catalog.items.len());
            }
        }
        catalog
    }

    pub fn add_listener(&mut self, listener: Box<CatalogChangedFn>) -> ListenerHandle {
        self.listeners.add(listener)
    }

    pub fn remove_listener(&mut self, handle: ListenerHandle) -> bool {
        self.listeners.remove(handle)
    }

    pub fn items(&self) -> &[Furniture] {
        &self.items
    }

    /// Templates of one type, in catalog order.
    pub fn by_type(&self, furniture_type: &str) -> Vec<Furniture> {
        self.items
            .iter()
            .filter(|f| f.furniture_type == furniture_type)
            .cloned()
            .collect()
    }

    /// All type buckets, defaults first.
    pub fn types(&self) -> &[String] {
        &self.types
    }

    pub fn get(&self, id: FurnitureId) -> Option<&Furniture> {
        self.items.iter().find(|f| f.id == id)
    }

    pub fn add(&mut self, furniture: Furniture) {
        self.ensure_type(&furniture.furniture_type);
        self.items.push(furniture);
        self.notify();
    }

    pub fn remove(&mut self, id: FurnitureId) -> bool {
        let before = self.items.len();
        self.items.retain(|f| f.id != id);
        let removed = self.items.len() != before;
        if removed {
            self.notify();
        }
        removed
    }

    /// Update a template's attributes. Returns false for an unknown id.
    pub fn update(&mut self, id: FurnitureId, update: TemplateUpdate) -> bool {
        let Some(item) = self.items.iter_mut().find(|f| f.id == id) else {
            return false;
        };
        item.name = update.name;
        item.furniture_type = update.furniture_type.clone();
        item.width = update.width;
        item.length = update.length;
        item.height = update.height;
        item.color = update.color;
        item.material = update.material;
        self.ensure_type(&update.furniture_type);
        self.notify();
        true
    }

    /// Copy of a template with a fresh id, ready to place in a design.
    pub fn create_copy(&self, template: &Furniture) -> Furniture {
        template.duplicate()
    }

    pub fn save(&self) -> StorageResult<()> {
        self.store.save(&self.items)
    }

    fn ensure_type(&mut self, furniture_type: &str) {
        if !self.types.iter().any(|t| t == furniture_type) {
            self.types.push(furniture_type.to_string());
        }
    }

    fn notify(&self) {
        self.listeners.notify(|listener| listener());
    }
}
