//! Scene graph for the 3D view.
//!
//! The graph is rebuilt from scratch on every design change. Everything is
//! in scene units (metres × 100) with the room centred on the origin. The
//! Y axis points down: the floor slab sits at `+height/2` and the ceiling
//! at `-height/2`.

use std::collections::HashMap;

use glam::{DMat4, DVec3};
use tracing::{debug, warn};

use furniview_core::constants::SLAB_THICKNESS_UNITS;
use furniview_core::{meters_to_units, Design, Furniture, FurnitureId, Rgba, Room};

/// Label shown when no design is loaded.
pub const PLACEHOLDER_LABEL: &str = "No design loaded";

/// Specular power of furniture before any shading is applied.
pub const DEFAULT_SPECULAR_POWER: f64 = 32.0;

/// Surface description for one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub diffuse: Rgba,
    pub specular: Option<Rgba>,
    pub specular_power: f64,
}

impl Material {
    /// Matte surface used for the room shell.
    pub fn matte(diffuse: Rgba) -> Self {
        Self {
            diffuse,
            specular: None,
            specular_power: DEFAULT_SPECULAR_POWER,
        }
    }

    /// Glossy surface used for furniture.
    pub fn glossy(diffuse: Rgba) -> Self {
        Self {
            diffuse,
            specular: Some(Rgba::WHITE),
            specular_power: DEFAULT_SPECULAR_POWER,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallSide {
    Left,
    Right,
    Back,
    Front,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Floor,
    Ceiling,
    Wall(WallSide),
    Furniture(FurnitureId),
    Placeholder,
}

/// One box in the scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub kind: NodeKind,
    pub label: String,
    pub center: DVec3,
    pub size: DVec3,
    /// Rotation about the Y axis, in degrees.
    pub rotation_y: f64,
    pub material: Material,
    pub visible: bool,
}

impl SceneNode {
    fn slab(kind: NodeKind, label: &str, center: DVec3, size: DVec3, color: Rgba) -> Self {
        Self {
            kind,
            label: label.to_string(),
            center,
            size,
            rotation_y: 0.0,
            material: Material::matte(color),
            visible: true,
        }
    }

    /// Translation, then rotation about Y, then scale of a unit cube.
    pub fn model_matrix(&self) -> DMat4 {
        DMat4::from_translation(self.center)
            * DMat4::from_rotation_y(self.rotation_y.to_radians())
            * DMat4::from_scale(self.size)
    }

    /// Unrotated min and max corners.
    pub fn bounds(&self) -> (DVec3, DVec3) {
        let half = self.size / 2.0;
        (self.center - half, self.center + half)
    }

    pub fn furniture_id(&self) -> Option<FurnitureId> {
        match self.kind {
            NodeKind::Furniture(id) => Some(id),
            _ => None,
        }
    }
}

/// Per-item view state that is not part of the design.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewOverrides {
    /// Items missing from the map are visible.
    pub visibility: HashMap<FurnitureId, bool>,
    /// Shading intensity per item.
    pub shading: HashMap<FurnitureId, f64>,
}

impl ViewOverrides {
    pub fn is_visible(&self, id: FurnitureId) -> bool {
        self.visibility.get(&id).copied().unwrap_or(true)
    }

    pub fn clear(&mut self) {
        self.visibility.clear();
        self.shading.clear();
    }
}

/// The boxes making up one frame of the 3D view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
}

impl SceneGraph {
    /// Build the scene for a design.
    pub fn build(design: Option<&Design>, overrides: &ViewOverrides) -> Self {
        let Some(design) = design else {
            return Self::placeholder();
        };

        let mut nodes = Vec::new();
        let room = design.room();
        if room.has_valid_dimensions() {
            nodes.extend(room_nodes(room));
        } else {
            warn!(
                "Room has invalid dimensions {}x{}x{}, skipping walls",
                room.width, room.length, room.height
            );
        }

        for furniture in design.furniture() {
            match furniture_node(furniture, room) {
                Some(mut node) => {
                    node.visible = overrides.is_visible(furniture.id);
                    if let Some(intensity) = overrides.shading.get(&furniture.id) {
                        node.material.specular_power = intensity * 100.0;
                    }
                    nodes.push(node);
                }
                None => warn!("Skipping furniture {} with invalid size", furniture.id),
            }
        }

        debug!("Built scene with {} nodes", nodes.len());
        Self { nodes }
    }

    /// A scene holding only the "no design" marker.
    pub fn placeholder() -> Self {
        Self {
            nodes: vec![SceneNode {
                kind: NodeKind::Placeholder,
                label: PLACEHOLDER_LABEL.to_string(),
                center: DVec3::ZERO,
                size: DVec3::ZERO,
                rotation_y: 0.0,
                material: Material::matte(Rgba::BLACK),
                visible: true,
            }],
        }
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.nodes.as_slice(), [node] if node.kind == NodeKind::Placeholder)
    }

    pub fn node(&self, kind: NodeKind) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.kind == kind)
    }

    pub fn furniture_node(&self, id: FurnitureId) -> Option<&SceneNode> {
        self.node(NodeKind::Furniture(id))
    }

    pub fn visible_nodes(&self) -> impl Iterator<Item = &SceneNode> {
        self.nodes.iter().filter(|n| n.visible)
    }

    /// Show or hide one furniture node in place. Returns false if the item
    /// is not in the scene.
    pub fn set_visibility(&mut self, id: FurnitureId, visible: bool) -> bool {
        match self.furniture_node_mut(id) {
            Some(node) => {
                node.visible = visible;
                true
            }
            None => false,
        }
    }

    /// Set the specular power of one furniture node from a shading
    /// intensity. Returns false if the item is not in the scene.
    pub fn apply_shading(&mut self, id: FurnitureId, intensity: f64) -> bool {
        match self.furniture_node_mut(id) {
            Some(node) => {
                node.material.specular_power = intensity * 100.0;
                true
            }
            None => false,
        }
    }

    /// Show every furniture node and restore its default specular power.
    pub fn clear_overrides(&mut self) {
        for node in &mut self.nodes {
            if node.furniture_id().is_some() {
                node.visible = true;
                node.material.specular_power = DEFAULT_SPECULAR_POWER;
            }
        }
    }

    fn furniture_node_mut(&mut self, id: FurnitureId) -> Option<&mut SceneNode> {
        self.nodes
            .iter_mut()
            .find(|n| n.kind == NodeKind::Furniture(id))
    }
}

fn room_nodes(room: &Room) -> Vec<SceneNode> {
    let w = meters_to_units(room.width);
    let l = meters_to_units(room.length);
    let h = meters_to_units(room.height);
    let t = SLAB_THICKNESS_UNITS;
    let scheme = &room.color_scheme;

    vec![
        SceneNode::slab(
            NodeKind::Floor,
            "Floor",
            DVec3::new(0.0, h / 2.0, 0.0),
            DVec3::new(w, t, l),
            scheme.floor,
        ),
        SceneNode::slab(
            NodeKind::Ceiling,
            "Ceiling",
            DVec3::new(0.0, -h / 2.0, 0.0),
            DVec3::new(w, t, l),
            scheme.ceiling,
        ),
        SceneNode::slab(
            NodeKind::Wall(WallSide::Left),
            "Left wall",
            DVec3::new(-w / 2.0, 0.0, 0.0),
            DVec3::new(t, h, l),
            scheme.wall,
        ),
        SceneNode::slab(
            NodeKind::Wall(WallSide::Right),
            "Right wall",
            DVec3::new(w / 2.0, 0.0, 0.0),
            DVec3::new(t, h, l),
            scheme.wall,
        ),
        SceneNode::slab(
            NodeKind::Wall(WallSide::Back),
            "Back wall",
            DVec3::new(0.0, 0.0, -l / 2.0),
            DVec3::new(w, h, t),
            scheme.wall,
        ),
        SceneNode::slab(
            NodeKind::Wall(WallSide::Front),
            "Front wall",
            DVec3::new(0.0, 0.0, l / 2.0),
            DVec3::new(w, h, t),
            scheme.wall,
        ),
    ]
}

fn furniture_node(furniture: &Furniture, room: &Room) -> Option<SceneNode> {
    let size = DVec3::new(
        meters_to_units(furniture.width),
        meters_to_units(furniture.height),
        meters_to_units(furniture.length),
    );
    if !size.is_finite() || size.min_element() <= 0.0 {
        return None;
    }

    let room_w = meters_to_units(room.width);
    let room_h = meters_to_units(room.height);
    let room_l = meters_to_units(room.length);
    let center = DVec3::new(
        meters_to_units(furniture.pos_x) + size.x / 2.0 - room_w / 2.0,
        room_h / 2.0 - size.y / 2.0,
        meters_to_units(furniture.pos_y) + size.z / 2.0 - room_l / 2.0,
    );

    Some(SceneNode {
        kind: NodeKind::Furniture(furniture.id),
        label: furniture.name.clone(),
        center,
        size,
        rotation_y: furniture.rotation,
        material: Material::glossy(furniture.color),
        visible: true,
    })
}
