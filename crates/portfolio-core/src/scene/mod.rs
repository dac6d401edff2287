//! Scene graph: a flat list of nodes with an explicit role per node.
//!
//! Roles are assigned once by the builder. Per-frame code looks nodes up by
//! role (or through the interactive registry) rather than inspecting
//! geometry or ad hoc attributes.

use crate::constants::HOVER_BRIGHTEN;
use crate::content::ContentKind;
use glam::{Mat4, Quat, Vec3};

mod animate;
mod builder;
pub mod color;
pub mod geometry;
pub mod terrain;

pub use animate::tick_decorations;
pub use builder::build_scene;
pub use geometry::Mesh;
pub use terrain::DuneRipple;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// What a node is for. Decides which per-frame systems touch it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeRole {
    /// Static backdrop (mountains, stars). Pickable nodes still occlude.
    Scenery,
    /// Desert floor; its vertices ripple over time.
    Dunes,
    /// The player-controlled capsule.
    Character,
    /// A clickable portfolio marker.
    Interactive { kind: ContentKind, rotate: bool },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub yaw: f32,
}

impl Transform {
    pub fn at(translation: Vec3) -> Self {
        Self {
            translation,
            yaw: 0.0,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(Quat::from_rotation_y(self.yaw), self.translation)
    }
}

#[derive(Clone, Debug)]
pub enum Geometry {
    Mesh(Mesh),
    /// Unlit point sprites (the starfield).
    Points(Vec<Vec3>),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Linear RGB base colour.
    pub color: [f32; 3],
    /// Linear RGB emissive colour.
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
    pub metalness: f32,
    pub roughness: f32,
    pub opacity: f32,
}

impl Material {
    pub fn matte(color: [f32; 3]) -> Self {
        Self {
            color,
            emissive: [0.0; 3],
            emissive_intensity: 0.0,
            metalness: 0.0,
            roughness: 1.0,
            opacity: 1.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SceneNode {
    pub name: &'static str,
    pub role: NodeRole,
    pub transform: Transform,
    /// Rest height the hover bob oscillates around.
    pub rest_y: f32,
    pub geometry: Geometry,
    pub material: Material,
    /// Participates in ray picking (as a hit or an occluder).
    pub pickable: bool,
    pub hovered: bool,
}

impl SceneNode {
    pub fn new(
        name: &'static str,
        role: NodeRole,
        transform: Transform,
        geometry: Geometry,
        material: Material,
    ) -> Self {
        let pickable = matches!(geometry, Geometry::Mesh(_));
        Self {
            name,
            role,
            rest_y: transform.translation.y,
            transform,
            geometry,
            material,
            pickable,
            hovered: false,
        }
    }

    pub fn kind(&self) -> Option<ContentKind> {
        match self.role {
            NodeRole::Interactive { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// Emissive radiance to render with, brightened while hovered.
    pub fn emissive_radiance(&self) -> [f32; 3] {
        let boost = if self.hovered { HOVER_BRIGHTEN } else { 1.0 };
        let k = self.material.emissive_intensity * boost;
        self.material.emissive.map(|c| c * k)
    }

    pub fn mesh(&self) -> Option<&Mesh> {
        match &self.geometry {
            Geometry::Mesh(m) => Some(m),
            Geometry::Points(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    Ambient {
        color: [f32; 3],
        intensity: f32,
    },
    Directional {
        position: Vec3,
        color: [f32; 3],
        intensity: f32,
    },
    Point {
        position: Vec3,
        color: [f32; 3],
        intensity: f32,
        range: f32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Atmosphere {
    pub background: [f32; 3],
    pub fog_color: [f32; 3],
    pub fog_density: f32,
}

#[derive(Clone, Debug)]
pub struct Scene {
    nodes: Vec<SceneNode>,
    pub lights: Vec<Light>,
    pub atmosphere: Atmosphere,
    interactive: Vec<NodeId>,
    character: NodeId,
    dunes: Option<DuneRipple>,
}

impl Scene {
    pub(crate) fn new(
        nodes: Vec<SceneNode>,
        lights: Vec<Light>,
        atmosphere: Atmosphere,
        dunes: Option<DuneRipple>,
    ) -> Self {
        let interactive = nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| matches!(n.role, NodeRole::Interactive { .. }))
            .map(|(i, _)| NodeId(i))
            .collect();
        let character = nodes
            .iter()
            .position(|n| n.role == NodeRole::Character)
            .map(NodeId)
            .unwrap_or(NodeId(0));
        Self {
            nodes,
            lights,
            atmosphere,
            interactive,
            character,
            dunes,
        }
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn node(&self, id: NodeId) -> &SceneNode {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut SceneNode {
        &mut self.nodes[id.0]
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SceneNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Registry of interactive objects, in construction order.
    pub fn interactive(&self) -> &[NodeId] {
        &self.interactive
    }

    pub fn find_kind(&self, kind: ContentKind) -> Option<NodeId> {
        self.interactive
            .iter()
            .copied()
            .find(|&id| self.node(id).kind() == Some(kind))
    }

    pub fn character_node(&self) -> NodeId {
        self.character
    }

    pub fn hovered(&self) -> Option<NodeId> {
        self.interactive
            .iter()
            .copied()
            .find(|&id| self.node(id).hovered)
    }

    /// Clear hover on every interactive object, then set it on `id` if
    /// that node is interactive.
    pub fn set_hover(&mut self, id: Option<NodeId>) {
        for i in 0..self.interactive.len() {
            let nid = self.interactive[i];
            self.nodes[nid.0].hovered = false;
        }
        if let Some(id) = id {
            if self.node(id).kind().is_some() {
                self.nodes[id.0].hovered = true;
            }
        }
    }

    pub(crate) fn dunes_mut(&mut self) -> Option<(&mut DuneRipple, &mut SceneNode)> {
        let dunes = self.dunes.as_mut()?;
        let node = self.nodes.get_mut(dunes.node.0)?;
        Some((dunes, node))
    }
}
