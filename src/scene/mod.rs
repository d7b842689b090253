//! Retained scene graph for the decorative desk setup.
//!
//! Nodes live in a flat arena and refer to their parent by index. The graph is
//! built once; afterwards only the rig's and the cooler's rotations change.

use glam::{EulerRot, Mat4, Vec3};

mod layout;
pub mod mesh;

pub use mesh::{SceneMesher, Vertex};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Convert a `0xRRGGBB` literal to linear-ish RGB floats.
#[inline]
pub fn hex(rgb: u32) -> [f32; 3] {
    [
        ((rgb >> 16) & 0xff) as f32 / 255.0,
        ((rgb >> 8) & 0xff) as f32 / 255.0,
        (rgb & 0xff) as f32 / 255.0,
    ]
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Geometry {
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
    /// Y-aligned frustum centered on its origin.
    Cylinder {
        radius_top: f32,
        radius_bottom: f32,
        height: f32,
        segments: u32,
    },
    /// XY plane facing +Z.
    Plane { width: f32, height: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Material {
    /// Lit surface.
    Standard {
        color: [f32; 3],
        roughness: f32,
        metalness: f32,
    },
    /// Unlit, flat color (screens, RGB parts).
    Basic { color: [f32; 3], opacity: f32 },
    /// Lit glass-like surface.
    Physical {
        color: [f32; 3],
        opacity: f32,
        transmission: f32,
        roughness: f32,
    },
}

impl Material {
    pub fn standard(rgb: u32, roughness: f32, metalness: f32) -> Self {
        Self::Standard {
            color: hex(rgb),
            roughness,
            metalness,
        }
    }

    pub fn basic(rgb: u32) -> Self {
        Self::Basic {
            color: hex(rgb),
            opacity: 1.0,
        }
    }

    pub fn color(&self) -> [f32; 3] {
        match *self {
            Self::Standard { color, .. } | Self::Basic { color, .. } | Self::Physical { color, .. } => {
                color
            }
        }
    }

    pub fn opacity(&self) -> f32 {
        match *self {
            Self::Standard { .. } => 1.0,
            Self::Basic { opacity, .. } => opacity,
            // Transmission lets the background through on top of the base opacity
            Self::Physical {
                opacity,
                transmission,
                ..
            } => (opacity * (1.0 - 0.5 * transmission)).clamp(0.05, 1.0),
        }
    }

    pub fn is_transparent(&self) -> bool {
        self.opacity() < 1.0
    }

    pub fn is_lit(&self) -> bool {
        !matches!(self, Self::Basic { .. })
    }

    /// `(roughness, metalness)` for lit materials.
    pub fn surface(&self) -> (f32, f32) {
        match *self {
            Self::Standard {
                roughness,
                metalness,
                ..
            } => (roughness, metalness),
            Self::Physical { roughness, .. } => (roughness, 0.0),
            Self::Basic { .. } => (1.0, 0.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    Point {
        color: [f32; 3],
        intensity: f32,
        /// Range beyond which the light contributes nothing.
        distance: f32,
    },
    Ambient { color: [f32; 3], intensity: f32 },
    /// Shines from the node position toward the world origin.
    Directional { color: [f32; 3], intensity: f32 },
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// XYZ Euler angles in radians.
    pub rotation: Vec3,
}

impl Transform {
    pub fn at(x: f32, y: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(x, y, z),
            rotation: Vec3::ZERO,
        }
    }

    pub fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rotation = Vec3::new(x, y, z);
        self
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    Group,
    Mesh { geometry: Geometry, material: Material },
    Light(Light),
}

#[derive(Clone, Debug)]
pub struct Node {
    pub name: Option<&'static str>,
    pub parent: Option<NodeId>,
    pub transform: Transform,
    pub kind: NodeKind,
}

/// Light resolved to world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldLight {
    pub light: Light,
    pub position: Vec3,
}

#[derive(Clone, Debug)]
pub struct SceneGraph {
    nodes: Vec<Node>,
    rig: NodeId,
    cooler: NodeId,
}

impl SceneGraph {
    /// Node list holding only the scene root.
    fn with_root() -> Vec<Node> {
        vec![Node {
            name: Some("scene"),
            parent: None,
            transform: Transform::default(),
            kind: NodeKind::Group,
        }]
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// The group rotated as one unit by drag input.
    pub fn rig(&self) -> NodeId {
        self.rig
    }

    /// The continuously spinning CPU cooler.
    pub fn cooler(&self) -> NodeId {
        self.cooler
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn transform_mut(&mut self, id: NodeId) -> &mut Transform {
        &mut self.nodes[id.0].transform
    }

    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.name == Some(name))
            .map(NodeId)
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(_, n)| n.parent == Some(id))
            .map(|(i, _)| NodeId(i))
    }

    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let node = &self.nodes[id.0];
        let local = node.transform.matrix();
        match node.parent {
            Some(p) => self.world_matrix(p) * local,
            None => local,
        }
    }

    pub fn meshes(&self) -> impl Iterator<Item = (NodeId, &Geometry, &Material)> + '_ {
        self.nodes.iter().enumerate().filter_map(|(i, n)| match &n.kind {
            NodeKind::Mesh { geometry, material } => Some((NodeId(i), geometry, material)),
            _ => None,
        })
    }

    pub fn lights(&self) -> Vec<WorldLight> {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, n)| match n.kind {
                NodeKind::Light(light) => Some(WorldLight {
                    light,
                    position: self.world_matrix(NodeId(i)).transform_point3(Vec3::ZERO),
                }),
                _ => None,
            })
            .collect()
    }
}

/// Incremental construction of a [`SceneGraph`].
pub(crate) struct SceneBuilder {
    nodes: Vec<Node>,
}

impl SceneBuilder {
    pub(crate) fn new() -> Self {
        Self {
            nodes: SceneGraph::with_root(),
        }
    }

    pub(crate) fn root(&self) -> NodeId {
        NodeId(0)
    }

    fn push(&mut self, parent: NodeId, name: Option<&'static str>, transform: Transform, kind: NodeKind) -> NodeId {
        self.nodes.push(Node {
            name,
            parent: Some(parent),
            transform,
            kind,
        });
        NodeId(self.nodes.len() - 1)
    }

    pub(crate) fn group(&mut self, parent: NodeId, name: &'static str, transform: Transform) -> NodeId {
        self.push(parent, Some(name), transform, NodeKind::Group)
    }

    pub(crate) fn mesh(&mut self, parent: NodeId, geometry: Geometry, material: Material, transform: Transform) -> NodeId {
        self.push(parent, None, transform, NodeKind::Mesh { geometry, material })
    }

    pub(crate) fn named_mesh(
        &mut self,
        parent: NodeId,
        name: &'static str,
        geometry: Geometry,
        material: Material,
        transform: Transform,
    ) -> NodeId {
        self.push(parent, Some(name), transform, NodeKind::Mesh { geometry, material })
    }

    pub(crate) fn light(&mut self, parent: NodeId, name: &'static str, light: Light, transform: Transform) -> NodeId {
        self.push(parent, Some(name), transform, NodeKind::Light(light))
    }

    pub(crate) fn finish(self, rig: NodeId, cooler: NodeId) -> SceneGraph {
        SceneGraph {
            nodes: self.nodes,
            rig,
            cooler,
        }
    }
}
