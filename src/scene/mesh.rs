use super::{Geometry, Material, NodeId, SceneGraph};
use glam::Vec3;

/// GPU vertex: world-space position and normal plus per-vertex material.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
    /// x: lit (1) or unlit (0), y: roughness, z: metalness, w: unused
    pub material: [f32; 4],
}

/// Triangle-list corner in the geometry's local space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Corner {
    pub position: Vec3,
    pub normal: Vec3,
}

fn quad(out: &mut Vec<Corner>, a: Vec3, b: Vec3, c: Vec3, d: Vec3, normal: Vec3) {
    // a-b-c-d counter-clockwise seen from the normal side
    for p in [a, b, c, a, c, d] {
        out.push(Corner { position: p, normal });
    }
}

/// Tessellate a primitive into a counter-clockwise triangle list.
pub fn tessellate(geometry: &Geometry) -> Vec<Corner> {
    let mut out = Vec::new();
    match *geometry {
        Geometry::Box {
            width,
            height,
            depth,
        } => {
            let (x, y, z) = (width * 0.5, height * 0.5, depth * 0.5);
            let v = |sx: f32, sy: f32, sz: f32| Vec3::new(sx * x, sy * y, sz * z);
            quad(&mut out, v(-1., -1., 1.), v(1., -1., 1.), v(1., 1., 1.), v(-1., 1., 1.), Vec3::Z);
            quad(&mut out, v(1., -1., -1.), v(-1., -1., -1.), v(-1., 1., -1.), v(1., 1., -1.), Vec3::NEG_Z);
            quad(&mut out, v(1., -1., 1.), v(1., -1., -1.), v(1., 1., -1.), v(1., 1., 1.), Vec3::X);
            quad(&mut out, v(-1., -1., -1.), v(-1., -1., 1.), v(-1., 1., 1.), v(-1., 1., -1.), Vec3::NEG_X);
            quad(&mut out, v(-1., 1., 1.), v(1., 1., 1.), v(1., 1., -1.), v(-1., 1., -1.), Vec3::Y);
            quad(&mut out, v(-1., -1., -1.), v(1., -1., -1.), v(1., -1., 1.), v(-1., -1., 1.), Vec3::NEG_Y);
        }
        Geometry::Plane { width, height } => {
            let (x, y) = (width * 0.5, height * 0.5);
            quad(
                &mut out,
                Vec3::new(-x, -y, 0.0),
                Vec3::new(x, -y, 0.0),
                Vec3::new(x, y, 0.0),
                Vec3::new(-x, y, 0.0),
                Vec3::Z,
            );
        }
        Geometry::Cylinder {
            radius_top,
            radius_bottom,
            height,
            segments,
        } => {
            let segments = segments.max(3);
            let half = height * 0.5;
            let slope = if height > 0.0 {
                (radius_bottom - radius_top) / height
            } else {
                0.0
            };
            let ring = |i: u32| {
                let theta = i as f32 / segments as f32 * std::f32::consts::TAU;
                (theta.sin(), theta.cos())
            };
            for i in 0..segments {
                let (s0, c0) = ring(i);
                let (s1, c1) = ring(i + 1);
                let n0 = Vec3::new(s0, slope, c0).normalize();
                let n1 = Vec3::new(s1, slope, c1).normalize();
                let b0 = Vec3::new(radius_bottom * s0, -half, radius_bottom * c0);
                let b1 = Vec3::new(radius_bottom * s1, -half, radius_bottom * c1);
                let t0 = Vec3::new(radius_top * s0, half, radius_top * c0);
                let t1 = Vec3::new(radius_top * s1, half, radius_top * c1);
                for (p, n) in [(b0, n0), (b1, n1), (t1, n1), (b0, n0), (t1, n1), (t0, n0)] {
                    out.push(Corner {
                        position: p,
                        normal: n,
                    });
                }
                if radius_top > 0.0 {
                    for p in [Vec3::new(0.0, half, 0.0), t0, t1] {
                        out.push(Corner {
                            position: p,
                            normal: Vec3::Y,
                        });
                    }
                }
                if radius_bottom > 0.0 {
                    for p in [Vec3::new(0.0, -half, 0.0), b1, b0] {
                        out.push(Corner {
                            position: p,
                            normal: Vec3::NEG_Y,
                        });
                    }
                }
            }
        }
    }
    out
}

struct MeshEntry {
    node: NodeId,
    corners: Vec<Corner>,
    material: Material,
}

/// Caches local tessellations and re-emits world-space vertices each frame.
///
/// Opaque meshes come first so the renderer can draw them before the
/// alpha-blended range starting at [`opaque_vertex_count`](Self::opaque_vertex_count).
pub struct SceneMesher {
    entries: Vec<MeshEntry>,
    opaque_vertices: u32,
    total_vertices: u32,
}

impl SceneMesher {
    pub fn new(scene: &SceneGraph) -> Self {
        let mut entries: Vec<MeshEntry> = scene
            .meshes()
            .map(|(node, geometry, material)| MeshEntry {
                node,
                corners: tessellate(geometry),
                material: *material,
            })
            .collect();
        // Stable: keeps build order inside each group
        entries.sort_by_key(|e| e.material.is_transparent());
        let count = |transparent: bool| -> u32 {
            entries
                .iter()
                .filter(|e| e.material.is_transparent() == transparent)
                .map(|e| e.corners.len() as u32)
                .sum()
        };
        let opaque_vertices = count(false);
        let total_vertices = opaque_vertices + count(true);
        Self {
            entries,
            opaque_vertices,
            total_vertices,
        }
    }

    pub fn opaque_vertex_count(&self) -> u32 {
        self.opaque_vertices
    }

    pub fn vertex_count(&self) -> u32 {
        self.total_vertices
    }

    /// Write world-space vertices for the current node transforms into `out`.
    pub fn fill(&self, scene: &SceneGraph, out: &mut Vec<Vertex>) {
        out.clear();
        out.reserve(self.total_vertices as usize);
        for entry in &self.entries {
            // Node transforms are rigid, so normals take the same rotation
            let world = scene.world_matrix(entry.node);
            let [r, g, b] = entry.material.color();
            let color = [r, g, b, entry.material.opacity()];
            let (roughness, metalness) = entry.material.surface();
            let lit = if entry.material.is_lit() { 1.0 } else { 0.0 };
            for c in &entry.corners {
                out.push(Vertex {
                    position: world.transform_point3(c.position).to_array(),
                    normal: world.transform_vector3(c.normal).normalize_or_zero().to_array(),
                    color,
                    material: [lit, roughness, metalness, 0.0],
                });
            }
        }
    }
}
