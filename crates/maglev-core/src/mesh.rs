//! CPU-side geometry shared by the web and native renderers.
//!
//! Meshes are generated once at startup and baked into GPU buffers; all
//! motion happens through per-instance model matrices, never by touching
//! vertices.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::constants::{
    CABIN_SIZE, CANOPY_SIZE, CHASSIS_SIZE, EARTH_FIELD_RADIUS, FIELD_LINE_BASE_RADIUS,
    FIELD_LINE_COUNT, FIELD_LINE_RADIUS_STEP, FIELD_LINE_TUBE, FORCE_HEAD_LENGTH,
    FORCE_HEAD_RADIUS, FORCE_SHAFT_LENGTH, FORCE_SHAFT_RADIUS, GRID_DIVISIONS, GROUND_SIZE,
    RING_GLOW_TUBE_SCALE, RING_RADIUS, RING_TUBE,
};

const TAU: f32 = std::f32::consts::TAU;
const PI: f32 = std::f32::consts::PI;

#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    Triangles,
    Lines,
}

pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
    pub topology: Topology,
}

impl MeshData {
    fn new(topology: Topology) -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            topology,
        }
    }

    fn push_vertex(&mut self, position: Vec3, normal: Vec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(Vertex {
            position: position.to_array(),
            normal: normal.to_array(),
        });
        index
    }
}

/// Registry slots. Frontends bake `scene_meshes()` in this exact order and
/// index draw batches by these ids; field line `i` lives at
/// `FIELD_LINE_BASE + i`.
pub mod ids {
    pub const CHASSIS: usize = 0;
    pub const CABIN: usize = 1;
    pub const CANOPY: usize = 2;
    pub const RING_CORE: usize = 3;
    pub const RING_GLOW: usize = 4;
    pub const FORCE_SHAFT: usize = 5;
    pub const FORCE_HEAD: usize = 6;
    pub const GROUND: usize = 7;
    pub const GRID: usize = 8;
    pub const EARTH_FIELD: usize = 9;
    pub const FIELD_LINE_BASE: usize = 10;
}

pub fn mesh_count() -> usize {
    ids::FIELD_LINE_BASE + FIELD_LINE_COUNT
}

/// Every mesh the scene draws, in registry-id order.
pub fn scene_meshes() -> Vec<MeshData> {
    let mut meshes = vec![
        cuboid(CHASSIS_SIZE[0], CHASSIS_SIZE[1], CHASSIS_SIZE[2]),
        cuboid(CABIN_SIZE[0], CABIN_SIZE[1], CABIN_SIZE[2]),
        cuboid(CANOPY_SIZE[0], CANOPY_SIZE[1], CANOPY_SIZE[2]),
        torus(RING_RADIUS, RING_TUBE, 16, 32),
        torus(RING_RADIUS, RING_TUBE * RING_GLOW_TUBE_SCALE, 16, 32),
        cylinder(FORCE_SHAFT_RADIUS, FORCE_SHAFT_RADIUS, FORCE_SHAFT_LENGTH, 24),
        // Apex up; the gravity glyph flips it with a rotation.
        cylinder(0.0, FORCE_HEAD_RADIUS, FORCE_HEAD_LENGTH, 24),
        plane_xz(GROUND_SIZE),
        grid_xz(GROUND_SIZE, GRID_DIVISIONS),
        wire_sphere(EARTH_FIELD_RADIUS, 12, 7, 32),
    ];
    for i in 0..FIELD_LINE_COUNT {
        meshes.push(torus(
            FIELD_LINE_BASE_RADIUS - i as f32 * FIELD_LINE_RADIUS_STEP,
            FIELD_LINE_TUBE,
            16,
            32,
        ));
    }
    meshes
}

/// Torus in the XY plane (axis +Z), matching the scene convention where
/// rings stand upright and field lines are laid flat by a quarter turn.
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> MeshData {
    let mut mesh = MeshData::new(Topology::Triangles);
    for j in 0..=tubular_segments {
        let theta = j as f32 / tubular_segments as f32 * TAU;
        let (sin_t, cos_t) = theta.sin_cos();
        for i in 0..=radial_segments {
            let phi = i as f32 / radial_segments as f32 * TAU;
            let (sin_p, cos_p) = phi.sin_cos();
            let normal = Vec3::new(cos_t * cos_p, sin_t * cos_p, sin_p);
            let position = Vec3::new(cos_t * radius, sin_t * radius, 0.0) + tube * normal;
            mesh.push_vertex(position, normal);
        }
    }
    let stride = radial_segments + 1;
    for j in 0..tubular_segments {
        for i in 0..radial_segments {
            let a = j * stride + i;
            let b = (j + 1) * stride + i;
            mesh.indices
                .extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }
    mesh
}

/// Axis-aligned box centered at the origin.
pub fn cuboid(width: f32, height: f32, depth: f32) -> MeshData {
    let mut mesh = MeshData::new(Topology::Triangles);
    let half = Vec3::new(width * 0.5, height * 0.5, depth * 0.5);
    let faces: [(Vec3, Vec3, Vec3); 6] = [
        (Vec3::X, Vec3::Y, Vec3::Z),
        (Vec3::NEG_X, Vec3::Y, Vec3::NEG_Z),
        (Vec3::Y, Vec3::Z, Vec3::X),
        (Vec3::NEG_Y, Vec3::Z, Vec3::NEG_X),
        (Vec3::Z, Vec3::Y, Vec3::NEG_X),
        (Vec3::NEG_Z, Vec3::Y, Vec3::X),
    ];
    for (normal, up, right) in faces {
        let base = mesh.vertices.len() as u32;
        for (u, v) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
            let corner = (normal + right * u + up * v) * half;
            mesh.push_vertex(corner, normal);
        }
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

/// Capped cylinder along +Y; a zero top radius makes a cone with its apex
/// at +height/2.
pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, segments: u32) -> MeshData {
    let mut mesh = MeshData::new(Topology::Triangles);
    let half_h = height * 0.5;
    let slope = (radius_bottom - radius_top) / height;

    let side_base = mesh.vertices.len() as u32;
    for i in 0..=segments {
        let theta = i as f32 / segments as f32 * TAU;
        let (sin_t, cos_t) = theta.sin_cos();
        let normal = Vec3::new(cos_t, slope, sin_t).normalize();
        mesh.push_vertex(
            Vec3::new(cos_t * radius_top, half_h, sin_t * radius_top),
            normal,
        );
        mesh.push_vertex(
            Vec3::new(cos_t * radius_bottom, -half_h, sin_t * radius_bottom),
            normal,
        );
    }
    for i in 0..segments {
        let a = side_base + i * 2;
        mesh.indices
            .extend_from_slice(&[a, a + 1, a + 2, a + 2, a + 1, a + 3]);
    }

    for (y, radius, normal) in [
        (half_h, radius_top, Vec3::Y),
        (-half_h, radius_bottom, Vec3::NEG_Y),
    ] {
        if radius <= 0.0 {
            continue;
        }
        let center = mesh.push_vertex(Vec3::new(0.0, y, 0.0), normal);
        let rim = mesh.vertices.len() as u32;
        for i in 0..=segments {
            let theta = i as f32 / segments as f32 * TAU;
            let (sin_t, cos_t) = theta.sin_cos();
            mesh.push_vertex(Vec3::new(cos_t * radius, y, sin_t * radius), normal);
        }
        for i in 0..segments {
            if normal.y > 0.0 {
                mesh.indices.extend_from_slice(&[center, rim + i + 1, rim + i]);
            } else {
                mesh.indices.extend_from_slice(&[center, rim + i, rim + i + 1]);
            }
        }
    }
    mesh
}

/// Square ground plane in the XZ plane, normal +Y.
pub fn plane_xz(size: f32) -> MeshData {
    let mut mesh = MeshData::new(Topology::Triangles);
    let half = size * 0.5;
    let a = mesh.push_vertex(Vec3::new(-half, 0.0, -half), Vec3::Y);
    let b = mesh.push_vertex(Vec3::new(half, 0.0, -half), Vec3::Y);
    let c = mesh.push_vertex(Vec3::new(half, 0.0, half), Vec3::Y);
    let d = mesh.push_vertex(Vec3::new(-half, 0.0, half), Vec3::Y);
    mesh.indices.extend_from_slice(&[a, c, b, a, d, c]);
    mesh
}

/// Reference grid in the XZ plane as a line list.
pub fn grid_xz(size: f32, divisions: u32) -> MeshData {
    let mut mesh = MeshData::new(Topology::Lines);
    let half = size * 0.5;
    let step = size / divisions as f32;
    for i in 0..=divisions {
        let p = -half + i as f32 * step;
        let a = mesh.push_vertex(Vec3::new(p, 0.0, -half), Vec3::Y);
        let b = mesh.push_vertex(Vec3::new(p, 0.0, half), Vec3::Y);
        mesh.indices.extend_from_slice(&[a, b]);
        let c = mesh.push_vertex(Vec3::new(-half, 0.0, p), Vec3::Y);
        let d = mesh.push_vertex(Vec3::new(half, 0.0, p), Vec3::Y);
        mesh.indices.extend_from_slice(&[c, d]);
    }
    mesh
}

/// Latitude/longitude wireframe sphere as a line list.
pub fn wire_sphere(radius: f32, meridians: u32, parallels: u32, segments: u32) -> MeshData {
    let mut mesh = MeshData::new(Topology::Lines);
    for p in 1..=parallels {
        let phi = p as f32 / (parallels + 1) as f32 * PI;
        let y = phi.cos() * radius;
        let ring_radius = phi.sin() * radius;
        let mut prev = None;
        for s in 0..=segments {
            let theta = s as f32 / segments as f32 * TAU;
            let pos = Vec3::new(theta.cos() * ring_radius, y, theta.sin() * ring_radius);
            let idx = mesh.push_vertex(pos, pos / radius);
            if let Some(last) = prev {
                mesh.indices.extend_from_slice(&[last, idx]);
            }
            prev = Some(idx);
        }
    }
    for m in 0..meridians {
        let theta = m as f32 / meridians as f32 * TAU;
        let (sin_t, cos_t) = theta.sin_cos();
        let mut prev = None;
        for s in 0..=segments {
            let phi = s as f32 / segments as f32 * PI;
            let (sin_p, cos_p) = phi.sin_cos();
            let pos = Vec3::new(cos_t * sin_p * radius, cos_p * radius, sin_t * sin_p * radius);
            let idx = mesh.push_vertex(pos, pos / radius);
            if let Some(last) = prev {
                mesh.indices.extend_from_slice(&[last, idx]);
            }
            prev = Some(idx);
        }
    }
    mesh
}
