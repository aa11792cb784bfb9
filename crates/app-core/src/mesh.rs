//! Wireframe geometry shared by both renderers.
//!
//! Generators emit line-list vertex pairs in mesh-local space; `push_wire`
//! transforms them into a reusable `LineVertex` scratch buffer per frame.

use glam::{Mat4, Quat, Vec3};

use crate::constants::*;
use crate::kinematics::MeshRotations;
use crate::layout::SceneLayout;

/// One colored vertex of the line-list pipeline.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// One particle instance of the billboard pipeline.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 3],
    pub _pad: f32,
}

/// Latitude/longitude sphere wireframe as line-list pairs.
pub fn globe_wireframe(radius: f32, stacks: usize, slices: usize, segments: usize) -> Vec<Vec3> {
    let mut out = Vec::with_capacity((stacks - 1 + slices) * segments * 2);
    let tau = std::f32::consts::TAU;
    // latitude rings
    for i in 1..stacks {
        let lat = std::f32::consts::PI * i as f32 / stacks as f32;
        let y = radius * lat.cos();
        let r = radius * lat.sin();
        for s in 0..segments {
            let a0 = tau * s as f32 / segments as f32;
            let a1 = tau * (s + 1) as f32 / segments as f32;
            out.push(Vec3::new(r * a0.cos(), y, r * a0.sin()));
            out.push(Vec3::new(r * a1.cos(), y, r * a1.sin()));
        }
    }
    // meridians
    for j in 0..slices {
        let lon = tau * j as f32 / slices as f32;
        for s in 0..segments {
            let t0 = tau * s as f32 / segments as f32;
            let t1 = tau * (s + 1) as f32 / segments as f32;
            let p = |t: f32| {
                Vec3::new(
                    radius * t.sin() * lon.cos(),
                    radius * t.cos(),
                    radius * t.sin() * lon.sin(),
                )
            };
            out.push(p(t0));
            out.push(p(t1));
        }
    }
    out
}

/// The twelve edges of an axis-aligned cube, as line-list pairs.
pub fn cube_edges(size: f32) -> Vec<Vec3> {
    let h = size * 0.5;
    let c = |x: f32, y: f32, z: f32| Vec3::new(x * h, y * h, z * h);
    let corners = [
        c(-1.0, -1.0, -1.0),
        c(1.0, -1.0, -1.0),
        c(1.0, 1.0, -1.0),
        c(-1.0, 1.0, -1.0),
        c(-1.0, -1.0, 1.0),
        c(1.0, -1.0, 1.0),
        c(1.0, 1.0, 1.0),
        c(-1.0, 1.0, 1.0),
    ];
    const EDGES: [(usize, usize); 12] = [
        (0, 1),
        (1, 2),
        (2, 3),
        (3, 0),
        (4, 5),
        (5, 6),
        (6, 7),
        (7, 4),
        (0, 4),
        (1, 5),
        (2, 6),
        (3, 7),
    ];
    let mut out = Vec::with_capacity(24);
    for (a, b) in EDGES {
        out.push(corners[a]);
        out.push(corners[b]);
    }
    out
}

/// Dashed flat ring in the XZ plane: alternate segments are skipped so the
/// spin is actually visible.
pub fn ring_dashes(radius: f32, segments: usize) -> Vec<Vec3> {
    let tau = std::f32::consts::TAU;
    let mut out = Vec::with_capacity(segments);
    for s in (0..segments).step_by(2) {
        let a0 = tau * s as f32 / segments as f32;
        let a1 = tau * (s + 1) as f32 / segments as f32;
        out.push(Vec3::new(radius * a0.cos(), 0.0, radius * a0.sin()));
        out.push(Vec3::new(radius * a1.cos(), 0.0, radius * a1.sin()));
    }
    out
}

/// Transform mesh-local points and append them as colored line vertices.
pub fn push_wire(out: &mut Vec<LineVertex>, points: &[Vec3], model: Mat4, color: [f32; 3]) {
    for p in points {
        out.push(LineVertex {
            position: model.transform_point3(*p).to_array(),
            color,
        });
    }
}

/// Upper bound on line vertices per frame, for static buffer sizing.
pub const MAX_LINE_VERTICES: usize =
    (GLOBE_STACKS - 1 + GLOBE_SLICES) * GLOBE_SEGMENTS * 2 + 24 + RING_SEGMENTS;

/// Mesh-local wireframe geometry, generated once and transformed per frame.
pub struct WireGeometry {
    globe: Vec<Vec3>,
    cube: Vec<Vec3>,
    ring: Vec<Vec3>,
}

impl WireGeometry {
    pub fn new() -> Self {
        Self {
            globe: globe_wireframe(GLOBE_RADIUS, GLOBE_STACKS, GLOBE_SLICES, GLOBE_SEGMENTS),
            cube: cube_edges(CUBE_SIZE),
            ring: ring_dashes(RING_RADIUS, RING_SEGMENTS),
        }
    }

    /// Clear and refill `out` with this frame's transformed wireframes. The
    /// cube is tinted by the drift direction, same palette as the particles.
    pub fn write_frame(
        &self,
        layout: &SceneLayout,
        rotations: &MeshRotations,
        out: &mut Vec<LineVertex>,
    ) {
        out.clear();
        let globe_model = Mat4::from_scale_rotation_translation(
            Vec3::splat(layout.globe.scale),
            Quat::from_rotation_y(rotations.globe_yaw),
            layout.globe.position,
        );
        push_wire(out, &self.globe, globe_model, GLOBE_COLOR);

        let cube_model = Mat4::from_scale_rotation_translation(
            Vec3::splat(layout.cube.scale),
            Quat::from_rotation_y(rotations.cube_yaw) * Quat::from_rotation_x(rotations.cube_pitch),
            layout.cube.position,
        );
        push_wire(out, &self.cube, cube_model, layout.drift.color());

        let ring_model = Mat4::from_scale_rotation_translation(
            Vec3::splat(layout.ring.scale),
            Quat::from_rotation_y(rotations.ring_spin),
            layout.ring.position,
        );
        push_wire(out, &self.ring, ring_model, RING_COLOR);
    }
}

impl Default for WireGeometry {
    fn default() -> Self {
        Self::new()
    }
}
