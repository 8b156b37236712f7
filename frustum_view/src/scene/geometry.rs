/// Static scene geometry: cube, camera gizmo, reference grid and frustum volume.
///
/// All meshes are CPU-side vertex data ready for `RenderBackend::upload_buffer`.
/// Positions are xyz `f32`, colors rgba `f32`, indices `u16`.

use glam::{Vec3, Vec4};
use crate::math::{FrustumCorners, FRUSTUM_FACE_INDICES};
use crate::renderer::PrimitiveTopology;

/// Unit cube corners, centered on the origin.
pub const CUBE_CORNERS: [Vec3; 8] = [
    Vec3::new(-0.5, 0.5, 0.5),   // 0, front
    Vec3::new(-0.5, -0.5, 0.5),  // 1
    Vec3::new(0.5, 0.5, 0.5),    // 2
    Vec3::new(0.5, -0.5, 0.5),   // 3, front
    Vec3::new(0.5, 0.5, -0.5),   // 4
    Vec3::new(0.5, -0.5, -0.5),  // 5
    Vec3::new(-0.5, 0.5, -0.5),  // 6
    Vec3::new(-0.5, -0.5, -0.5), // 7
];

/// Cube triangles, two per face in front, right, back, left, top, bottom order.
pub const CUBE_INDICES: [u16; 36] = [
    0, 1, 2, 2, 1, 3, // front
    2, 3, 4, 4, 3, 5, // right
    4, 5, 6, 6, 5, 7, // back
    6, 7, 0, 0, 7, 1, // left
    6, 0, 4, 4, 0, 2, // top
    1, 7, 3, 3, 7, 5, // bottom
];

/// One color per cube face, same order as `CUBE_INDICES`.
pub const CUBE_FACE_COLORS: [Vec4; 6] = [
    Vec4::new(0.0625, 0.574_218_75, 0.925_781_25, 1.0),
    Vec4::new(0.292_968_75, 0.667_968_75, 0.925_781_25, 1.0),
    Vec4::new(0.527_343_75, 0.761_718_75, 0.925_781_25, 1.0),
    Vec4::new(0.0625, 0.574_218_75, 0.925_781_25, 1.0),
    Vec4::new(0.292_968_75, 0.667_968_75, 0.925_781_25, 1.0),
    Vec4::new(0.527_343_75, 0.761_718_75, 0.925_781_25, 1.0),
];

/// Camera gizmo: a small front box joined to a wider back plate.
pub const GIZMO_VERTICES: [Vec3; 12] = [
    Vec3::new(-0.25, 0.25, 0.0),  // 0, front
    Vec3::new(-0.25, -0.25, 0.0), // 1
    Vec3::new(0.25, 0.25, 0.0),   // 2
    Vec3::new(0.25, -0.25, 0.0),  // 3, front
    Vec3::new(0.5, 0.5, -0.5),    // 4
    Vec3::new(0.5, -0.5, -0.5),   // 5
    Vec3::new(-0.5, 0.5, -0.5),   // 6
    Vec3::new(-0.5, -0.5, -0.5),  // 7
    Vec3::new(-0.25, 0.25, 0.5),  // 8, front
    Vec3::new(-0.25, -0.25, 0.5), // 9
    Vec3::new(0.25, 0.25, 0.5),   // 10
    Vec3::new(0.25, -0.25, 0.5),  // 11, front
];

pub const GIZMO_INDICES: [u16; 60] = [
    2, 3, 4, 4, 3, 5,     // right-back
    4, 5, 6, 6, 5, 7,     // back
    6, 7, 0, 0, 7, 1,     // left-back
    6, 0, 4, 4, 0, 2,     // top-back
    1, 7, 3, 3, 7, 5,     // bottom-back
    8, 9, 10, 10, 9, 11,  // front
    10, 11, 2, 2, 11, 3,  // right-front
    0, 1, 8, 8, 1, 9,     // left-front
    0, 8, 2, 2, 8, 10,    // top-front
    9, 1, 11, 11, 1, 3,   // bottom-front
];

pub const GIZMO_COLOR: Vec4 = Vec4::new(0.5, 0.5, 0.5, 1.0);

/// Translucent frustum tint: near plane, far plane.
pub const FRUSTUM_NEAR_COLOR: Vec4 = Vec4::new(1.0, 1.0, 0.6, 0.2);
pub const FRUSTUM_FAR_COLOR: Vec4 = Vec4::new(1.0, 1.0, 0.8, 0.2);

/// Grid defaults: lines every half unit from -5 to 5, just below the cube.
pub const GRID_HALF_EXTENT: f32 = 5.0;
pub const GRID_SPACING: f32 = 0.5;
pub const GRID_HEIGHT: f32 = -0.5;

/// CPU-side mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    /// Per-vertex colors, same length as `positions` when present
    pub colors: Option<Vec<Vec4>>,
    /// Index list; `None` draws `positions` in order
    pub indices: Option<Vec<u16>>,
    pub topology: PrimitiveTopology,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of vertices consumed by a draw (indices if indexed).
    pub fn element_count(&self) -> usize {
        self.indices.as_ref().map_or(self.positions.len(), Vec::len)
    }

    /// Flattened xyz positions
    pub fn position_data(&self) -> &[f32] {
        bytemuck::cast_slice(self.positions.as_slice())
    }

    /// Flattened rgba colors
    pub fn color_data(&self) -> Option<&[f32]> {
        self.colors.as_deref().map(|colors| bytemuck::cast_slice(colors))
    }
}

/// Flat-shaded cube: every face gets its own four corners so each face
/// keeps a single color. 36 vertices, sequential indices.
pub fn cube_mesh() -> MeshData {
    let mut positions = Vec::with_capacity(CUBE_INDICES.len());
    let mut colors = Vec::with_capacity(CUBE_INDICES.len());

    for (face, triangle_pair) in CUBE_INDICES.chunks_exact(6).enumerate() {
        for &index in triangle_pair {
            positions.push(CUBE_CORNERS[index as usize]);
            colors.push(CUBE_FACE_COLORS[face]);
        }
    }

    let indices = (0..positions.len() as u16).collect();
    MeshData {
        positions,
        colors: Some(colors),
        indices: Some(indices),
        topology: PrimitiveTopology::Triangles,
    }
}

pub fn gizmo_mesh() -> MeshData {
    MeshData {
        positions: GIZMO_VERTICES.to_vec(),
        colors: Some(vec![GIZMO_COLOR; GIZMO_VERTICES.len()]),
        indices: Some(GIZMO_INDICES.to_vec()),
        topology: PrimitiveTopology::Triangles,
    }
}

/// Square line grid in the y = `height` plane.
///
/// Lines parallel to Z first, then lines parallel to X, each running from
/// `-half_extent` to `half_extent`.
pub fn grid_mesh(half_extent: f32, spacing: f32, height: f32) -> MeshData {
    let steps = ((2.0 * half_extent) / spacing).round() as i32;
    let mut positions = Vec::with_capacity(4 * (steps as usize + 1));

    for i in 0..=steps {
        let x = -half_extent + i as f32 * spacing;
        positions.push(Vec3::new(x, height, -half_extent));
        positions.push(Vec3::new(x, height, half_extent));
    }
    for i in 0..=steps {
        let z = -half_extent + i as f32 * spacing;
        positions.push(Vec3::new(-half_extent, height, z));
        positions.push(Vec3::new(half_extent, height, z));
    }

    MeshData {
        positions,
        colors: None,
        indices: None,
        topology: PrimitiveTopology::Lines,
    }
}

/// Translucent frustum volume for the given corners.
pub fn frustum_mesh(corners: &FrustumCorners) -> MeshData {
    let colors = (0..8)
        .map(|i| if i < 4 { FRUSTUM_NEAR_COLOR } else { FRUSTUM_FAR_COLOR })
        .collect();

    MeshData {
        positions: corners.corners.to_vec(),
        colors: Some(colors),
        indices: Some(FRUSTUM_FACE_INDICES.to_vec()),
        topology: PrimitiveTopology::Triangles,
    }
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
