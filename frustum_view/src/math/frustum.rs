/// Frustum corners: the 8 world-space points bounding a camera's view volume.
///
/// Corners are recovered by transforming the NDC cube through the inverse
/// view-projection matrix and dividing by w:
/// - if the matrix is `inverse(projection * view)` the corners are in world space
/// - if the matrix is `inverse(projection * view * model)` they are in object space
///
/// Index layout: 0..4 is the near plane (left-bottom, left-top, right-top,
/// right-bottom), 4..8 the same pattern on the far plane. Corner `i` and
/// corner `i + 4` lie on the same frustum edge.

use glam::{Mat4, Vec3, Vec4};
use crate::error::Result;
use super::matrix::invert;

/// Corner indices
pub const CORNER_LBN: usize = 0;
pub const CORNER_LTN: usize = 1;
pub const CORNER_RTN: usize = 2;
pub const CORNER_RBN: usize = 3;
pub const CORNER_LBF: usize = 4;
pub const CORNER_LTF: usize = 5;
pub const CORNER_RTF: usize = 6;
pub const CORNER_RBF: usize = 7;

/// Canonical clip-space cube corners (w = 1), in corner index order.
pub const NDC_CORNERS: [Vec4; 8] = [
    Vec4::new(-1.0, -1.0, -1.0, 1.0),
    Vec4::new(-1.0, 1.0, -1.0, 1.0),
    Vec4::new(1.0, 1.0, -1.0, 1.0),
    Vec4::new(1.0, -1.0, -1.0, 1.0),
    Vec4::new(-1.0, -1.0, 1.0, 1.0),
    Vec4::new(-1.0, 1.0, 1.0, 1.0),
    Vec4::new(1.0, 1.0, 1.0, 1.0),
    Vec4::new(1.0, -1.0, 1.0, 1.0),
];

/// Line-list indices for the 12 frustum edges (near loop, far loop, sides).
pub const FRUSTUM_EDGE_INDICES: [u16; 24] = [
    0, 1, 1, 2, 2, 3, 3, 0,
    4, 5, 5, 6, 6, 7, 7, 4,
    0, 4, 1, 5, 2, 6, 3, 7,
];

/// Triangle-list indices for the translucent frustum volume (12 triangles).
pub const FRUSTUM_FACE_INDICES: [u16; 36] = [
    0, 1, 2,
    0, 2, 3,
    1, 5, 6,
    1, 2, 6,
    1, 5, 4,
    1, 0, 4,
    3, 0, 4,
    3, 7, 4,
    2, 6, 7,
    2, 3, 7,
    4, 5, 6,
    4, 6, 7,
];

/// The 8 corners of a view frustum. Fully recomputed every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumCorners {
    /// Corners in index order (see module docs)
    pub corners: [Vec3; 8],
}

impl FrustumCorners {
    /// Extract corners from an already inverted view-projection matrix.
    pub fn from_inverse_view_projection(inverse: &Mat4) -> Self {
        let corners = NDC_CORNERS.map(|ndc| {
            let c = *inverse * ndc;
            c.truncate() / c.w
        });
        Self { corners }
    }

    /// Invert `projection * view` and extract its corners.
    ///
    /// # Errors
    ///
    /// `Error::SingularMatrix` if the view-projection cannot be inverted.
    pub fn from_view_projection(view_projection: &Mat4) -> Result<Self> {
        Ok(Self::from_inverse_view_projection(&invert(view_projection)?))
    }

    /// Corner by index
    #[inline]
    pub fn corner(&self, index: usize) -> Vec3 {
        self.corners[index]
    }

    /// Near-plane corners (LB, LT, RT, RB)
    pub fn near(&self) -> [Vec3; 4] {
        [self.corners[0], self.corners[1], self.corners[2], self.corners[3]]
    }

    /// Far-plane corners (LB, LT, RT, RB)
    pub fn far(&self) -> [Vec3; 4] {
        [self.corners[4], self.corners[5], self.corners[6], self.corners[7]]
    }

    /// Midpoints of the four side edges (corner `i` to corner `i + 4`)
    pub fn edge_centers(&self) -> [Vec3; 4] {
        std::array::from_fn(|i| (self.corners[i] + self.corners[i + 4]) * 0.5)
    }

    /// Centroid of all 8 corners
    pub fn center(&self) -> Vec3 {
        self.corners.iter().copied().sum::<Vec3>() / 8.0
    }

    /// 12 edge segments as 24 endpoints, ready for a line-list draw.
    pub fn line_list(&self) -> [Vec3; 24] {
        FRUSTUM_EDGE_INDICES.map(|i| self.corners[i as usize])
    }

    /// Flattened xyz positions (24 floats), the per-frame vertex buffer content.
    pub fn to_vertex_data(&self) -> [f32; 24] {
        let mut data = [0.0f32; 24];
        for (chunk, corner) in data.chunks_exact_mut(3).zip(self.corners.iter()) {
            chunk.copy_from_slice(&corner.to_array());
        }
        data
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
