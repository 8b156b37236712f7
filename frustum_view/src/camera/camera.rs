/// Camera: orientation plus perspective, with derived matrices.
///
/// Unlike a passive matrix container, this camera keeps the high-level
/// parameters (eye, direction, fov, planes...) that sliders and input
/// handlers mutate, and derives the matrices on demand. Nothing is cached:
/// every accessor reflects the current parameters.

use glam::Mat4;
use crate::error::Result;
use crate::math::{self, FrustumCorners};
use super::orientation::{CameraOrientation, CameraPerspective};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub orientation: CameraOrientation,
    pub perspective: CameraPerspective,
}

impl Camera {
    pub const fn new(orientation: CameraOrientation, perspective: CameraPerspective) -> Self {
        Self { orientation, perspective }
    }

    // ===== DERIVED MATRICES =====

    /// View matrix (look-at from the orientation).
    pub fn view_matrix(&self) -> Mat4 {
        self.orientation.view_matrix()
    }

    /// Projection matrix.
    pub fn projection_matrix(&self) -> Result<Mat4> {
        self.perspective.projection_matrix()
    }

    /// View matrix, failing with `DegenerateView` instead of producing NaN.
    pub fn checked_view_matrix(&self) -> Result<Mat4> {
        self.orientation.checked_view_matrix()
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Result<Mat4> {
        Ok(self.projection_matrix()? * self.checked_view_matrix()?)
    }

    /// Inverse of the view-projection, by cofactor expansion.
    pub fn inverse_view_projection_matrix(&self) -> Result<Mat4> {
        math::invert(&self.view_projection_matrix()?)
    }

    /// World-space corners of this camera's view frustum.
    pub fn frustum_corners(&self) -> Result<FrustumCorners> {
        Ok(FrustumCorners::from_inverse_view_projection(
            &self.inverse_view_projection_matrix()?,
        ))
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
