/// Camera orientation and perspective parameters.

use glam::{Mat4, Vec3};
use crate::engine_bail;
use crate::error::{Error, Result};
use crate::math;

/// Minimum `|normalize(direction) × normalize(up)|` for a usable view.
pub const MIN_LOOK_UP_SEPARATION: f32 = 1e-3;

/// Where a camera is and where it looks.
///
/// `direction` is a look direction, not a target point: the view matrix
/// looks at `eye + direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraOrientation {
    /// Eye position
    pub eye: Vec3,
    /// Look direction (not necessarily normalized)
    pub direction: Vec3,
    /// Up vector
    pub up: Vec3,
}

impl CameraOrientation {
    pub const fn new(eye: Vec3, direction: Vec3, up: Vec3) -> Self {
        Self { eye, direction, up }
    }

    /// Point the camera looks at (`eye + direction`).
    #[inline]
    pub fn target(&self) -> Vec3 {
        self.eye + self.direction
    }

    /// Right-handed look-at view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        math::look_at(self.eye, self.target(), self.up)
    }

    /// View matrix, rejecting orientations that cannot produce one.
    ///
    /// # Errors
    ///
    /// `Error::DegenerateView` if the direction or up vector is zero, if the
    /// two are (anti)parallel, or if the resulting matrix is not finite.
    pub fn checked_view_matrix(&self) -> Result<Mat4> {
        let separation = self.direction.normalize_or_zero()
            .cross(self.up.normalize_or_zero())
            .length();
        if separation < MIN_LOOK_UP_SEPARATION {
            engine_bail!("fv::CameraOrientation", error = Error::DegenerateView(format!(
                "direction {:?} is parallel to up {:?}", self.direction, self.up)));
        }

        let view = self.view_matrix();
        if !view.is_finite() {
            engine_bail!("fv::CameraOrientation", error = Error::DegenerateView(format!(
                "non-finite view for eye {:?}", self.eye)));
        }
        Ok(view)
    }
}

/// Perspective projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPerspective {
    /// Vertical field of view in degrees
    pub fov_degrees: f32,
    /// Width / height
    pub aspect_ratio: f32,
    /// Near plane distance
    pub near: f32,
    /// Far plane distance
    pub far: f32,
}

impl CameraPerspective {
    pub const fn new(fov_degrees: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        Self { fov_degrees, aspect_ratio, near, far }
    }

    /// OpenGL projection matrix.
    ///
    /// # Errors
    ///
    /// `Error::InvalidProjection` for a degenerate parameter set.
    pub fn projection_matrix(&self) -> Result<Mat4> {
        math::perspective(self.fov_degrees, self.aspect_ratio, self.near, self.far)
    }

    /// Whether `projection_matrix()` would succeed.
    pub fn is_valid(&self) -> bool {
        self.projection_matrix().is_ok()
    }
}
