/// Object transforms: the slider-driven cube and the scene-camera gizmo.

use glam::{Mat4, Vec3};
use crate::math;

/// Cube transform edited live by the control panel.
///
/// Rotation is stored in coarse steps; the model matrix multiplies each
/// component by the configured step (30° by default).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeTransform {
    /// Translation (tx, ty, tz)
    pub translation: Vec3,
    /// Scale (sx, sy, sz)
    pub scale: Vec3,
    /// Rotation steps about x, y, z (rx, ry, rz)
    pub rotation: Vec3,
}

impl CubeTransform {
    /// Startup / reset value: no translation, unit scale, no rotation.
    pub const INITIAL: CubeTransform = CubeTransform {
        translation: Vec3::ZERO,
        scale: Vec3::ONE,
        rotation: Vec3::ZERO,
    };

    /// Restore `INITIAL`.
    pub fn reset(&mut self) {
        *self = Self::INITIAL;
    }

    /// Model matrix `T * Rz * Ry * Rx * S`.
    pub fn model_matrix(&self, rotation_step_degrees: f32) -> Mat4 {
        let angles = self.rotation * rotation_step_degrees;
        let rotate_x = math::rotation_degrees(angles.x, Vec3::X);
        let rotate_y = math::rotation_degrees(angles.y, Vec3::Y);
        let rotate_z = math::rotation_degrees(angles.z, Vec3::Z);

        Mat4::from_translation(self.translation)
            * rotate_z
            * rotate_y
            * rotate_x
            * Mat4::from_scale(self.scale)
    }
}

impl Default for CubeTransform {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Fixed local transform placing the camera gizmo next to the scene-camera eye.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GizmoTransform {
    /// Offset from the scene-camera eye
    pub offset: Vec3,
    /// Rotation axis
    pub rotation_axis: Vec3,
    /// Rotation angle in degrees
    pub rotation_degrees: f32,
    /// Scale
    pub scale: Vec3,
}

impl GizmoTransform {
    /// Model matrix `T(eye + offset) * R * S`.
    pub fn model_matrix(&self, eye: Vec3) -> Mat4 {
        Mat4::from_translation(eye + self.offset)
            * math::rotation_degrees(self.rotation_degrees, self.rotation_axis)
            * Mat4::from_scale(self.scale)
    }
}

impl Default for GizmoTransform {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.5, 0.0, 0.0),
            rotation_axis: Vec3::Y,
            rotation_degrees: 90.0,
            scale: Vec3::splat(0.5),
        }
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
