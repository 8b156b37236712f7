/// Viewer configuration: window size, clear color, camera setup and
/// controller tuning.

use glam::{Vec3, Vec4};
use crate::camera::{Camera, CameraOrientation, CameraPerspective, MIN_LOOK_UP_SEPARATION};
use crate::error::{Error, Result};
use crate::scene::GizmoTransform;

/// Initial scene camera: looks down -X at the cube from x = 3.5.
pub const SCENE_CAMERA: Camera = Camera::new(
    CameraOrientation::new(Vec3::new(3.5, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0), Vec3::Y),
    CameraPerspective::new(45.0, 4.0 / 3.0, 0.1, 10.0),
);

/// Initial free (objective) camera: wide view over the whole scene.
pub const FREE_CAMERA: Camera = Camera::new(
    CameraOrientation::new(Vec3::new(5.75, 2.0, 4.0), Vec3::new(-5.0, -2.0, -4.0), Vec3::Y),
    CameraPerspective::new(90.0, 1920.0 / 1080.0, 0.1, 100.0),
);

/// Viewer configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Viewport width in pixels
    pub window_width: u32,
    /// Viewport height in pixels
    pub window_height: u32,
    /// Clear color (RGBA)
    pub clear_color: Vec4,
    /// Free-camera step per key press
    pub move_speed: f32,
    /// Initial free-camera yaw in degrees
    pub initial_yaw: f32,
    /// Initial free-camera pitch in degrees
    pub initial_pitch: f32,
    /// Degrees per cube rotation slider unit
    pub rotation_step_degrees: f32,
    /// Placement of the camera gizmo relative to the scene-camera eye
    pub gizmo: GizmoTransform,
    /// Scene camera at startup and after a reset
    pub scene_camera: Camera,
    /// Free camera at startup
    pub free_camera: Camera,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            window_width: 1920,
            window_height: 1080,
            clear_color: Vec4::new(0.0, 0.0, 0.0, 1.0),
            move_speed: 0.1,
            initial_yaw: -90.0,
            initial_pitch: 0.0,
            rotation_step_degrees: 30.0,
            gizmo: GizmoTransform::default(),
            scene_camera: SCENE_CAMERA,
            free_camera: FREE_CAMERA,
        }
    }
}

impl ViewerConfig {
    /// Check every value the viewer relies on.
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(Error::InvalidConfig(format!(
                "window size must be non-zero, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        if !self.move_speed.is_finite() || self.move_speed <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "move_speed must be positive, got {}", self.move_speed
            )));
        }
        if !self.rotation_step_degrees.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "rotation_step_degrees must be finite, got {}", self.rotation_step_degrees
            )));
        }
        if !self.initial_yaw.is_finite() || !self.initial_pitch.is_finite() {
            return Err(Error::InvalidConfig("initial yaw/pitch must be finite".to_string()));
        }
        Self::validate_camera("scene_camera", &self.scene_camera)?;
        Self::validate_camera("free_camera", &self.free_camera)?;
        Ok(())
    }

    fn validate_camera(name: &str, camera: &Camera) -> Result<()> {
        if let Err(err) = camera.projection_matrix() {
            return Err(Error::InvalidConfig(format!("{}: {}", name, err)));
        }
        let orientation = &camera.orientation;
        let separation = orientation.direction.normalize_or_zero()
            .cross(orientation.up.normalize_or_zero())
            .length();
        if separation < MIN_LOOK_UP_SEPARATION {
            return Err(Error::InvalidConfig(format!(
                "{}: direction and up must be non-zero and not parallel", name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
