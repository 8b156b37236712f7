/// Typed slider and checkbox bindings for the control panel.
///
/// A GUI adapter lists `Control::ALL`, draws a slider per entry using
/// `label()` and `range()`, and writes user changes back with
/// `SceneState::set_control`.

use crate::engine_warn;
use super::scene_state::{CameraMode, SceneState};

/// Smallest gap kept between the scene camera's near and far planes.
pub const MIN_DEPTH_SPAN: f32 = 0.01;

/// Slider bounds
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlRange {
    pub min: f32,
    pub max: f32,
    /// Slider increment
    pub step: f32,
}

impl ControlRange {
    const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

/// Slider-bound scene value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    CubeTranslateX,
    CubeTranslateY,
    CubeTranslateZ,
    CubeScaleX,
    CubeScaleY,
    CubeScaleZ,
    CubeRotateX,
    CubeRotateY,
    CubeRotateZ,
    CameraPositionX,
    CameraPositionY,
    CameraPositionZ,
    /// Scene camera vertical field of view (degrees)
    FieldOfView,
    AspectRatio,
    Near,
    Far,
}

impl Control {
    /// Every control, in panel order
    pub const ALL: [Control; 16] = [
        Control::CubeTranslateX,
        Control::CubeTranslateY,
        Control::CubeTranslateZ,
        Control::CubeScaleX,
        Control::CubeScaleY,
        Control::CubeScaleZ,
        Control::CubeRotateX,
        Control::CubeRotateY,
        Control::CubeRotateZ,
        Control::CameraPositionX,
        Control::CameraPositionY,
        Control::CameraPositionZ,
        Control::FieldOfView,
        Control::AspectRatio,
        Control::Near,
        Control::Far,
    ];

    pub fn range(self) -> ControlRange {
        match self {
            Control::CubeTranslateX | Control::CubeTranslateY | Control::CubeTranslateZ
            | Control::CubeRotateX | Control::CubeRotateY | Control::CubeRotateZ
            | Control::CameraPositionX | Control::CameraPositionY | Control::CameraPositionZ => {
                ControlRange::new(-10.0, 10.0, 0.01)
            }
            Control::CubeScaleX | Control::CubeScaleY | Control::CubeScaleZ => {
                ControlRange::new(0.0, 5.0, 0.01)
            }
            Control::FieldOfView => ControlRange::new(30.0, 120.0, 1.0),
            Control::AspectRatio => ControlRange::new(1.0, 2.0, 0.01),
            Control::Near => ControlRange::new(0.1, 10.0, 0.01),
            Control::Far => ControlRange::new(0.0, 15.0, 0.1),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Control::CubeTranslateX => "Translate x",
            Control::CubeTranslateY => "Translate y",
            Control::CubeTranslateZ => "Translate z",
            Control::CubeScaleX => "Scale x",
            Control::CubeScaleY => "Scale y",
            Control::CubeScaleZ => "Scale z",
            Control::CubeRotateX => "Rotate x",
            Control::CubeRotateY => "Rotate y",
            Control::CubeRotateZ => "Rotate z",
            Control::CameraPositionX => "Cam pos x",
            Control::CameraPositionY => "Cam pos y",
            Control::CameraPositionZ => "Cam pos z",
            Control::FieldOfView => "fov",
            Control::AspectRatio => "Aspect Ratio",
            Control::Near => "near",
            Control::Far => "far",
        }
    }

    /// Whether the control edits the cube (as opposed to the scene camera)
    pub fn is_cube_control(self) -> bool {
        matches!(
            self,
            Control::CubeTranslateX | Control::CubeTranslateY | Control::CubeTranslateZ
            | Control::CubeScaleX | Control::CubeScaleY | Control::CubeScaleZ
            | Control::CubeRotateX | Control::CubeRotateY | Control::CubeRotateZ
        )
    }
}

/// Checkbox-bound scene flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    /// "Fix Eye to Scene Camera": render through the scene camera
    FixEyeToSceneCamera,
    /// "Show Scene Camera": draw the gizmo and frustum in objective mode
    ShowSceneCamera,
}

impl Toggle {
    pub fn label(self) -> &'static str {
        match self {
            Toggle::FixEyeToSceneCamera => "Fix Eye to Scene Camera",
            Toggle::ShowSceneCamera => "Show Scene Camera",
        }
    }
}

impl SceneState {
    /// Current value behind a slider
    pub fn control_value(&self, control: Control) -> f32 {
        let eye = self.scene_camera.orientation.eye;
        let perspective = &self.scene_camera.perspective;
        match control {
            Control::CubeTranslateX => self.cube.translation.x,
            Control::CubeTranslateY => self.cube.translation.y,
            Control::CubeTranslateZ => self.cube.translation.z,
            Control::CubeScaleX => self.cube.scale.x,
            Control::CubeScaleY => self.cube.scale.y,
            Control::CubeScaleZ => self.cube.scale.z,
            Control::CubeRotateX => self.cube.rotation.x,
            Control::CubeRotateY => self.cube.rotation.y,
            Control::CubeRotateZ => self.cube.rotation.z,
            Control::CameraPositionX => eye.x,
            Control::CameraPositionY => eye.y,
            Control::CameraPositionZ => eye.z,
            Control::FieldOfView => perspective.fov_degrees,
            Control::AspectRatio => perspective.aspect_ratio,
            Control::Near => perspective.near,
            Control::Far => perspective.far,
        }
    }

    /// Write a slider value, clamped into the control's range.
    ///
    /// Near and far are additionally kept at least `MIN_DEPTH_SPAN` apart so
    /// the scene camera projection stays valid. Non-finite values are
    /// ignored. Returns the value actually stored.
    pub fn set_control(&mut self, control: Control, value: f32) -> f32 {
        if !value.is_finite() {
            engine_warn!("fv::SceneState", "Ignoring non-finite value for '{}'", control.label());
            return self.control_value(control);
        }

        let mut value = control.range().clamp(value);
        match control {
            Control::Near => value = value.min(self.scene_camera.perspective.far - MIN_DEPTH_SPAN),
            Control::Far => value = value.max(self.scene_camera.perspective.near + MIN_DEPTH_SPAN),
            _ => {}
        }

        let eye = &mut self.scene_camera.orientation.eye;
        match control {
            Control::CubeTranslateX => self.cube.translation.x = value,
            Control::CubeTranslateY => self.cube.translation.y = value,
            Control::CubeTranslateZ => self.cube.translation.z = value,
            Control::CubeScaleX => self.cube.scale.x = value,
            Control::CubeScaleY => self.cube.scale.y = value,
            Control::CubeScaleZ => self.cube.scale.z = value,
            Control::CubeRotateX => self.cube.rotation.x = value,
            Control::CubeRotateY => self.cube.rotation.y = value,
            Control::CubeRotateZ => self.cube.rotation.z = value,
            Control::CameraPositionX => eye.x = value,
            Control::CameraPositionY => eye.y = value,
            Control::CameraPositionZ => eye.z = value,
            Control::FieldOfView => self.scene_camera.perspective.fov_degrees = value,
            Control::AspectRatio => self.scene_camera.perspective.aspect_ratio = value,
            Control::Near => self.scene_camera.perspective.near = value,
            Control::Far => self.scene_camera.perspective.far = value,
        }
        value
    }

    pub fn toggle_value(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::FixEyeToSceneCamera => self.mode == CameraMode::Projection,
            Toggle::ShowSceneCamera => self.show_scene_camera,
        }
    }

    pub fn set_toggle(&mut self, toggle: Toggle, enabled: bool) {
        match toggle {
            Toggle::FixEyeToSceneCamera => {
                self.mode = if enabled { CameraMode::Projection } else { CameraMode::Objective };
            }
            Toggle::ShowSceneCamera => self.show_scene_camera = enabled,
        }
    }
}

#[cfg(test)]
#[path = "controls_tests.rs"]
mod tests;
