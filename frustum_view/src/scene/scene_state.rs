/// Scene state: cube transform, both cameras, view mode and input handling.

use crate::camera::{Camera, FlyController, MoveDirection};
use crate::config::ViewerConfig;
use crate::error::Result;
use crate::input::{InputEvent, InputOutcome, Key, MouseButton};
use crate::{engine_debug, engine_info};
use super::frame::{FrameMatrices, SceneCameraOverlay};
use super::transform::{CubeTransform, GizmoTransform};

/// Which camera the cube is rendered through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// Free camera looking at the scene, scene camera drawn as a gizmo
    #[default]
    Objective,
    /// Looking through the scene camera itself
    Projection,
}

/// Complete interactive state of the viewer.
///
/// Owned by `Viewer` and mutated only through `&mut` between frames.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneState {
    pub cube: CubeTransform,
    /// Fly-through camera driven by W/A/S/D and mouse-look
    pub free_camera: Camera,
    /// Slider-driven camera whose frustum is visualized
    pub scene_camera: Camera,
    pub controller: FlyController,
    pub gizmo: GizmoTransform,
    pub mode: CameraMode,
    pub show_scene_camera: bool,
    /// Degrees per cube rotation slider unit
    pub rotation_step_degrees: f32,
    initial_scene_camera: Camera,
}

impl SceneState {
    pub fn new(config: &ViewerConfig) -> Self {
        Self {
            cube: CubeTransform::INITIAL,
            free_camera: config.free_camera,
            scene_camera: config.scene_camera,
            controller: FlyController::new(config.initial_yaw, config.initial_pitch, config.move_speed),
            gizmo: config.gizmo,
            mode: CameraMode::Objective,
            show_scene_camera: true,
            rotation_step_degrees: config.rotation_step_degrees,
            initial_scene_camera: config.scene_camera,
        }
    }

    /// "Reset Values" of the cube panel
    pub fn reset_cube_transform(&mut self) {
        self.cube.reset();
        engine_debug!("fv::SceneState", "Cube transform reset");
    }

    /// "Reset Values" of the scene camera panel.
    ///
    /// Restores the scene camera's orientation and perspective, switches back
    /// to objective mode and shows the scene camera again.
    pub fn reset_scene_camera(&mut self) {
        self.scene_camera = self.initial_scene_camera;
        self.mode = CameraMode::Objective;
        self.show_scene_camera = true;
        engine_debug!("fv::SceneState", "Scene camera reset");
    }

    /// Camera the cube and grid are currently rendered through
    pub fn active_camera(&self) -> &Camera {
        match self.mode {
            CameraMode::Objective => &self.free_camera,
            CameraMode::Projection => &self.scene_camera,
        }
    }

    /// Apply one input event.
    ///
    /// Keys move the free camera in both modes; mouse-look only starts on a
    /// left press outside GUI panels.
    pub fn handle_input(&mut self, event: &InputEvent) -> InputOutcome {
        match *event {
            InputEvent::Quit | InputEvent::KeyPressed(Key::Q) => {
                engine_info!("fv::SceneState", "Quit requested");
                return InputOutcome::Quit;
            }
            InputEvent::KeyPressed(Key::W) => self.move_free_camera(MoveDirection::Forward),
            InputEvent::KeyPressed(Key::S) => self.move_free_camera(MoveDirection::Backward),
            InputEvent::KeyPressed(Key::A) => self.move_free_camera(MoveDirection::Left),
            InputEvent::KeyPressed(Key::D) => self.move_free_camera(MoveDirection::Right),
            InputEvent::MouseButtonPressed { button: MouseButton::Left, x, y, over_ui: false } => {
                self.controller.begin_drag(x, y);
            }
            InputEvent::MouseButtonReleased { button: MouseButton::Left } => {
                self.controller.end_drag();
            }
            InputEvent::MouseMoved { x, y } => {
                self.controller.drag_to(x, y, &mut self.free_camera.orientation);
            }
            InputEvent::MouseButtonPressed { .. } | InputEvent::MouseButtonReleased { .. } => {}
        }
        InputOutcome::Continue
    }

    fn move_free_camera(&mut self, direction: MoveDirection) {
        self.controller.move_camera(&mut self.free_camera.orientation, direction);
    }

    /// Compute every matrix needed to draw the current state.
    ///
    /// # Errors
    ///
    /// `InvalidProjection` if a camera's perspective is degenerate,
    /// `DegenerateView` if a camera looks along its up vector,
    /// `SingularMatrix` if the scene camera's view-projection cannot be
    /// inverted.
    pub fn prepare_frame(&self) -> Result<FrameMatrices> {
        let camera = self.active_camera();
        let cube_model = self.cube.model_matrix(self.rotation_step_degrees);
        let cube_view = camera.checked_view_matrix()?;
        let cube_projection = camera.projection_matrix()?;
        let view_projection = cube_projection * cube_view;

        let frustum = self.scene_camera.frustum_corners()?;

        let overlay = match (self.mode, self.show_scene_camera) {
            (CameraMode::Objective, true) => {
                let free_view_projection = self.free_camera.view_projection_matrix()?;
                let gizmo_model = self.gizmo.model_matrix(self.scene_camera.orientation.eye);
                Some(SceneCameraOverlay {
                    gizmo_mvp: free_view_projection * gizmo_model,
                    frustum_mvp: free_view_projection,
                })
            }
            _ => None,
        };

        Ok(FrameMatrices {
            mode: self.mode,
            cube_model,
            cube_view,
            cube_projection,
            cube_mvp: view_projection * cube_model,
            grid_mvp: view_projection,
            overlay,
            frustum,
        })
    }
}

#[cfg(test)]
#[path = "scene_state_tests.rs"]
mod tests;
