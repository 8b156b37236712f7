/// Matrices and frustum data for one frame, computed by
/// `SceneState::prepare_frame` and consumed by the renderer.

use glam::Mat4;
use crate::math::FrustumCorners;
use super::scene_state::CameraMode;

/// Scene-camera visualization, drawn through the free camera
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneCameraOverlay {
    /// Free camera view-projection times the gizmo model
    pub gizmo_mvp: Mat4,
    /// Free camera view-projection (frustum corners are world-space)
    pub frustum_mvp: Mat4,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMatrices {
    /// Camera the cube and grid are seen through
    pub mode: CameraMode,
    pub cube_model: Mat4,
    pub cube_view: Mat4,
    pub cube_projection: Mat4,
    /// `projection * view * model`
    pub cube_mvp: Mat4,
    /// `projection * view` (grid vertices are world-space)
    pub grid_mvp: Mat4,
    /// Present in objective mode while the scene camera is shown
    pub overlay: Option<SceneCameraOverlay>,
    /// World-space scene-camera frustum
    pub frustum: FrustumCorners,
}
