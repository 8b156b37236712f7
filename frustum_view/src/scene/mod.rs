//! Scene module
//!
//! Holds the interactive scene state (cube transform, free and scene
//! cameras, view mode), the typed control-panel bindings, the static scene
//! geometry and the per-frame matrix preparation.

mod controls;
mod frame;
mod geometry;
mod scene_state;
mod transform;

pub use controls::{Control, ControlRange, Toggle, MIN_DEPTH_SPAN};
pub use frame::{FrameMatrices, SceneCameraOverlay};
pub use geometry::{
    cube_mesh, frustum_mesh, gizmo_mesh, grid_mesh, MeshData,
    CUBE_CORNERS, CUBE_FACE_COLORS, CUBE_INDICES,
    GIZMO_COLOR, GIZMO_INDICES, GIZMO_VERTICES,
    FRUSTUM_FAR_COLOR, FRUSTUM_NEAR_COLOR,
    GRID_HALF_EXTENT, GRID_HEIGHT, GRID_SPACING,
};
pub use scene_state::{CameraMode, SceneState};
pub use transform::{CubeTransform, GizmoTransform};
