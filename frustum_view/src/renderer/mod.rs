//! Renderer module
//!
//! Backend-agnostic rendering interface (`RenderBackend`), the shader
//! programs used by the scene, a headless `RecordingBackend`, and the
//! `SceneRenderer` that draws a prepared frame.

mod backend;
mod recording_backend;
mod scene_renderer;
mod shader;

pub use backend::{
    BufferDesc, BufferKey, BufferUsage, DrawCall, DrawState, FrameTarget,
    PrimitiveTopology, ProgramKey, RenderBackend, RenderStats,
};
pub use recording_backend::{RecordedBuffer, RecordedCommand, RecordedProgram, RecordingBackend};
pub use scene_renderer::SceneRenderer;
pub use shader::{
    cube_program, frustum_program, gizmo_program, grid_program, ProgramDesc, ShaderStage,
    COLOR_ATTRIBUTE, COLOR_VERTEX_SHADER, GIZMO_FRAGMENT_SHADER, GRID_FRAGMENT_SHADER,
    MVP_UNIFORM, POSITION_ATTRIBUTE, VERTEX_COLOR_FRAGMENT_SHADER,
};
