/// Rendering backend trait and the value types passed across it.
///
/// A backend owns GPU-side (or recorded) buffers and programs and hands out
/// slotmap keys for them. Resources live until the backend is dropped.

use bitflags::bitflags;
use glam::{Mat4, Vec4};
use slotmap::new_key_type;
use crate::error::Result;
use crate::renderer::ProgramDesc;

new_key_type! {
    /// Handle to a buffer owned by a backend
    pub struct BufferKey;
    /// Handle to a compiled program owned by a backend
    pub struct ProgramKey;
}

/// Primitive topology of a draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTopology {
    /// Triangle list
    Triangles,
    /// Line list (two vertices per segment)
    Lines,
}

/// Buffer usage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferUsage {
    /// Vertex attribute data (`f32` components)
    Vertex,
    /// `u16` index data
    Index,
}

/// Descriptor for creating a buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferDesc {
    /// Debug name
    pub name: String,
    /// Buffer usage
    pub usage: BufferUsage,
}

impl BufferDesc {
    pub fn vertex(name: &str) -> Self {
        Self { name: name.to_string(), usage: BufferUsage::Vertex }
    }

    pub fn index(name: &str) -> Self {
        Self { name: name.to_string(), usage: BufferUsage::Index }
    }
}

bitflags! {
    /// Fixed-function state for a draw
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DrawState: u32 {
        /// Alpha blending (src alpha, one minus src alpha)
        const BLEND = 1 << 0;
    }
}

/// Per-frame target parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTarget {
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
    /// Clear color (RGBA)
    pub clear_color: Vec4,
}

/// Common inputs of a draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    pub program: ProgramKey,
    /// xyz positions
    pub positions: BufferKey,
    /// rgba colors, if the program reads them
    pub colors: Option<BufferKey>,
    /// Value bound to the `mvp` uniform
    pub mvp: Mat4,
    pub state: DrawState,
}

/// Draw statistics for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    pub draw_calls: u32,
    pub triangles: u32,
    pub line_segments: u32,
}

/// Rendering backend
///
/// Implemented by real graphics APIs and by `RecordingBackend` for headless
/// runs. All calls between `begin_frame` and `end_frame` belong to one frame.
pub trait RenderBackend {
    /// Create a buffer initialized with `data`
    fn upload_buffer(&mut self, desc: &BufferDesc, data: &[u8]) -> Result<BufferKey>;

    /// Replace the whole content of an existing buffer
    fn update_buffer(&mut self, buffer: BufferKey, data: &[u8]) -> Result<()>;

    /// Compile and link a program
    ///
    /// # Errors
    ///
    /// `ShaderCompile` when a stage fails to compile, `ProgramLink` when the
    /// stages fail to link.
    fn compile_program(&mut self, desc: &ProgramDesc) -> Result<ProgramKey>;

    /// Start a frame: set the viewport and clear the target
    fn begin_frame(&mut self, target: &FrameTarget) -> Result<()>;

    /// Draw indexed triangles
    fn draw_indexed(&mut self, call: &DrawCall, indices: BufferKey, index_count: u32) -> Result<()>;

    /// Draw `vertex_count` vertices as a line list
    fn draw_lines(&mut self, call: &DrawCall, vertex_count: u32) -> Result<()>;

    /// Finish and present the frame
    fn end_frame(&mut self) -> Result<()>;
}
