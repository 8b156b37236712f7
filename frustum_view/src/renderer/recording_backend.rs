/// Headless backend that records every command instead of issuing it.
///
/// Used by tests and dry runs. Programs go through a light validation pass
/// that mirrors what a GLSL compiler would reject for the scene shaders:
/// empty stages, stages without `main`, and vertex stages that never
/// declare the `mvp` uniform or the `a_position` attribute. Draws that bind
/// a color buffer need a program declaring `a_color`.

use glam::{Mat4, Vec4};
use rustc_hash::FxHashMap;
use slotmap::SlotMap;
use crate::error::{Error, Result};
use crate::renderer::{
    BufferDesc, BufferKey, BufferUsage, DrawCall, DrawState, FrameTarget, ProgramDesc,
    ProgramKey, RenderBackend, ShaderStage, COLOR_ATTRIBUTE, MVP_UNIFORM, POSITION_ATTRIBUTE,
};
use crate::engine_bail;

/// Buffer owned by a `RecordingBackend`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedBuffer {
    pub name: String,
    pub usage: BufferUsage,
    pub data: Vec<u8>,
}

impl RecordedBuffer {
    /// Contents reinterpreted as `f32` components (vertex buffers)
    pub fn as_f32(&self) -> Vec<f32> {
        bytemuck::pod_collect_to_vec::<u8, f32>(&self.data)
    }

    fn element_size(&self) -> usize {
        match self.usage {
            BufferUsage::Vertex => 4,
            BufferUsage::Index => 2,
        }
    }

    fn element_count(&self) -> usize {
        self.data.len() / self.element_size()
    }
}

/// Program owned by a `RecordingBackend`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedProgram {
    pub desc: ProgramDesc,
    /// Vertex stage declares the color attribute
    pub reads_color: bool,
}

/// One recorded backend call
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCommand {
    UploadBuffer { buffer: BufferKey, size: usize },
    UpdateBuffer { buffer: BufferKey, size: usize },
    CompileProgram { program: ProgramKey },
    BeginFrame { width: u32, height: u32, clear_color: Vec4 },
    DrawIndexed { program: ProgramKey, mvp: Mat4, state: DrawState, index_count: u32 },
    DrawLines { program: ProgramKey, mvp: Mat4, state: DrawState, vertex_count: u32 },
    EndFrame,
}

/// Recording backend
#[derive(Debug, Default)]
pub struct RecordingBackend {
    buffers: SlotMap<BufferKey, RecordedBuffer>,
    programs: SlotMap<ProgramKey, RecordedProgram>,
    program_names: FxHashMap<String, ProgramKey>,
    commands: Vec<RecordedCommand>,
    in_frame: bool,
    frame_count: u64,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every command recorded so far, in call order
    pub fn commands(&self) -> &[RecordedCommand] {
        &self.commands
    }

    /// Commands of the last completed (or current) frame, from `BeginFrame`
    pub fn last_frame_commands(&self) -> &[RecordedCommand] {
        let start = self.commands
            .iter()
            .rposition(|c| matches!(c, RecordedCommand::BeginFrame { .. }))
            .unwrap_or(self.commands.len());
        &self.commands[start..]
    }

    /// Forget recorded commands (resources are kept)
    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    pub fn buffer(&self, key: BufferKey) -> Option<&RecordedBuffer> {
        self.buffers.get(key)
    }

    pub fn program(&self, key: ProgramKey) -> Option<&RecordedProgram> {
        self.programs.get(key)
    }

    /// Look up a program by name
    pub fn program_by_name(&self, name: &str) -> Option<ProgramKey> {
        self.program_names.get(name).copied()
    }

    pub fn buffer_count(&self) -> usize {
        self.buffers.len()
    }

    pub fn program_count(&self) -> usize {
        self.programs.len()
    }

    /// Number of frames ended so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    fn validate_stage(desc: &ProgramDesc, stage: ShaderStage) -> Result<()> {
        let source = desc.source(stage);
        if source.trim().is_empty() {
            engine_bail!("fv::RecordingBackend", error = Error::ShaderCompile {
                stage,
                log: format!("program '{}': empty source", desc.name),
            });
        }
        if !source.contains("void main") {
            engine_bail!("fv::RecordingBackend", error = Error::ShaderCompile {
                stage,
                log: format!("program '{}': missing entry point 'main'", desc.name),
            });
        }
        Ok(())
    }

    fn check_frame(&self, operation: &str) -> Result<()> {
        if !self.in_frame {
            engine_bail!("fv::RecordingBackend", error = Error::BackendError(
                format!("{} outside of begin_frame/end_frame", operation)
            ));
        }
        Ok(())
    }

    fn check_draw(&self, call: &DrawCall) -> Result<&RecordedBuffer> {
        let Some(program) = self.programs.get(call.program) else {
            engine_bail!("fv::RecordingBackend", error = Error::InvalidResource(
                "unknown program handle".to_string()
            ));
        };
        let Some(positions) = self.buffers.get(call.positions) else {
            engine_bail!("fv::RecordingBackend", error = Error::InvalidResource(
                "unknown position buffer handle".to_string()
            ));
        };
        if let Some(colors) = call.colors {
            if !self.buffers.contains_key(colors) {
                engine_bail!("fv::RecordingBackend", error = Error::InvalidResource(
                    "unknown color buffer handle".to_string()
                ));
            }
            if !program.reads_color {
                engine_bail!("fv::RecordingBackend", error = Error::InvalidResource(format!(
                    "program '{}' has no '{}' attribute for the bound color buffer",
                    program.desc.name, COLOR_ATTRIBUTE
                )));
            }
        }
        Ok(positions)
    }
}

impl RenderBackend for RecordingBackend {
    fn upload_buffer(&mut self, desc: &BufferDesc, data: &[u8]) -> Result<BufferKey> {
        let buffer = RecordedBuffer {
            name: desc.name.clone(),
            usage: desc.usage,
            data: data.to_vec(),
        };
        let key = self.buffers.insert(buffer);
        self.commands.push(RecordedCommand::UploadBuffer { buffer: key, size: data.len() });
        Ok(key)
    }

    fn update_buffer(&mut self, buffer: BufferKey, data: &[u8]) -> Result<()> {
        let Some(target) = self.buffers.get_mut(buffer) else {
            engine_bail!("fv::RecordingBackend", error = Error::InvalidResource(
                "update of unknown buffer handle".to_string()
            ));
        };
        target.data.clear();
        target.data.extend_from_slice(data);
        self.commands.push(RecordedCommand::UpdateBuffer { buffer, size: data.len() });
        Ok(())
    }

    fn compile_program(&mut self, desc: &ProgramDesc) -> Result<ProgramKey> {
        if self.program_names.contains_key(&desc.name) {
            engine_bail!("fv::RecordingBackend", error = Error::InvalidResource(
                format!("program '{}' already exists", desc.name)
            ));
        }

        Self::validate_stage(desc, ShaderStage::Vertex)?;
        Self::validate_stage(desc, ShaderStage::Fragment)?;

        let declaration = format!("uniform mat4 {};", MVP_UNIFORM);
        if !desc.vertex_source.contains(&declaration) {
            engine_bail!("fv::RecordingBackend", error = Error::ProgramLink(
                format!("program '{}': uniform '{}' not found", desc.name, MVP_UNIFORM)
            ));
        }

        let position = format!("attribute vec4 {};", POSITION_ATTRIBUTE);
        if !desc.vertex_source.contains(&position) {
            engine_bail!("fv::RecordingBackend", error = Error::ProgramLink(
                format!("program '{}': attribute '{}' not found", desc.name, POSITION_ATTRIBUTE)
            ));
        }
        let reads_color = desc.vertex_source
            .contains(&format!("attribute vec4 {};", COLOR_ATTRIBUTE));

        let key = self.programs.insert(RecordedProgram { desc: desc.clone(), reads_color });
        self.program_names.insert(desc.name.clone(), key);
        self.commands.push(RecordedCommand::CompileProgram { program: key });
        Ok(key)
    }

    fn begin_frame(&mut self, target: &FrameTarget) -> Result<()> {
        if self.in_frame {
            engine_bail!("fv::RecordingBackend", error = Error::BackendError(
                "begin_frame called twice without end_frame".to_string()
            ));
        }
        self.in_frame = true;
        self.commands.push(RecordedCommand::BeginFrame {
            width: target.width,
            height: target.height,
            clear_color: target.clear_color,
        });
        Ok(())
    }

    fn draw_indexed(&mut self, call: &DrawCall, indices: BufferKey, index_count: u32) -> Result<()> {
        self.check_frame("draw_indexed")?;
        self.check_draw(call)?;

        let Some(index_buffer) = self.buffers.get(indices) else {
            engine_bail!("fv::RecordingBackend", error = Error::InvalidResource(
                "unknown index buffer handle".to_string()
            ));
        };
        if index_buffer.usage != BufferUsage::Index {
            engine_bail!("fv::RecordingBackend", error = Error::InvalidResource(
                format!("buffer '{}' is not an index buffer", index_buffer.name)
            ));
        }
        if index_count as usize > index_buffer.element_count() {
            engine_bail!("fv::RecordingBackend", error = Error::InvalidResource(format!(
                "draw of {} indices from '{}' holding {}",
                index_count, index_buffer.name, index_buffer.element_count()
            )));
        }

        self.commands.push(RecordedCommand::DrawIndexed {
            program: call.program,
            mvp: call.mvp,
            state: call.state,
            index_count,
        });
        Ok(())
    }

    fn draw_lines(&mut self, call: &DrawCall, vertex_count: u32) -> Result<()> {
        self.check_frame("draw_lines")?;
        let positions = self.check_draw(call)?;

        let available = positions.element_count() / 3;
        if vertex_count as usize > available {
            engine_bail!("fv::RecordingBackend", error = Error::InvalidResource(format!(
                "draw of {} vertices from '{}' holding {}",
                vertex_count, positions.name, available
            )));
        }

        self.commands.push(RecordedCommand::DrawLines {
            program: call.program,
            mvp: call.mvp,
            state: call.state,
            vertex_count,
        });
        Ok(())
    }

    fn end_frame(&mut self) -> Result<()> {
        self.check_frame("end_frame")?;
        self.in_frame = false;
        self.frame_count += 1;
        self.commands.push(RecordedCommand::EndFrame);
        Ok(())
    }
}

#[cfg(test)]
#[path = "recording_backend_tests.rs"]
mod tests;
