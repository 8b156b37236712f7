/// Scene renderer: uploads the four scene objects once and draws a prepared
/// frame through any `RenderBackend`.

use glam::Mat4;
use crate::error::{Error, Result};
use crate::math::FrustumCorners;
use crate::renderer::{
    cube_program, frustum_program, gizmo_program, grid_program, BufferDesc, BufferKey,
    DrawCall, DrawState, FrameTarget, PrimitiveTopology, ProgramDesc, ProgramKey,
    RenderBackend, RenderStats,
};
use crate::scene::{
    cube_mesh, frustum_mesh, gizmo_mesh, grid_mesh, CameraMode, FrameMatrices, MeshData,
    GRID_HALF_EXTENT, GRID_HEIGHT, GRID_SPACING,
};
use crate::{engine_bail, engine_debug, engine_info};

/// Backend-side mesh
#[derive(Debug, Clone, Copy)]
struct GpuMesh {
    program: ProgramKey,
    positions: BufferKey,
    colors: Option<BufferKey>,
    indices: Option<BufferKey>,
    element_count: u32,
    topology: PrimitiveTopology,
}

impl GpuMesh {
    fn upload(backend: &mut dyn RenderBackend, program: &ProgramDesc, mesh: &MeshData) -> Result<Self> {
        let name = program.name.as_str();
        let program = backend.compile_program(program)?;

        let positions = backend.upload_buffer(
            &BufferDesc::vertex(&format!("{}_positions", name)),
            bytemuck::cast_slice(mesh.position_data()),
        )?;
        let colors = match mesh.color_data() {
            Some(data) => Some(backend.upload_buffer(
                &BufferDesc::vertex(&format!("{}_colors", name)),
                bytemuck::cast_slice(data),
            )?),
            None => None,
        };
        let indices = match &mesh.indices {
            Some(indices) => Some(backend.upload_buffer(
                &BufferDesc::index(&format!("{}_indices", name)),
                bytemuck::cast_slice(indices.as_slice()),
            )?),
            None => None,
        };

        Ok(Self {
            program,
            positions,
            colors,
            indices,
            element_count: mesh.element_count() as u32,
            topology: mesh.topology,
        })
    }

    fn draw(
        &self,
        backend: &mut dyn RenderBackend,
        mvp: Mat4,
        state: DrawState,
        stats: &mut RenderStats,
    ) -> Result<()> {
        let call = DrawCall {
            program: self.program,
            positions: self.positions,
            colors: self.colors,
            mvp,
            state,
        };

        match (self.topology, self.indices) {
            (PrimitiveTopology::Triangles, Some(indices)) => {
                backend.draw_indexed(&call, indices, self.element_count)?;
                stats.triangles += self.element_count / 3;
            }
            (PrimitiveTopology::Lines, None) => {
                backend.draw_lines(&call, self.element_count)?;
                stats.line_segments += self.element_count / 2;
            }
            (topology, indices) => {
                engine_bail!("fv::SceneRenderer", error = Error::InvalidResource(format!(
                    "unsupported mesh layout: {:?}, indexed: {}",
                    topology, indices.is_some()
                )));
            }
        }
        stats.draw_calls += 1;
        Ok(())
    }
}

/// Draws the cube, grid, camera gizmo and scene-camera frustum
#[derive(Debug)]
pub struct SceneRenderer {
    cube: GpuMesh,
    gizmo: GpuMesh,
    grid: GpuMesh,
    frustum: GpuMesh,
}

impl SceneRenderer {
    /// Compile the scene programs and upload every scene object.
    ///
    /// `frustum` seeds the frustum vertex buffer; it is replaced every frame.
    pub fn new(backend: &mut dyn RenderBackend, frustum: &FrustumCorners) -> Result<Self> {
        let renderer = Self {
            cube: GpuMesh::upload(backend, &cube_program(), &cube_mesh())?,
            gizmo: GpuMesh::upload(backend, &gizmo_program(), &gizmo_mesh())?,
            grid: GpuMesh::upload(
                backend,
                &grid_program(),
                &grid_mesh(GRID_HALF_EXTENT, GRID_SPACING, GRID_HEIGHT),
            )?,
            frustum: GpuMesh::upload(backend, &frustum_program(), &frustum_mesh(frustum))?,
        };
        engine_info!("fv::SceneRenderer", "{} scene objects uploaded", 4);
        Ok(renderer)
    }

    /// Handle of the frustum position buffer, rewritten every frame
    pub fn frustum_buffer(&self) -> BufferKey {
        self.frustum.positions
    }

    /// Render one prepared frame.
    ///
    /// Objective mode: grid (blending off), cube, then the gizmo and the
    /// translucent frustum when the scene camera is shown. Projection mode:
    /// grid and cube only, both opaque.
    pub fn render(
        &self,
        backend: &mut dyn RenderBackend,
        frame: &FrameMatrices,
        target: &FrameTarget,
    ) -> Result<RenderStats> {
        let mut stats = RenderStats::default();

        backend.update_buffer(
            self.frustum.positions,
            bytemuck::cast_slice(&frame.frustum.to_vertex_data()),
        )?;

        backend.begin_frame(target)?;

        self.grid.draw(backend, frame.grid_mvp, DrawState::empty(), &mut stats)?;

        let cube_state = match frame.mode {
            CameraMode::Objective => DrawState::BLEND,
            CameraMode::Projection => DrawState::empty(),
        };
        self.cube.draw(backend, frame.cube_mvp, cube_state, &mut stats)?;

        if let Some(overlay) = &frame.overlay {
            self.gizmo.draw(backend, overlay.gizmo_mvp, DrawState::BLEND, &mut stats)?;
            self.frustum.draw(backend, overlay.frustum_mvp, DrawState::BLEND, &mut stats)?;
        }

        backend.end_frame()?;

        engine_debug!(
            "fv::SceneRenderer",
            "frame drawn: {} draw calls, {} triangles, {} line segments",
            stats.draw_calls, stats.triangles, stats.line_segments
        );
        Ok(stats)
    }
}

#[cfg(test)]
#[path = "scene_renderer_tests.rs"]
mod tests;
