/// Viewer - frame-stepped driver tying input, scene state and rendering
///
/// A window adapter owns the `Viewer` and a `RenderBackend`, and calls
/// `tick` once per frame with the input events collected since the last
/// frame. Everything runs on the caller's thread.
///
/// # Example
///
/// ```no_run
/// use frustum_view::viewer::{TickOutcome, Viewer};
/// use frustum_view::config::ViewerConfig;
/// use frustum_view::input::{InputEvent, Key};
/// use frustum_view::renderer::RecordingBackend;
///
/// let mut backend = RecordingBackend::new();
/// let mut viewer = Viewer::new(ViewerConfig::default(), &mut backend)?;
///
/// let outcome = viewer.tick(&mut backend, &[InputEvent::KeyPressed(Key::W)])?;
/// assert!(matches!(outcome, TickOutcome::Rendered(_)));
/// # Ok::<(), frustum_view::fv::Error>(())
/// ```

use crate::config::ViewerConfig;
use crate::error::Result;
use crate::input::{InputEvent, InputOutcome};
use crate::renderer::{FrameTarget, RenderBackend, RenderStats, SceneRenderer};
use crate::scene::{FrameMatrices, SceneState};
use crate::{engine_info, engine_trace};

/// Result of one `Viewer::tick`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Frame drawn
    Rendered(RenderStats),
    /// Quit requested; nothing was drawn
    Quit,
}

/// Interactive frustum viewer
#[derive(Debug)]
pub struct Viewer {
    config: ViewerConfig,
    state: SceneState,
    renderer: SceneRenderer,
    viewport: (u32, u32),
    frame_index: u64,
    last_frame: Option<FrameMatrices>,
}

impl Viewer {
    /// Validate the configuration, build the initial scene state and upload
    /// the scene objects to `backend`.
    pub fn new(config: ViewerConfig, backend: &mut dyn RenderBackend) -> Result<Self> {
        config.validate()?;

        let state = SceneState::new(&config);
        let frustum = state.scene_camera.frustum_corners()?;
        let renderer = SceneRenderer::new(backend, &frustum)?;

        engine_info!(
            "fv::Viewer",
            "Viewer initialized ({}x{})",
            config.window_width, config.window_height
        );

        Ok(Self {
            viewport: (config.window_width, config.window_height),
            config,
            state,
            renderer,
            frame_index: 0,
            last_frame: None,
        })
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    /// Mutable scene state, for control-panel edits between ticks
    pub fn state_mut(&mut self) -> &mut SceneState {
        &mut self.state
    }

    pub fn renderer(&self) -> &SceneRenderer {
        &self.renderer
    }

    /// Viewport size in pixels
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Window resized. Zero sizes (minimized windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        self.viewport = (width, height);
    }

    /// Number of frames drawn so far
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Matrices of the last drawn frame
    pub fn last_frame(&self) -> Option<&FrameMatrices> {
        self.last_frame.as_ref()
    }

    /// Run one frame: apply `events` in order, then prepare and draw.
    ///
    /// Stops at the first quit event without drawing.
    pub fn tick(&mut self, backend: &mut dyn RenderBackend, events: &[InputEvent]) -> Result<TickOutcome> {
        for event in events {
            if self.state.handle_input(event) == InputOutcome::Quit {
                engine_info!("fv::Viewer", "Quit after {} frames", self.frame_index);
                return Ok(TickOutcome::Quit);
            }
        }

        let frame = self.state.prepare_frame()?;
        let target = FrameTarget {
            width: self.viewport.0,
            height: self.viewport.1,
            clear_color: self.config.clear_color,
        };
        let stats = self.renderer.render(backend, &frame, &target)?;

        self.last_frame = Some(frame);
        self.frame_index += 1;
        engine_trace!("fv::Viewer", "Frame {} done", self.frame_index);

        Ok(TickOutcome::Rendered(stats))
    }
}

#[cfg(test)]
#[path = "viewer_tests.rs"]
mod tests;
