/*!
# Frustum View

Math and state core of an interactive perspective-frustum viewer.

A unit cube sits on a red reference grid. A *scene camera*, driven by
control-panel sliders, looks at it, and its view frustum is drawn as a
translucent volume from a second, free-flying *objective camera*. The
user can switch to looking through the scene camera itself.

## Architecture

- **math**: perspective / look-at construction, cofactor 4x4 inversion,
  frustum corner extraction from an inverse view-projection
- **camera**: orientation + perspective cameras and the free-fly controller
- **scene**: scene state, typed slider controls, geometry, per-frame matrices
- **renderer**: `RenderBackend` trait, shader programs, headless
  `RecordingBackend`, `SceneRenderer`
- **viewer**: frame-stepped driver fed with window-independent input events

Window system and GPU API adapters implement `RenderBackend` and translate
their native events into `InputEvent`s.
*/

// Internal modules
mod error;
pub mod log;
pub mod math;
pub mod camera;
pub mod config;
pub mod input;
pub mod renderer;
pub mod scene;
pub mod viewer;

// Main fv namespace module
pub mod fv {
    // Error types
    pub use crate::error::{Error, Result};

    // Driver
    pub use crate::viewer::{TickOutcome, Viewer};
    pub use crate::config::ViewerConfig;

    // Logging sub-module (types only, macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, set_logger, reset_logger};
    }

    // Render sub-module with all rendering types
    pub mod render {
        pub use crate::renderer::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
