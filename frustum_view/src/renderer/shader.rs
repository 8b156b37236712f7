/// Shader program descriptors and the GLSL ES sources used by the scene.

/// Shader stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment shader
    Fragment,
}

/// Descriptor for compiling a program (vertex + fragment pair)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramDesc {
    /// Unique program name
    pub name: String,
    /// Vertex stage source
    pub vertex_source: String,
    /// Fragment stage source
    pub fragment_source: String,
}

impl ProgramDesc {
    pub fn new(name: &str, vertex_source: &str, fragment_source: &str) -> Self {
        Self {
            name: name.to_string(),
            vertex_source: vertex_source.to_string(),
            fragment_source: fragment_source.to_string(),
        }
    }

    /// Source for a given stage
    pub fn source(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex_source,
            ShaderStage::Fragment => &self.fragment_source,
        }
    }
}

/// Name of the model-view-projection uniform every vertex stage declares.
pub const MVP_UNIFORM: &str = "mvp";
/// Position attribute (vec3 data, w = 1)
pub const POSITION_ATTRIBUTE: &str = "a_position";
/// Color attribute (rgba)
pub const COLOR_ATTRIBUTE: &str = "a_color";

/// Shared vertex stage: transforms by `mvp` and forwards the vertex color.
pub const COLOR_VERTEX_SHADER: &str = "\
precision mediump float;
uniform mat4 mvp;
attribute vec4 a_position;
attribute vec4 a_color;
varying vec4 v_color;
void main()
{
    gl_Position = mvp * a_position;
    v_color = a_color;
}
";

/// Interpolated vertex color (cube, frustum)
pub const VERTEX_COLOR_FRAGMENT_SHADER: &str = "\
precision mediump float;
varying vec4 v_color;
void main()
{
    gl_FragColor = v_color;
}
";

/// Solid red (grid)
pub const GRID_FRAGMENT_SHADER: &str = "\
precision mediump float;
varying vec4 v_color;
void main()
{
    gl_FragColor = vec4(1.0, 0.0, 0.0, 1.0);
}
";

/// Solid gray (camera gizmo)
pub const GIZMO_FRAGMENT_SHADER: &str = "\
precision mediump float;
varying vec4 v_color;
void main()
{
    gl_FragColor = vec4(0.5, 0.5, 0.5, 1.0);
}
";

pub fn cube_program() -> ProgramDesc {
    ProgramDesc::new("cube", COLOR_VERTEX_SHADER, VERTEX_COLOR_FRAGMENT_SHADER)
}

pub fn gizmo_program() -> ProgramDesc {
    ProgramDesc::new("gizmo", COLOR_VERTEX_SHADER, GIZMO_FRAGMENT_SHADER)
}

pub fn grid_program() -> ProgramDesc {
    ProgramDesc::new("grid", COLOR_VERTEX_SHADER, GRID_FRAGMENT_SHADER)
}

pub fn frustum_program() -> ProgramDesc {
    ProgramDesc::new("frustum", COLOR_VERTEX_SHADER, VERTEX_COLOR_FRAGMENT_SHADER)
}
