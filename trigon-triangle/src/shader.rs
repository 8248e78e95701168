use glow::HasContext;
use trigon_core::error::{RendererError, ShaderStage};

pub(crate) const VERTEX_SOURCE: &str = r#"
attribute highp vec4 vertex;
attribute lowp vec3 color;
varying lowp vec3 linear_color;
uniform mediump mat4 pmv_matrix;
void main()
{
  gl_Position = pmv_matrix * vertex;
  linear_color = color;
}
"#;

pub(crate) const FRAGMENT_SOURCE: &str = r#"
varying lowp vec3 linear_color;
uniform lowp float fade;
void main(void)
{
  gl_FragColor = vec4(linear_color.x, linear_color.y, linear_color.z, fade);
}
"#;

/// A linked program and the shaders it was built from.
#[derive(Debug)]
pub(crate) struct Program {
    pub program: glow::NativeProgram,
    pub vertex: glow::NativeShader,
    pub fragment: glow::NativeShader,
}

impl Program {
    /// # Safety
    ///
    /// `gl` must belong to the context current on this thread.
    pub unsafe fn build(gl: &glow::Context) -> Result<Program, RendererError> {
        let vertex = compile(gl, ShaderStage::Vertex, VERTEX_SOURCE)?;
        let fragment = match compile(gl, ShaderStage::Fragment, FRAGMENT_SOURCE) {
            Ok(fragment) => fragment,
            Err(err) => {
                gl.delete_shader(vertex);
                return Err(err);
            },
        };

        let program = match gl.create_program() {
            Ok(program) => program,
            Err(err) => {
                gl.delete_shader(vertex);
                gl.delete_shader(fragment);
                return Err(RendererError::Gl(err));
            },
        };
        gl.attach_shader(program, fragment);
        gl.attach_shader(program, vertex);
        gl.link_program(program);

        if !gl.get_program_link_status(program) {
            let log = gl.get_program_info_log(program);
            gl.delete_program(program);
            gl.delete_shader(vertex);
            gl.delete_shader(fragment);
            return Err(RendererError::Link { log });
        }

        Ok(Program { program, vertex, fragment })
    }

    /// # Safety
    ///
    /// `gl` must belong to the context the program was built on, current on this thread.
    pub unsafe fn delete(self, gl: &glow::Context) {
        gl.detach_shader(self.program, self.vertex);
        gl.detach_shader(self.program, self.fragment);
        gl.delete_shader(self.vertex);
        gl.delete_shader(self.fragment);
        gl.delete_program(self.program);
    }
}

unsafe fn compile(
    gl: &glow::Context,
    stage: ShaderStage,
    source: &str,
) -> Result<glow::NativeShader, RendererError> {
    let kind = match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    };
    let shader = gl.create_shader(kind).map_err(RendererError::Gl)?;
    gl.shader_source(shader, source);
    gl.compile_shader(shader);

    if !gl.get_shader_compile_status(shader) {
        let log = gl.get_shader_info_log(shader);
        gl.delete_shader(shader);
        return Err(RendererError::Shader { stage, log });
    }
    Ok(shader)
}
