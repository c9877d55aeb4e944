use std::fmt;
use std::rc::Rc;

use crate::gl::{GlApi, GlError, GlResult};
use crate::gl_call;

use super::ShaderProgramSource;

/// Pipeline stage of a shader object.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    #[inline]
    pub fn to_gl(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        })
    }
}

/// Stage object that only lives until the program is linked.
struct StageObject<'a, G: GlApi> {
    gl: &'a G,
    id: G::Shader,
}

impl<'a, G: GlApi> StageObject<'a, G> {
    fn compile(gl: &'a G, stage: ShaderStage, source: &str) -> GlResult<Self> {
        let id = gl_call!(gl, create_shader(stage.to_gl()))?.map_err(|reason| {
            GlError::Allocation { what: "shader object", reason }
        })?;
        let object = Self { gl, id };

        gl_call!(gl, shader_source(id, source))?;
        gl_call!(gl, compile_shader(id))?;

        if !gl.shader_compile_status(id) {
            let log = gl.shader_info_log(id);
            log::error!("failed to compile {stage} shader:\n{log}");
            return Err(GlError::Compile { stage, log });
        }

        Ok(object)
    }
}

impl<G: GlApi> Drop for StageObject<'_, G> {
    fn drop(&mut self) {
        let _ = gl_call!(self.gl, delete_shader(self.id));
    }
}

/// Linked vertex + fragment program.
pub struct ShaderProgram<G: GlApi = glow::Context> {
    gl: Rc<G>,
    id: G::Program,
}

impl<G: GlApi> ShaderProgram<G> {
    /// Compiles both stages of `source`, links and validates them.
    ///
    /// Stage objects are deleted once linking finishes, whatever the outcome.
    pub fn new(gl: &Rc<G>, source: &ShaderProgramSource) -> GlResult<Self> {
        let gl = Rc::clone(gl);

        let program = gl_call!(gl, create_program())?.map_err(|reason| GlError::Allocation {
            what: "shader program",
            reason,
        })?;
        let program = Self { gl, id: program };

        {
            let gl: &G = &program.gl;
            let vs = StageObject::compile(gl, ShaderStage::Vertex, &source.vertex)?;
            let fs = StageObject::compile(gl, ShaderStage::Fragment, &source.fragment)?;

            gl_call!(gl, attach_shader(program.id, vs.id))?;
            gl_call!(gl, attach_shader(program.id, fs.id))?;
            gl_call!(gl, link_program(program.id))?;

            if !gl.program_link_status(program.id) {
                let log = gl.program_info_log(program.id);
                log::error!("failed to link shader program:\n{log}");
                return Err(GlError::Link(log));
            }

            gl_call!(gl, validate_program(program.id))?;
        }

        log::debug!("shader program {:?} linked", program.id);
        Ok(program)
    }

    #[inline]
    pub fn id(&self) -> G::Program {
        self.id
    }

    pub fn bind(&self) -> GlResult<()> {
        gl_call!(self.gl, use_program(Some(self.id)))
    }

    pub fn unbind(&self) -> GlResult<()> {
        gl_call!(self.gl, use_program(None))
    }

    pub fn uniform_location(&self, name: &str) -> GlResult<G::UniformLocation> {
        gl_call!(self.gl, uniform_location(self.id, name))?
            .ok_or_else(|| GlError::UniformNotFound(name.to_string()))
    }

    /// Sets a `vec4` uniform. The program must be bound.
    pub fn set_uniform_4f(&self, location: &G::UniformLocation, value: [f32; 4]) -> GlResult<()> {
        gl_call!(self.gl, uniform_4_f32(location, value))
    }
}

impl<G: GlApi> Drop for ShaderProgram<G> {
    fn drop(&mut self) {
        let _ = gl_call!(self.gl, delete_program(self.id));
    }
}
