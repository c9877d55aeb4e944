use thiserror::Error;

use crate::shader::ShaderStage;

use super::GlApi;

/// Upper bound on codes drained by [`clear_errors`].
///
/// A lost context may keep reporting `CONTEXT_LOST`; the drain must still end.
const MAX_DRAINED_ERRORS: usize = 64;

/// Errors raised by the GL wrapper layer.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GlError {
    #[error("[OpenGL Error] ({code:#06x} {name}): {call} {file}:{line}", name = code_name(.code))]
    Driver {
        code: u32,
        call: &'static str,
        file: &'static str,
        line: u32,
    },
    #[error("failed to allocate {what}: {reason}")]
    Allocation { what: &'static str, reason: String },
    #[error("failed to compile {stage} shader: {log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("failed to link shader program: {0}")]
    Link(String),
    #[error("uniform `{0}` not found in program")]
    UniformNotFound(String),
    #[error("{what} {value} exceeds the driver's integer range")]
    OutOfRange { what: &'static str, value: u64 },
}

pub type GlResult<T> = Result<T, GlError>;

fn code_name(code: &u32) -> &'static str {
    error_name(*code)
}

/// Converts a count, size or offset into the driver's `GLint`/`GLsizei`.
pub(crate) fn gl_int(what: &'static str, value: u64) -> GlResult<i32> {
    i32::try_from(value).map_err(|_| GlError::OutOfRange { what, value })
}

/// Drains every pending code from the driver's error queue.
pub fn clear_errors<G: GlApi + ?Sized>(gl: &G) {
    for _ in 0..MAX_DRAINED_ERRORS {
        if gl.get_error() == glow::NO_ERROR {
            return;
        }
    }
    log::warn!("error queue still not empty after {MAX_DRAINED_ERRORS} reads; context lost?");
}

/// Reads the error queue once and reports a raised code against `call`.
pub fn log_call<G: GlApi + ?Sized>(
    gl: &G,
    call: &'static str,
    file: &'static str,
    line: u32,
) -> GlResult<()> {
    let code = gl.get_error();
    if code == glow::NO_ERROR {
        return Ok(());
    }

    let err = GlError::Driver { code, call, file, line };
    log::error!("{err}");
    Err(err)
}

/// Returns the symbolic name of a driver error code.
pub fn error_name(code: u32) -> &'static str {
    match code {
        glow::NO_ERROR => "GL_NO_ERROR",
        glow::INVALID_ENUM => "GL_INVALID_ENUM",
        glow::INVALID_VALUE => "GL_INVALID_VALUE",
        glow::INVALID_OPERATION => "GL_INVALID_OPERATION",
        glow::STACK_OVERFLOW => "GL_STACK_OVERFLOW",
        glow::STACK_UNDERFLOW => "GL_STACK_UNDERFLOW",
        glow::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        glow::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        glow::CONTEXT_LOST => "GL_CONTEXT_LOST",
        _ => "unknown",
    }
}

/// Runs one driver call between [`clear_errors`] and [`log_call`].
///
/// `gl` must deref once to the [`GlApi`] implementation (an `Rc<G>` or a
/// `&G`). Evaluates to `GlResult<T>` where `T` is the call's return value:
///
/// ```ignore
/// gl_call!(self.gl, bind_buffer(glow::ARRAY_BUFFER, None))?;
/// let id = gl_call!(gl, create_buffer())?;
/// ```
#[macro_export]
macro_rules! gl_call {
    ($gl:expr, $method:ident ( $($arg:expr),* $(,)? )) => {{
        let __gl = &*$gl;
        $crate::gl::clear_errors(__gl);
        let __value = $crate::gl::GlApi::$method(__gl, $($arg),*);
        $crate::gl::log_call(__gl, stringify!($method($($arg),*)), file!(), line!())
            .map(|()| __value)
    }};
}
