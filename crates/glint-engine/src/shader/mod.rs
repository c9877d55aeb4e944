//! Shader resources.
//!
//! - `source`: splits a `#shader`-tagged text resource into per-stage sources
//! - `program`: compiles and links those sources into a program object

mod program;
mod source;

pub use program::{ShaderProgram, ShaderStage};
pub use source::{parse_shader, ShaderProgramSource};
