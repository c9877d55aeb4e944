//! Glint engine crate.
//!
//! This crate owns the platform + OpenGL runtime pieces used by the demo:
//! RAII wrappers for driver objects, the error-checking shim, the shader
//! resource splitter and a single-window event loop.

pub mod core;
pub mod device;
pub mod gl;
pub mod logging;
pub mod paint;
pub mod render;
pub mod shader;
pub mod time;
pub mod window;
