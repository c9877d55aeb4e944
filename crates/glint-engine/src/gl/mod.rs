//! Thin RAII layer over the OpenGL driver.
//!
//! This module is responsible for:
//! - the driver boundary (`GlApi`, implemented for `glow::Context`)
//! - the error-checking shim (`gl_call!`, `clear_errors`, `log_call`)
//! - vertex / index buffers, vertex layouts and vertex arrays
//!
//! Every wrapper owns exactly one driver handle and holds the context through
//! an `Rc`. That keeps wrappers on the thread owning the context and lets
//! `Drop` release the handle. Binding state is the driver's: the last `bind`
//! wins and nothing restores a previous binding.

mod api;
mod buffer;
mod error;
mod index_buffer;
mod layout;
mod vertex_array;
mod vertex_buffer;

#[cfg(test)]
pub(crate) mod mock;

pub use api::GlApi;
pub use buffer::BufferTarget;
pub use error::{clear_errors, error_name, log_call, GlError, GlResult};
pub(crate) use error::gl_int;
pub use index_buffer::{Index, IndexBuffer, INDEX_TYPE};
pub use layout::{VertexAttribType, VertexBufferElement, VertexBufferLayout};
pub use vertex_array::{AttributeBinding, VertexArray};
pub use vertex_buffer::VertexBuffer;
