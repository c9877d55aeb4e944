use std::rc::Rc;

use bytemuck::Pod;

use super::buffer::{BufferTarget, GpuBuffer};
use super::{GlApi, GlResult};

/// Static vertex attribute storage.
///
/// The data is copied to device memory once at construction; there is no
/// update path. How the bytes are read is described separately by a
/// [`VertexBufferLayout`](super::VertexBufferLayout).
pub struct VertexBuffer<G: GlApi = glow::Context> {
    buffer: GpuBuffer<G>,
    size: usize,
}

impl<G: GlApi> VertexBuffer<G> {
    pub fn new<T: Pod>(gl: &Rc<G>, data: &[T]) -> GlResult<Self> {
        let bytes: &[u8] = bytemuck::cast_slice(data);
        let buffer = GpuBuffer::with_data(gl, BufferTarget::Vertex, bytes)?;
        Ok(Self { buffer, size: bytes.len() })
    }

    /// Uploaded length in bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn id(&self) -> G::Buffer {
        self.buffer.id()
    }

    pub fn bind(&self) -> GlResult<()> {
        self.buffer.bind()
    }

    pub fn unbind(&self) -> GlResult<()> {
        self.buffer.unbind()
    }
}
