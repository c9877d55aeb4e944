use std::rc::Rc;

use super::buffer::{BufferTarget, GpuBuffer};
use super::{GlApi, GlResult};

/// Index element as read by `draw_elements(.., UNSIGNED_INT, ..)`.
pub type Index = u32;

/// Driver enum matching [`Index`].
pub const INDEX_TYPE: u32 = glow::UNSIGNED_INT;

// GLuint is 32 bits wide on every platform the driver supports.
const _: () = assert!(std::mem::size_of::<Index>() == 4);

/// Static element index storage.
pub struct IndexBuffer<G: GlApi = glow::Context> {
    buffer: GpuBuffer<G>,
    count: usize,
}

impl<G: GlApi> IndexBuffer<G> {
    pub fn new(gl: &Rc<G>, indices: &[Index]) -> GlResult<Self> {
        let buffer = GpuBuffer::with_data(gl, BufferTarget::Index, bytemuck::cast_slice(indices))?;
        Ok(Self { buffer, count: indices.len() })
    }

    /// Number of indices (not bytes).
    #[inline]
    pub fn count(&self) -> usize {
        self.count
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
