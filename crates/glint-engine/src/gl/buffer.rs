use std::rc::Rc;

use crate::gl_call;

use super::{GlApi, GlError, GlResult};

/// Binding category of a buffer object.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BufferTarget {
    /// Per-vertex attribute data (`ARRAY_BUFFER`).
    Vertex,
    /// Element indices (`ELEMENT_ARRAY_BUFFER`).
    Index,
}

impl BufferTarget {
    #[inline]
    pub fn to_gl(self) -> u32 {
        match self {
            BufferTarget::Vertex => glow::ARRAY_BUFFER,
            BufferTarget::Index => glow::ELEMENT_ARRAY_BUFFER,
        }
    }

    fn label(self) -> &'static str {
        match self {
            BufferTarget::Vertex => "vertex buffer",
            BufferTarget::Index => "index buffer",
        }
    }
}

/// Exclusive owner of one driver buffer handle.
///
/// Shared by [`VertexBuffer`](super::VertexBuffer) and
/// [`IndexBuffer`](super::IndexBuffer); not `Clone`, so the handle is released
/// exactly once.
pub(crate) struct GpuBuffer<G: GlApi> {
    gl: Rc<G>,
    id: G::Buffer,
    target: BufferTarget,
}

impl<G: GlApi> GpuBuffer<G> {
    /// Allocates a handle and uploads `bytes` as static data.
    pub(crate) fn with_data(gl: &Rc<G>, target: BufferTarget, bytes: &[u8]) -> GlResult<Self> {
        let gl = Rc::clone(gl);
        let id = gl_call!(gl, create_buffer())?.map_err(|reason| GlError::Allocation {
            what: target.label(),
            reason,
        })?;

        // Owned from here on; an upload failure below still releases the handle.
        let buffer = Self { gl, id, target };

        buffer.bind()?;
        gl_call!(buffer.gl, buffer_data(target.to_gl(), bytes, glow::STATIC_DRAW))?;

        log::trace!("{} {:?}: uploaded {} bytes", target.label(), id, bytes.len());
        Ok(buffer)
    }

    #[inline]
    pub(crate) fn id(&self) -> G::Buffer {
        self.id
    }

    pub(crate) fn bind(&self) -> GlResult<()> {
        gl_call!(self.gl, bind_buffer(self.target.to_gl(), Some(self.id)))
    }

    pub(crate) fn unbind(&self) -> GlResult<()> {
        gl_call!(self.gl, bind_buffer(self.target.to_gl(), None))
    }
}

impl<G: GlApi> Drop for GpuBuffer<G> {
    fn drop(&mut self) {
        // Failures are already logged by the shim; nothing else to do in drop.
        let _ = gl_call!(self.gl, delete_buffer(self.id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::mock::{Call, RecordingGl};

    #[test]
    fn upload_binds_then_copies_static_data() {
        let gl = Rc::new(RecordingGl::new());
        let buffer = GpuBuffer::with_data(&gl, BufferTarget::Vertex, &[1, 2, 3]).unwrap();

        assert_eq!(
            gl.calls(),
            vec![
                Call::CreateBuffer(buffer.id()),
                Call::BindBuffer { target: glow::ARRAY_BUFFER, buffer: Some(buffer.id()) },
                Call::BufferData {
                    target: glow::ARRAY_BUFFER,
                    data: vec![1, 2, 3],
                    usage: glow::STATIC_DRAW,
                },
            ]
        );
    }

    #[test]
    fn failed_upload_releases_the_handle() {
        let gl = Rc::new(RecordingGl::new());
        gl.fail_call_after(1, glow::OUT_OF_MEMORY); // the bind after allocation

        let result = GpuBuffer::with_data(&gl, BufferTarget::Index, &[0; 4]);

        assert!(matches!(result, Err(GlError::Driver { code: glow::OUT_OF_MEMORY, .. })));
        assert_eq!(gl.calls().last(), Some(&Call::DeleteBuffer(1)));
        assert!(!gl.calls().iter().any(|c| matches!(c, Call::BufferData { .. })));
    }

    #[test]
    fn bind_and_unbind_use_the_buffer_category() {
        let gl = Rc::new(RecordingGl::new());
        let buffer = GpuBuffer::with_data(&gl, BufferTarget::Index, &[0; 4]).unwrap();
        gl.clear_calls();

        buffer.bind().unwrap();
        buffer.unbind().unwrap();

        assert_eq!(
            gl.calls(),
            vec![
                Call::BindBuffer { target: glow::ELEMENT_ARRAY_BUFFER, buffer: Some(buffer.id()) },
                Call::BindBuffer { target: glow::ELEMENT_ARRAY_BUFFER, buffer: None },
            ]
        );
    }

    #[test]
    fn drop_deletes_exactly_once() {
        let gl = Rc::new(RecordingGl::new());
        let buffer = GpuBuffer::with_data(&gl, BufferTarget::Vertex, &[0; 8]).unwrap();
        let id = buffer.id();
        drop(buffer);

        let deletes = gl
            .calls()
            .into_iter()
            .filter(|c| *c == Call::DeleteBuffer(id))
            .count();
        assert_eq!(deletes, 1);
    }
}
