use std::rc::Rc;

use crate::gl_call;

use super::{gl_int, GlApi, GlError, GlResult, VertexAttribType, VertexBuffer, VertexBufferLayout};

/// One attribute pointer registered by [`VertexArray::add_buffer`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AttributeBinding {
    pub index: u32,
    pub ty: VertexAttribType,
    pub count: u32,
    pub normalized: bool,
    pub stride: u32,
    pub offset: u32,
}

/// Driver-side table mapping attribute slots to vertex buffers.
///
/// Once bound, the array fully describes how every attribute of every vertex
/// is read; no other setup is needed before a draw call. Buffers are not
/// owned: the driver keeps them referenced after they are added.
pub struct VertexArray<G: GlApi = glow::Context> {
    gl: Rc<G>,
    id: G::VertexArray,
    attributes: Vec<AttributeBinding>,
}

impl<G: GlApi> VertexArray<G> {
    pub fn new(gl: &Rc<G>) -> GlResult<Self> {
        let gl = Rc::clone(gl);
        let id = gl_call!(gl, create_vertex_array())?.map_err(|reason| GlError::Allocation {
            what: "vertex array",
            reason,
        })?;

        Ok(Self { gl, id, attributes: Vec::new() })
    }

    /// Registers `layout` for the vertices stored in `vb`.
    ///
    /// Every call numbers slots from 0 in push order, so adding a second buffer
    /// re-points the low slots at it. Leaves this array and `vb` bound.
    pub fn add_buffer(&mut self, vb: &VertexBuffer<G>, layout: &VertexBufferLayout) -> GlResult<()> {
        let stride = layout.stride();
        let gl_stride = gl_int("stride", stride.into())?;

        self.bind()?;
        vb.bind()?;

        let mut offset = 0u32;

        for (index, element) in layout.elements().iter().enumerate() {
            let index = index as u32;
            let count = gl_int("component count", element.count.into())?;
            let gl_offset = gl_int("attribute offset", offset.into())?;

            gl_call!(self.gl, enable_vertex_attrib_array(index))?;
            gl_call!(
                self.gl,
                vertex_attrib_pointer(
                    index,
                    count,
                    element.ty.to_gl(),
                    element.normalized,
                    gl_stride,
                    gl_offset
                )
            )?;

            self.attributes.push(AttributeBinding {
                index,
                ty: element.ty,
                count: element.count,
                normalized: element.normalized,
                stride,
                offset,
            });

            offset = offset.saturating_add(element.size());
        }

        log::debug!(
            "vertex array {:?}: {} attribute(s) from buffer {:?}, stride {stride}",
            self.id,
            layout.elements().len(),
            vb.id()
        );
        Ok(())
    }

    /// Every attribute registered so far, in registration order.
    #[inline]
    pub fn attributes(&self) -> &[AttributeBinding] {
        &self.attributes
    }

    #[inline]
    pub fn id(&self) -> G::VertexArray {
        self.id
    }

    pub fn bind(&self) -> GlResult<()> {
        gl_call!(self.gl, bind_vertex_array(Some(self.id)))
    }

    pub fn unbind(&self) -> GlResult<()> {
        gl_call!(self.gl, bind_vertex_array(None))
    }
}

impl<G: GlApi> Drop for VertexArray<G> {
    fn drop(&mut self) {
        let _ = gl_call!(self.gl, delete_vertex_array(self.id));
    }
}
