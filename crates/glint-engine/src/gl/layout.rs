/// Scalar category of one vertex attribute component.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum VertexAttribType {
    Float,
    UnsignedInt,
    /// Read as a normalized `[0, 1]` value (colors packed as bytes).
    UnsignedByte,
}

struct AttribTypeInfo {
    size: u32,
    normalized: bool,
    gl_type: u32,
}

impl VertexAttribType {
    const fn info(self) -> AttribTypeInfo {
        match self {
            VertexAttribType::Float => AttribTypeInfo {
                size: 4,
                normalized: false,
                gl_type: glow::FLOAT,
            },
            VertexAttribType::UnsignedInt => AttribTypeInfo {
                size: 4,
                normalized: false,
                gl_type: glow::UNSIGNED_INT,
            },
            VertexAttribType::UnsignedByte => AttribTypeInfo {
                size: 1,
                normalized: true,
                gl_type: glow::UNSIGNED_BYTE,
            },
        }
    }

    /// Byte size of one component.
    #[inline]
    pub const fn size(self) -> u32 {
        self.info().size
    }

    #[inline]
    pub const fn normalized(self) -> bool {
        self.info().normalized
    }

    #[inline]
    pub const fn to_gl(self) -> u32 {
        self.info().gl_type
    }
}

/// One attribute of a vertex: `count` components of `ty`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VertexBufferElement {
    pub ty: VertexAttribType,
    pub count: u32,
    pub normalized: bool,
}

impl VertexBufferElement {
    /// Total bytes this attribute occupies within one vertex.
    ///
    /// Saturates at `u32::MAX`; such a size is rejected when the layout is
    /// registered with a vertex array.
    #[inline]
    pub fn size(&self) -> u32 {
        self.count.saturating_mul(self.ty.size())
    }
}

/// Append-only description of how one vertex is laid out in a buffer.
///
/// Attributes are bound to consecutive slots in push order and packed without
/// padding, so `stride` is the sum of every element's size (saturating).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VertexBufferLayout {
    elements: Vec<VertexBufferElement>,
    stride: u32,
}

impl VertexBufferLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ty: VertexAttribType, count: u32) -> &mut Self {
        let element = VertexBufferElement {
            ty,
            count,
            normalized: ty.normalized(),
        };
        self.stride = self.stride.saturating_add(element.size());
        self.elements.push(element);
        self
    }

    pub fn push_f32(&mut self, count: u32) -> &mut Self {
        self.push(VertexAttribType::Float, count)
    }

    pub fn push_u32(&mut self, count: u32) -> &mut Self {
        self.push(VertexAttribType::UnsignedInt, count)
    }

    pub fn push_u8(&mut self, count: u32) -> &mut Self {
        self.push(VertexAttribType::UnsignedByte, count)
    }

    #[inline]
    pub fn stride(&self) -> u32 {
        self.stride
    }

    #[inline]
    pub fn elements(&self) -> &[VertexBufferElement] {
        &self.elements
    }
}
