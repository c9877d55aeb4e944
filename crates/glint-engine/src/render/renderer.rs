use std::rc::Rc;

use crate::gl::{gl_int, GlApi, GlResult, IndexBuffer, VertexArray, INDEX_TYPE};
use crate::gl_call;
use crate::paint::Color;
use crate::shader::ShaderProgram;

/// Issues frame-level commands: clear, viewport and indexed draws.
pub struct Renderer<G: GlApi = glow::Context> {
    gl: Rc<G>,
}

impl<G: GlApi> Renderer<G> {
    pub fn new(gl: &Rc<G>) -> Self {
        Self { gl: Rc::clone(gl) }
    }

    pub fn clear(&self, color: Color) -> GlResult<()> {
        gl_call!(self.gl, clear_color(color.r, color.g, color.b, color.a))?;
        gl_call!(self.gl, clear(glow::COLOR_BUFFER_BIT))
    }

    pub fn set_viewport(&self, width: u32, height: u32) -> GlResult<()> {
        let width = gl_int("viewport width", width.into())?;
        let height = gl_int("viewport height", height.into())?;
        gl_call!(self.gl, viewport(0, 0, width, height))
    }

    /// Binds `program`, `va` and `ib`, then draws every index as triangles.
    pub fn draw(
        &self,
        va: &VertexArray<G>,
        ib: &IndexBuffer<G>,
        program: &ShaderProgram<G>,
    ) -> GlResult<()> {
        let count = gl_int("index count", ib.count() as u64)?;

        program.bind()?;
        va.bind()?;
        ib.bind()?;

        gl_call!(self.gl, draw_elements(glow::TRIANGLES, count, INDEX_TYPE, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gl::mock::{Call, RecordingGl};
    use crate::gl::{GlError, VertexBuffer, VertexBufferLayout};
    use crate::shader::ShaderProgramSource;

    #[test]
    fn clear_sets_color_then_clears() {
        let gl = Rc::new(RecordingGl::new());
        Renderer::new(&gl).clear(Color::new(0.1, 0.2, 0.3, 1.0)).unwrap();

        assert_eq!(
            gl.calls(),
            vec![Call::ClearColor([0.1, 0.2, 0.3, 1.0]), Call::Clear(glow::COLOR_BUFFER_BIT)]
        );
    }

    #[test]
    fn draw_binds_everything_then_issues_one_indexed_draw() {
        let gl = Rc::new(RecordingGl::new());
        let program = ShaderProgram::new(
            &gl,
            &ShaderProgramSource::parse_str("#shader vertex\nv\n#shader fragment\nf\n"),
        )
        .unwrap();
        let vb = VertexBuffer::new(&gl, &[0.0f32; 8]).unwrap();
        let mut va = VertexArray::new(&gl).unwrap();
        let mut layout = VertexBufferLayout::new();
        layout.push_f32(2);
        va.add_buffer(&vb, &layout).unwrap();
        let ib = IndexBuffer::new(&gl, &[0, 1, 2, 2, 3, 0]).unwrap();
        gl.clear_calls();

        Renderer::new(&gl).draw(&va, &ib, &program).unwrap();

        assert_eq!(
            gl.calls(),
            vec![
                Call::UseProgram(Some(program.id())),
                Call::BindVertexArray(Some(va.id())),
                Call::BindBuffer { target: glow::ELEMENT_ARRAY_BUFFER, buffer: Some(ib.id()) },
                Call::DrawElements {
                    mode: glow::TRIANGLES,
                    count: 6,
                    element_type: glow::UNSIGNED_INT,
                    offset: 0,
                },
            ]
        );
    }

    #[test]
    fn draw_stops_at_the_first_failing_bind() {
        let gl = Rc::new(RecordingGl::new());
        let program = ShaderProgram::new(&gl, &ShaderProgramSource::default()).unwrap();
        let va = VertexArray::new(&gl).unwrap();
        let ib = IndexBuffer::new(&gl, &[0, 1, 2]).unwrap();
        gl.clear_calls();

        gl.fail_next_call(glow::INVALID_OPERATION);
        let err = Renderer::new(&gl).draw(&va, &ib, &program).unwrap_err();

        assert!(matches!(err, GlError::Driver { code: glow::INVALID_OPERATION, .. }));
        assert_eq!(gl.calls(), vec![Call::UseProgram(Some(program.id()))]);
    }

    #[test]
    fn viewport_covers_the_whole_surface() {
        let gl = Rc::new(RecordingGl::new());
        Renderer::new(&gl).set_viewport(640, 480).unwrap();
        assert_eq!(gl.calls(), vec![Call::Viewport { x: 0, y: 0, width: 640, height: 480 }]);
    }

    #[test]
    fn viewport_past_i32_range_is_rejected() {
        let gl = Rc::new(RecordingGl::new());
        let err = Renderer::new(&gl).set_viewport(u32::MAX, 480).unwrap_err();

        assert_eq!(err, GlError::OutOfRange { what: "viewport width", value: u32::MAX as u64 });
        assert!(gl.calls().is_empty());
    }
}
