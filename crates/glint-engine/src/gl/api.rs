use std::fmt::Debug;

use glow::HasContext;

/// Driver boundary used by every GL wrapper in this crate.
///
/// Methods map one-to-one onto driver entry points. Handles are opaque; each
/// wrapper owns exactly one of them and releases it on drop.
///
/// Implementations assume the context is current on the calling thread.
/// Wrappers hold the implementation behind an `Rc`, which keeps them on that
/// thread.
pub trait GlApi {
    type Buffer: Copy + Debug;
    type VertexArray: Copy + Debug;
    type Shader: Copy + Debug;
    type Program: Copy + Debug;
    type UniformLocation: Debug;

    /// Pops one code from the driver's error queue (`NO_ERROR` when empty).
    fn get_error(&self) -> u32;

    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    fn delete_buffer(&self, buffer: Self::Buffer);
    fn bind_buffer(&self, target: u32, buffer: Option<Self::Buffer>);
    fn buffer_data(&self, target: u32, data: &[u8], usage: u32);

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    fn delete_vertex_array(&self, array: Self::VertexArray);
    fn bind_vertex_array(&self, array: Option<Self::VertexArray>);
    fn enable_vertex_attrib_array(&self, index: u32);
    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    );

    fn draw_elements(&self, mode: u32, count: i32, element_type: u32, offset: i32);
    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32);
    fn clear(&self, mask: u32);
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);

    fn create_shader(&self, shader_type: u32) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn validate_program(&self, program: Self::Program);
    fn program_info_log(&self, program: Self::Program) -> String;
    fn use_program(&self, program: Option<Self::Program>);
    fn delete_program(&self, program: Self::Program);

    fn uniform_location(&self, program: Self::Program, name: &str)
        -> Option<Self::UniformLocation>;
    fn uniform_4_f32(&self, location: &Self::UniformLocation, value: [f32; 4]);

    /// Reads a driver string such as `VERSION` or `RENDERER`.
    fn parameter_string(&self, name: u32) -> String;
}

// SAFETY (all methods below): `glow` marks every entry point unsafe because the
// caller must hold a current context and pass handles created by it. Handles
// only reach these methods through the owning wrappers, which were created
// against the same `Rc<glow::Context>`.
impl GlApi for glow::Context {
    type Buffer = glow::Buffer;
    type VertexArray = glow::VertexArray;
    type Shader = glow::Shader;
    type Program = glow::Program;
    type UniformLocation = glow::UniformLocation;

    fn get_error(&self) -> u32 {
        unsafe { HasContext::get_error(self) }
    }

    fn create_buffer(&self) -> Result<Self::Buffer, String> {
        unsafe { HasContext::create_buffer(self) }
    }

    fn delete_buffer(&self, buffer: Self::Buffer) {
        unsafe { HasContext::delete_buffer(self, buffer) }
    }

    fn bind_buffer(&self, target: u32, buffer: Option<Self::Buffer>) {
        unsafe { HasContext::bind_buffer(self, target, buffer) }
    }

    fn buffer_data(&self, target: u32, data: &[u8], usage: u32) {
        unsafe { self.buffer_data_u8_slice(target, data, usage) }
    }

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String> {
        unsafe { HasContext::create_vertex_array(self) }
    }

    fn delete_vertex_array(&self, array: Self::VertexArray) {
        unsafe { HasContext::delete_vertex_array(self, array) }
    }

    fn bind_vertex_array(&self, array: Option<Self::VertexArray>) {
        unsafe { HasContext::bind_vertex_array(self, array) }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { HasContext::enable_vertex_attrib_array(self, index) }
    }

    fn vertex_attrib_pointer(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        // glVertexAttribPointer for every category, integer types included.
        unsafe { self.vertex_attrib_pointer_f32(index, size, data_type, normalized, stride, offset) }
    }

    fn draw_elements(&self, mode: u32, count: i32, element_type: u32, offset: i32) {
        unsafe { HasContext::draw_elements(self, mode, count, element_type, offset) }
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        unsafe { HasContext::clear_color(self, r, g, b, a) }
    }

    fn clear(&self, mask: u32) {
        unsafe { HasContext::clear(self, mask) }
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        unsafe { HasContext::viewport(self, x, y, width, height) }
    }

    fn create_shader(&self, shader_type: u32) -> Result<Self::Shader, String> {
        unsafe { HasContext::create_shader(self, shader_type) }
    }

    fn shader_source(&self, shader: Self::Shader, source: &str) {
        unsafe { HasContext::shader_source(self, shader, source) }
    }

    fn compile_shader(&self, shader: Self::Shader) {
        unsafe { HasContext::compile_shader(self, shader) }
    }

    fn shader_compile_status(&self, shader: Self::Shader) -> bool {
        unsafe { self.get_shader_compile_status(shader) }
    }

    fn shader_info_log(&self, shader: Self::Shader) -> String {
        unsafe { self.get_shader_info_log(shader) }
    }

    fn delete_shader(&self, shader: Self::Shader) {
        unsafe { HasContext::delete_shader(self, shader) }
    }

    fn create_program(&self) -> Result<Self::Program, String> {
        unsafe { HasContext::create_program(self) }
    }

    fn attach_shader(&self, program: Self::Program, shader: Self::Shader) {
        unsafe { HasContext::attach_shader(self, program, shader) }
    }

    fn link_program(&self, program: Self::Program) {
        unsafe { HasContext::link_program(self, program) }
    }

    fn program_link_status(&self, program: Self::Program) -> bool {
        unsafe { self.get_program_link_status(program) }
    }

    fn validate_program(&self, program: Self::Program) {
        unsafe { HasContext::validate_program(self, program) }
    }

    fn program_info_log(&self, program: Self::Program) -> String {
        unsafe { self.get_program_info_log(program) }
    }

    fn use_program(&self, program: Option<Self::Program>) {
        unsafe { HasContext::use_program(self, program) }
    }

    fn delete_program(&self, program: Self::Program) {
        unsafe { HasContext::delete_program(self, program) }
    }

    fn uniform_location(
        &self,
        program: Self::Program,
        name: &str,
    ) -> Option<Self::UniformLocation> {
        unsafe { self.get_uniform_location(program, name) }
    }

    fn uniform_4_f32(&self, location: &Self::UniformLocation, value: [f32; 4]) {
        let [x, y, z, w] = value;
        unsafe { HasContext::uniform_4_f32(self, Some(location), x, y, z, w) }
    }

    fn parameter_string(&self, name: u32) -> String {
        unsafe { self.get_parameter_string(name) }
    }
}
