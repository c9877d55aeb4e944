//! Recording [`GlApi`] used by unit tests.
//!
//! Handles are plain integers handed out from a single counter starting at 1.
//! Every entry point except `get_error` and `parameter_string` is appended to
//! the call log. Error codes armed with [`RecordingGl::fail_call_after`] are
//! queued right after the targeted call is recorded.

use std::cell::{Cell, RefCell};
use std::collections::{HashSet, VecDeque};

use super::GlApi;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateBuffer(u32),
    DeleteBuffer(u32),
    BindBuffer { target: u32, buffer: Option<u32> },
    BufferData { target: u32, data: Vec<u8>, usage: u32 },
    CreateVertexArray(u32),
    DeleteVertexArray(u32),
    BindVertexArray(Option<u32>),
    EnableVertexAttribArray(u32),
    VertexAttribPointer {
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    },
    DrawElements { mode: u32, count: i32, element_type: u32, offset: i32 },
    ClearColor([f32; 4]),
    Clear(u32),
    Viewport { x: i32, y: i32, width: i32, height: i32 },
    CreateShader { shader: u32, shader_type: u32 },
    ShaderSource { shader: u32, source: String },
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader { program: u32, shader: u32 },
    LinkProgram(u32),
    ValidateProgram(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    Uniform4f { location: i32, value: [f32; 4] },
}

#[derive(Debug, Default)]
pub struct RecordingGl {
    calls: RefCell<Vec<Call>>,
    pending: RefCell<VecDeque<u32>>,
    armed: RefCell<Vec<(usize, u32)>>,
    next_id: Cell<u32>,
    error_reads: Cell<usize>,
    context_lost: Cell<bool>,
    failing_stages: RefCell<HashSet<u32>>,
    fail_link: Cell<bool>,
    uniforms: RefCell<Vec<String>>,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `code` as if an earlier, unchecked call had raised it.
    pub fn push_error(&self, code: u32) {
        self.pending.borrow_mut().push_back(code);
    }

    /// Makes the next recorded call raise `code`.
    pub fn fail_next_call(&self, code: u32) {
        self.fail_call_after(0, code);
    }

    /// Lets `skip` calls through, then makes the following one raise `code`.
    pub fn fail_call_after(&self, skip: usize, code: u32) {
        self.armed.borrow_mut().push((skip, code));
    }

    /// While set, `get_error` reports `CONTEXT_LOST` forever.
    pub fn set_context_lost(&self, lost: bool) {
        self.context_lost.set(lost);
    }

    /// Shaders of `shader_type` report a failed compile.
    pub fn fail_compile(&self, shader_type: u32) {
        self.failing_stages.borrow_mut().insert(shader_type);
    }

    pub fn fail_link(&self) {
        self.fail_link.set(true);
    }

    /// Declares an active uniform; its location is its declaration index.
    pub fn declare_uniform(&self, name: &str) {
        self.uniforms.borrow_mut().push(name.to_string());
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn error_reads(&self) -> usize {
        self.error_reads.get()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);

        let mut pending = self.pending.borrow_mut();
        self.armed.borrow_mut().retain_mut(|(skip, code)| {
            if *skip == 0 {
                pending.push_back(*code);
                false
            } else {
                *skip -= 1;
                true
            }
        });
    }

    fn next_handle(&self) -> u32 {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    fn shader_type(&self, shader: u32) -> Option<u32> {
        self.calls.borrow().iter().find_map(|c| match c {
            Call::CreateShader { shader: s, shader_type } if *s == shader => Some(*shader_type),
            _ => None,
        })
    }
}

impl GlApi for RecordingGl {
    type Buffer = u32;
    type VertexArray = u32;
    type Shader = u32;
    type Program = u32;
    type UniformLocation = i32;

    fn get_error(&self) -> u32 {
        self.error_reads.set(self.error_reads.get() + 1);
        if self.context_lost.get() {
            return glow::CONTEXT_LOST;
        }
        self.pending.borrow_mut().pop_front().unwrap_or(glow::NO_ERROR)
    }

    fn create_buffer(&self) -> Result<u32, String> {
        let id = self.next_handle();
        self.record(Call::CreateBuffer(id));
        Ok(id)
    }

    fn delete_buffer(&self, buffer: u32) {
        self.record(Call::DeleteBuffer(buffer));
    }

    fn bind_buffer(&self, target: u32, buffer: Option<u32>) {
        self.record(Call::BindBuffer { target, buffer });
    }

    fn buffer_data(&self, target: u32, data: &[u8], usage: u32) {
        self.record(Call::BufferData { target, data: data.to_vec(), usage });
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        let id = self.next_handle();
        self.record(Call::CreateVertexArray(id));
        Ok(id)
    }

    fn delete_vertex_array(&self, array: u32) {
        self.record(Call::DeleteVertexArray(array));
    }

    fn bind_vertex_array(&self, array: Option<u32>) {
        self.record(Call::BindVertexArray(array));
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(Call::EnableVertexAttribArray(index));
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
        self.record(Call::VertexAttribPointer { index, size, data_type, normalized, stride, offset });
    }

    fn draw_elements(&self, mode: u32, count: i32, element_type: u32, offset: i32) {
        self.record(Call::DrawElements { mode, count, element_type, offset });
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.record(Call::ClearColor([r, g, b, a]));
    }

    fn clear(&self, mask: u32) {
        self.record(Call::Clear(mask));
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(Call::Viewport { x, y, width, height });
    }

    fn create_shader(&self, shader_type: u32) -> Result<u32, String> {
        let shader = self.next_handle();
        self.record(Call::CreateShader { shader, shader_type });
        Ok(shader)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        self.record(Call::ShaderSource { shader, source: source.to_string() });
    }

    fn compile_shader(&self, shader: u32) {
        self.record(Call::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        match self.shader_type(shader) {
            Some(ty) => !self.failing_stages.borrow().contains(&ty),
            None => false,
        }
    }

    fn shader_info_log(&self, shader: u32) -> String {
        format!("0:1(1): error: shader {shader} rejected")
    }

    fn delete_shader(&self, shader: u32) {
        self.record(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        let program = self.next_handle();
        self.record(Call::CreateProgram(program));
        Ok(program)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.record(Call::AttachShader { program, shader });
    }

    fn link_program(&self, program: u32) {
        self.record(Call::LinkProgram(program));
    }

    fn program_link_status(&self, _program: u32) -> bool {
        !self.fail_link.get()
    }

    fn validate_program(&self, program: u32) {
        self.record(Call::ValidateProgram(program));
    }

    fn program_info_log(&self, program: u32) -> String {
        format!("program {program}: unresolved varying")
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(Call::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        self.record(Call::DeleteProgram(program));
    }

    fn uniform_location(&self, _program: u32, name: &str) -> Option<i32> {
        self.uniforms
            .borrow()
            .iter()
            .position(|u| u == name)
            .map(|i| i as i32)
    }

    fn uniform_4_f32(&self, location: &i32, value: [f32; 4]) {
        self.record(Call::Uniform4f { location: *location, value });
    }

    fn parameter_string(&self, name: u32) -> String {
        match name {
            glow::VERSION => "3.3.0 Recording".to_string(),
            glow::SHADING_LANGUAGE_VERSION => "3.30".to_string(),
            glow::VENDOR => "glint".to_string(),
            glow::RENDERER => "recording".to_string(),
            _ => String::new(),
        }
    }
}
