use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use bytemuck::{Pod, Zeroable};
use glint_engine::core::{App, AppControl, FrameCtx};
use glint_engine::gl::{
    GlResult, Index, IndexBuffer, VertexArray, VertexBuffer, VertexBufferLayout,
};
use glint_engine::paint::{Color, ColorPulse};
use glint_engine::render::Renderer;
use glint_engine::shader::{parse_shader, ShaderProgram};
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

const COLOR_UNIFORM: &str = "u_Color";

/// Uniform color before the first frame; frames replace only the red channel.
const BASE_COLOR: Color = Color::new(0.2, 0.3, 0.8, 1.0);

#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
struct Vertex {
    position: [f32; 2],
}

const VERTICES: [Vertex; 4] = [
    Vertex { position: [-0.5, -0.5] },
    Vertex { position: [0.5, -0.5] },
    Vertex { position: [0.5, 0.5] },
    Vertex { position: [-0.5, 0.5] },
];

const INDICES: [Index; 6] = [0, 1, 2, 2, 3, 0];

fn vertex_layout() -> VertexBufferLayout {
    let mut layout = VertexBufferLayout::new();
    layout.push_f32(2);
    layout
}

/// GL objects behind the quad. Only exists while the context does.
struct Scene {
    program: ShaderProgram,
    color: glow::UniformLocation,
    va: VertexArray,
    _vb: VertexBuffer,
    ib: IndexBuffer,
    renderer: Renderer,
}

impl Scene {
    fn new(gl: &Rc<glow::Context>, shader: &Path) -> Result<Self> {
        let source = parse_shader(shader);
        let program = ShaderProgram::new(gl, &source)
            .with_context(|| format!("failed to build program from {}", shader.display()))?;

        program.bind()?;
        let color = program.uniform_location(COLOR_UNIFORM)?;
        program.set_uniform_4f(&color, BASE_COLOR.to_array())?;

        let mut va = VertexArray::new(gl)?;
        let vb = VertexBuffer::new(gl, &VERTICES)?;
        va.add_buffer(&vb, &vertex_layout())?;
        let ib = IndexBuffer::new(gl, &INDICES)?;

        // Start every frame from a clean binding state.
        va.unbind()?;
        program.unbind()?;
        vb.unbind()?;
        ib.unbind()?;

        log::info!(
            "quad ready: {} bytes of vertices, {} indices",
            vb.size(),
            ib.count()
        );

        Ok(Self {
            program,
            color,
            va,
            _vb: vb,
            ib,
            renderer: Renderer::new(gl),
        })
    }

    fn render(&self, red: f32) -> GlResult<()> {
        self.renderer.clear(Color::BLACK)?;

        self.program.bind()?;
        self.program
            .set_uniform_4f(&self.color, BASE_COLOR.with_r(red).to_array())?;

        self.renderer.draw(&self.va, &self.ib, &self.program)
    }
}

/// Loads the shader on start and draws the pulsing quad every frame.
pub struct QuadApp {
    shader: PathBuf,
    scene: Option<Scene>,
    pulse: ColorPulse,
}

impl QuadApp {
    pub fn new(shader: PathBuf) -> Self {
        Self {
            shader,
            scene: None,
            pulse: ColorPulse::default(),
        }
    }
}

impl App for QuadApp {
    fn on_start(&mut self, gl: &Rc<glow::Context>) -> Result<()> {
        self.scene = Some(Scene::new(gl, &self.shader)?);
        Ok(())
    }

    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape) =>
            {
                AppControl::Exit
            }
            _ => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        let Some(scene) = self.scene.as_ref() else {
            return AppControl::Exit;
        };

        if let Err(err) = scene.render(self.pulse.value()) {
            log::error!("frame {} failed: {err}", ctx.tick.frame_index);
            return AppControl::Exit;
        }

        self.pulse.advance();
        AppControl::Continue
    }

    fn on_stop(&mut self) {
        self.scene = None;
    }
}
