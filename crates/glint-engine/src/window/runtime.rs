use std::time::Instant;

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, FrameCtx, WindowCtx};
use crate::device::{ContextInit, GlContext};
use crate::time::FrameCounter;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "Hello World".to_string(),
            initial_size: LogicalSize::new(640.0, 480.0),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens one window, runs `app` in it until the window closes or the app
    /// asks to exit.
    ///
    /// Errors from window/context creation and from `App::on_start` end the
    /// loop and are returned here.
    pub fn run<A>(config: RuntimeConfig, init: ContextInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

struct WindowEntry {
    // Dropped before `window`.
    gl: GlContext,
    counter: FrameCounter,
    window: Window,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    init: ContextInit,
    app: A,

    entry: Option<WindowEntry>,
    started: bool,
    exit_requested: bool,
    failure: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, init: ContextInit, app: A) -> Self {
        Self {
            config,
            init,
            app,
            entry: None,
            started: false,
            exit_requested: false,
            failure: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.failure = Some(err);
        self.shutdown(event_loop);
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size);

        let (window, gl) = GlContext::new(event_loop, attrs, &self.init)
            .context("failed to create window with an OpenGL context")?;

        self.entry = Some(WindowEntry {
            gl,
            counter: FrameCounter::new(Instant::now()),
            window,
        });
        Ok(())
    }

    /// Lets the app release GL resources while the context is still alive,
    /// then drops the context and the window.
    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        if self.started {
            self.app.on_stop();
            self.started = false;
        }
        self.entry = None;
        self.exit_requested = true;
        event_loop.exit();
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        let tick = entry.counter.tick(Instant::now());
        if let Some(fps) = tick.fps {
            log::debug!("{fps:.1} fps (frame {})", tick.frame_index);
        }

        let control = {
            let mut ctx = FrameCtx {
                window: WindowCtx {
                    id: window_id,
                    window: &entry.window,
                },
                gl: entry.gl.gl(),
                tick,
            };
            self.app.on_frame(&mut ctx)
        };

        entry.window.pre_present_notify();
        if let Err(err) = entry.gl.swap_buffers() {
            self.fail(event_loop, err);
            return;
        }

        if control == AppControl::Exit {
            self.shutdown(event_loop);
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || self.exit_requested {
            return;
        }

        if let Err(err) = self.create_window_entry(event_loop) {
            self.fail(event_loop, err);
            return;
        }

        let Some(entry) = self.entry.as_ref() else {
            return;
        };
        let gl = std::rc::Rc::clone(entry.gl.gl());

        if let Err(err) = self.app.on_start(&gl) {
            self.fail(event_loop, err.context("application failed to start"));
            return;
        }
        self.started = true;

        if let Some(entry) = self.entry.as_ref() {
            entry.window.request_redraw();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw: the scene animates every frame.
        if let Some(entry) = self.entry.as_ref() {
            entry.window.request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        if self.app.on_window_event(window_id, &event) == AppControl::Exit {
            self.shutdown(event_loop);
            return;
        }

        match &event {
            WindowEvent::CloseRequested => self.shutdown(event_loop),

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.entry.as_mut() {
                    entry.gl.resize(*new_size);
                    entry.window.request_redraw();
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.entry.as_mut() {
                    let new_size = entry.window.inner_size();
                    entry.gl.resize(new_size);
                    entry.window.request_redraw();
                }
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop, window_id),

            _ => {}
        }
    }

    fn exiting(&mut self, event_loop: &ActiveEventLoop) {
        // Covers exits not initiated by this runtime (e.g. platform quit).
        if self.entry.is_some() {
            self.shutdown(event_loop);
        }
    }
}
