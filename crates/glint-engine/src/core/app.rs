use std::rc::Rc;

use anyhow::Result;
use winit::event::WindowEvent;
use winit::window::WindowId;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by higher layers.
///
/// Every callback runs on the thread owning the GL context, with the context
/// current.
pub trait App {
    /// Called once the context exists; create GL resources here.
    ///
    /// An error stops the runtime and is returned from `Runtime::run`.
    fn on_start(&mut self, gl: &Rc<glow::Context>) -> Result<()>;

    /// Called for window events.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called once per frame, before the buffers are swapped.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;

    /// Called before the context is destroyed; drop GL resources here.
    fn on_stop(&mut self) {}
}
