use std::rc::Rc;

use winit::window::{Window, WindowId};

use crate::time::FrameTick;

/// Per-window handles and immutable window metadata.
pub struct WindowCtx<'a> {
    pub id:     WindowId,
    pub window: &'a Window,
}

/// Per-frame context passed to `core::App::on_frame`.
pub struct FrameCtx<'a> {
    pub window: WindowCtx<'a>,
    pub gl:     &'a Rc<glow::Context>,
    pub tick:   FrameTick,
}
