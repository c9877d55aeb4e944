//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the window, and wires them to the GL context.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
