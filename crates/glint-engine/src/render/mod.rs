//! Frame-level drawing on top of the `gl` wrappers.
//!
//! Binding is explicit: `Renderer::draw` re-binds program, vertex array and
//! index buffer on every call rather than trusting whatever was bound last.

mod renderer;

pub use renderer::Renderer;
