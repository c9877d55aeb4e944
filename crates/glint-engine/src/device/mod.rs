//! GL context management.
//!
//! This module is responsible for:
//! - creating the window together with an OpenGL context (`glutin`)
//! - loading the `glow` function table and checking the driver version
//! - resizing the surface and presenting frames

mod context;
mod info;
mod init;

pub use context::GlContext;
pub use info::{version_at_least, DriverInfo};
pub use init::ContextInit;
