//! Color values fed to the clear color and to shader uniforms.

mod color;
mod pulse;

pub use color::Color;
pub use pulse::ColorPulse;
