use std::fmt;

use crate::gl::GlApi;

/// Strings reported by the driver for the current context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverInfo {
    pub version: String,
    pub shading_language_version: String,
    pub vendor: String,
    pub renderer: String,
}

impl DriverInfo {
    pub fn query<G: GlApi + ?Sized>(gl: &G) -> Self {
        Self {
            version: gl.parameter_string(glow::VERSION),
            shading_language_version: gl.parameter_string(glow::SHADING_LANGUAGE_VERSION),
            vendor: gl.parameter_string(glow::VENDOR),
            renderer: gl.parameter_string(glow::RENDERER),
        }
    }

    /// Logs one line per field at info level.
    pub fn log(&self) {
        log::info!("OpenGL version: {}", self.version);
        log::info!("GLSL version: {}", self.shading_language_version);
        log::info!("Vendor: {}", self.vendor);
        log::info!("Renderer: {}", self.renderer);
    }
}

impl fmt::Display for DriverInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / GLSL {} ({} {})",
            self.version, self.shading_language_version, self.vendor, self.renderer
        )
    }
}

/// Returns whether `reported` is at least `required` (both `(major, minor)`).
#[inline]
pub fn version_at_least(reported: (u32, u32), required: (u32, u32)) -> bool {
    reported >= required
}
