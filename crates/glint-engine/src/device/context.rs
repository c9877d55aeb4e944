use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::{anyhow, Context, Result};
use glutin::config::{Config, ConfigTemplateBuilder};
use glutin::context::{ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version};
use glutin::display::GetGlDisplay;
use glutin::prelude::*;
use glutin::surface::{Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use crate::gl_call;

use super::{version_at_least, ContextInit, DriverInfo};

/// Owns the GL context, its window surface and the loaded function table.
///
/// This type is the low-level rendering context:
/// - creates the window together with a matching GL config
/// - creates a context, makes it current on the calling thread
/// - loads `glow` and checks the driver version
/// - resizes the surface and presents frames
///
/// Field order is drop order: the function table, then the surface, then the
/// context. The window passed back by [`GlContext::new`] must outlive all three.
pub struct GlContext {
    gl: Rc<glow::Context>,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    size: PhysicalSize<u32>,
}

impl GlContext {
    /// Creates a window from `attributes` plus a current GL context for it.
    pub fn new(
        event_loop: &ActiveEventLoop,
        attributes: WindowAttributes,
        init: &ContextInit,
    ) -> Result<(Window, Self)> {
        let (window, config) = DisplayBuilder::new()
            .with_window_attributes(Some(attributes))
            .build(event_loop, ConfigTemplateBuilder::new(), pick_config)
            .map_err(|e| anyhow!("failed to create window with a GL config: {e}"))?;
        let window = window.context("display builder returned no window")?;

        let raw_handle = window
            .window_handle()
            .context("window has no native handle")?
            .as_raw();
        let display = config.display();

        let (major, minor) = init.gl_version;
        let profile = if init.core_profile {
            GlProfile::Core
        } else {
            GlProfile::Compatibility
        };
        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .with_profile(profile)
            .build(Some(raw_handle));

        // SAFETY: `raw_handle` belongs to `window`, which is returned to the
        // caller and outlives the context.
        let not_current = unsafe { display.create_context(&config, &context_attributes) }
            .with_context(|| format!("failed to create OpenGL {major}.{minor} context"))?;

        let surface_attributes = window
            .build_surface_attributes(Default::default())
            .context("failed to describe window surface")?;
        // SAFETY: same window as above.
        let surface = unsafe { display.create_window_surface(&config, &surface_attributes) }
            .context("failed to create window surface")?;

        let context = not_current
            .make_current(&surface)
            .context("failed to make GL context current")?;

        let interval = if init.vsync {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        if let Err(e) = surface.set_swap_interval(&context, interval) {
            log::warn!("swap interval {interval:?} not applied: {e}");
        }

        // SAFETY: the context is current on this thread; symbols come from its display.
        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|symbol| display.get_proc_address(symbol))
        };

        let info = DriverInfo::query(&gl);
        info.log();

        let version = glow::HasContext::version(&gl);
        anyhow::ensure!(
            version_at_least((version.major, version.minor), init.min_version),
            "OpenGL {}.{} API is not available (driver reports {})",
            init.min_version.0,
            init.min_version.1,
            info.version
        );

        let size = window.inner_size();
        let ctx = Self {
            gl: Rc::new(gl),
            surface,
            context,
            size,
        };
        ctx.apply_viewport();

        Ok((window, ctx))
    }

    /// Returns the function table shared by every GL wrapper.
    #[inline]
    pub fn gl(&self) -> &Rc<glow::Context> {
        &self.gl
    }

    /// Resizes the surface and the viewport.
    ///
    /// A zero-sized surface cannot be configured; only the stored size is
    /// updated in that case.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        self.size = new_size;

        let (Some(w), Some(h)) = (NonZeroU32::new(new_size.width), NonZeroU32::new(new_size.height))
        else {
            return;
        };

        self.surface.resize(&self.context, w, h);
        self.apply_viewport();
    }

    /// Presents the back buffer.
    pub fn swap_buffers(&self) -> Result<()> {
        self.surface
            .swap_buffers(&self.context)
            .context("failed to swap buffers")
    }

    fn apply_viewport(&self) {
        let PhysicalSize { width, height } = self.size;
        // The shim already logged any failure.
        let width = i32::try_from(width).unwrap_or(i32::MAX);
        let height = i32::try_from(height).unwrap_or(i32::MAX);
        let _ = gl_call!(self.gl, viewport(0, 0, width, height));
    }
}

/// Picks the config with the fewest samples; the quad needs no multisampling.
///
/// `DisplayBuilder::build` only calls this after `find_configs` succeeded, and
/// every glutin backend reports an empty match as an error there, so the
/// iterator always yields at least one config.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    fewest_samples(configs, |c| c.num_samples())
        .expect("find_configs never yields an empty config list")
}

/// First item with the lowest sample count, `None` for an empty iterator.
fn fewest_samples<T>(items: impl Iterator<Item = T>, samples: impl Fn(&T) -> u8) -> Option<T> {
    items.min_by_key(|item| samples(item))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fewest_samples_prefers_the_first_lowest() {
        let configs = [(4u8, "msaa4"), (0, "plain"), (0, "plain-srgb"), (8, "msaa8")];
        let picked = fewest_samples(configs.into_iter(), |c| c.0);
        assert_eq!(picked, Some((0, "plain")));
    }

    #[test]
    fn fewest_samples_of_nothing_is_none() {
        let picked = fewest_samples(std::iter::empty::<(u8, &str)>(), |c| c.0);
        assert_eq!(picked, None);
    }
}
