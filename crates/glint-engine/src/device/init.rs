/// Initialization parameters for the GL context.
///
/// Keep this structure stable and minimal. Add configuration flags only when a
/// concrete platform or driver requirement exists.
#[derive(Debug, Clone)]
pub struct ContextInit {
    /// Context version requested from the platform, as `(major, minor)`.
    pub gl_version: (u8, u8),

    /// Request a core profile (no fixed-function entry points).
    ///
    /// Core profiles are the only way to reach 3.2+ on macOS.
    pub core_profile: bool,

    /// Synchronize buffer swaps with the display refresh.
    pub vsync: bool,

    /// Lowest driver-reported version accepted after creation.
    ///
    /// Vertex array objects need 3.0; 3.2 is the oldest core profile.
    pub min_version: (u32, u32),
}

impl Default for ContextInit {
    fn default() -> Self {
        Self {
            gl_version: (3, 3),
            core_profile: true,
            vsync: true,
            min_version: (3, 2),
        }
    }
}
