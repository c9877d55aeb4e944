/// Straight-alpha RGBA color with `f32` channels in `[0, 1]`.
///
/// This is what the fragment stage receives through a `vec4` uniform and what
/// the clear color takes; no premultiplication happens anywhere in between.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn with_r(self, r: f32) -> Self {
        Self { r, ..self }
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
