/// Per-frame triangle wave used to animate one color channel.
///
/// The direction flips only once the value has already left `[0, 1]`, so the
/// value overshoots each end by at most one step before turning around.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorPulse {
    value: f32,
    step: f32,
    increment: f32,
}

impl ColorPulse {
    pub const DEFAULT_STEP: f32 = 0.05;

    /// Starts at `0.0`, rising by `step` per frame.
    pub fn new(step: f32) -> Self {
        debug_assert!(step > 0.0, "pulse step must be positive");
        Self { value: 0.0, step, increment: step }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Moves one frame forward and returns the new value.
    pub fn advance(&mut self) -> f32 {
        if self.value > 1.0 {
            self.increment = -self.step;
        } else if self.value < 0.0 {
            self.increment = self.step;
        }
        self.value += self.increment;
        self.value
    }
}

impl Default for ColorPulse {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STEP)
    }
}
