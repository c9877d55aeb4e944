use std::time::{Duration, Instant};

/// Result of one [`FrameCounter::tick`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTick {
    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,

    /// Frames per second over the window that just closed, if one did.
    pub fps: Option<f32>,
}

/// Counts presented frames and measures the frame rate.
///
/// The rate is reported once per elapsed measurement window (one second by
/// default) rather than per frame.
#[derive(Debug, Clone)]
pub struct FrameCounter {
    frame_index: u64,
    window: Duration,
    window_start: Instant,
    window_frames: u32,
}

impl FrameCounter {
    pub fn new(now: Instant) -> Self {
        Self::with_window(now, Duration::from_secs(1))
    }

    pub fn with_window(now: Instant, window: Duration) -> Self {
        debug_assert!(!window.is_zero());
        Self {
            frame_index: 0,
            window,
            window_start: now,
            window_frames: 0,
        }
    }

    /// Records one frame presented at `now`.
    pub fn tick(&mut self, now: Instant) -> FrameTick {
        let frame_index = self.frame_index;
        self.frame_index = self.frame_index.wrapping_add(1);
        self.window_frames += 1;

        let elapsed = now.saturating_duration_since(self.window_start);
        let fps = if elapsed >= self.window {
            let fps = self.window_frames as f32 / elapsed.as_secs_f32();
            self.window_start = now;
            self.window_frames = 0;
            Some(fps)
        } else {
            None
        };

        FrameTick { frame_index, fps }
    }
}
