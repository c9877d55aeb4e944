//! Frame timing.
//!
//! One `FrameCounter` per render loop; call `tick()` once per presented frame.

mod frame_counter;

pub use frame_counter::{FrameCounter, FrameTick};
