//! Time subsystem.
//!
//! - `FrameClock`: call `tick()` once per frame to obtain a clamped `FrameTime`
//! - `FpsCounter`: feed `FrameTime::elapsed` to `update` and call `draw` per
//!   rendered frame; rates are published once per second

mod fps;
mod frame_clock;

pub use fps::FpsCounter;
pub use frame_clock::{FrameClock, FrameTime};
