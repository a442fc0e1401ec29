//! pixkit engine crate.
//!
//! 2D drawing utilities layered over a minimal rendering-device abstraction:
//! coordinate conversions, primitive shapes drawn with a shared 1x1 texture,
//! memoized circle/arc geometry, virtual-resolution viewport adapters, text
//! wrapping and frame-rate counting. A recording `SpriteList`, an in-memory
//! device and a wgpu sprite renderer implement the device traits.

pub mod coords;
pub mod device;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod shapes;
pub mod text;
pub mod time;
pub mod viewport;
