//! Paint model shared between the primitive layer and renderers.
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
