//! Coordinate and geometry types shared by the shape cache, primitive renderer
//! and viewport adapters.
//!
//! Canonical space:
//! - pixels, origin top-left
//! - +X right, +Y down
//! - angles in radians, measured from +X toward +Y
//!
//! Conversions between integer and float types truncate toward zero.

mod color;
mod point;
mod rect;
mod transform;
mod vec2;
mod viewport;

pub use color::ColorRgba;
pub use point::{Point, Point2F, PointI};
pub use rect::Rect;
pub use transform::{to_world_position, transform_vec2};
pub use vec2::Vec2;
pub use viewport::Viewport;
