//! Polygon approximations for circles and arcs, plus the cache that owns them.
//!
//! All point lists are offsets from the origin; the primitive renderer
//! translates them to the shape center at draw time.

mod arc;
mod cache;
mod circle;

pub use arc::arc_points;
pub use cache::{CacheStats, PointList, ShapeCache, ShapeCacheConfig};
pub use circle::circle_points;
