//! Virtual-resolution viewport adapters.
//!
//! Game logic is authored against a fixed virtual resolution; the adapter maps
//! it onto the live device viewport. Variants implement [`ViewportAdapter`];
//! shared behavior lives in free functions taking the adapter as input.
//!
//! The actual viewport is passed in on every call (query it from the
//! [`GraphicsDevice`](crate::device::GraphicsDevice) each frame), so scale
//! matrices are always computed from the current window size and never cached.

mod default;
mod scaling;

pub use default::DefaultViewportAdapter;
pub use scaling::ScalingViewportAdapter;

use glam::Mat4;

use crate::coords::{transform_vec2, Point, Rect, Viewport};

/// Virtual-to-actual transform policy.
pub trait ViewportAdapter {
    /// Virtual (logical) width and height for the given actual viewport.
    fn virtual_size(&self, actual: Viewport) -> (i32, i32);

    /// Matrix mapping virtual coordinates to actual screen coordinates.
    fn scale_matrix(&self, actual: Viewport) -> Mat4;

    /// Restores adapter-internal adjustable state. No-op for stateless adapters.
    fn reset(&mut self) {}
}

/// `Rect(0, 0, virtual_width, virtual_height)`.
pub fn bounding_rect<A: ViewportAdapter + ?Sized>(adapter: &A, actual: Viewport) -> Rect {
    let (w, h) = adapter.virtual_size(actual);
    Rect::new(0, 0, w, h)
}

/// Center of the virtual area, in virtual coordinates.
pub fn center<A: ViewportAdapter + ?Sized>(adapter: &A, actual: Viewport) -> Point {
    bounding_rect(adapter, actual).center()
}

/// Maps a point in actual screen/window coordinates to virtual coordinates.
///
/// Inverts the current scale matrix; the result is truncated toward zero.
pub fn point_to_screen<A: ViewportAdapter + ?Sized>(
    adapter: &A,
    actual: Viewport,
    point: Point,
) -> Point {
    let inverse = adapter.scale_matrix(actual).inverse();
    transform_vec2(point.to_vec2(), &inverse).to_point()
}
