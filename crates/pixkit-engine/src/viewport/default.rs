use glam::Mat4;

use crate::coords::Viewport;

use super::ViewportAdapter;

/// Virtual size tracks the device viewport one-to-one; no scaling.
#[derive(Debug, Copy, Clone, Default)]
pub struct DefaultViewportAdapter;

impl DefaultViewportAdapter {
    #[inline]
    pub const fn new() -> Self {
        Self
    }
}

impl ViewportAdapter for DefaultViewportAdapter {
    fn virtual_size(&self, actual: Viewport) -> (i32, i32) {
        (actual.width as i32, actual.height as i32)
    }

    fn scale_matrix(&self, _actual: Viewport) -> Mat4 {
        Mat4::IDENTITY
    }
}
