use glam::{Mat4, Vec3};

use crate::coords::Viewport;

use super::ViewportAdapter;

/// Fixed virtual resolution stretched to the device viewport.
///
/// X and Y scale independently, so the aspect ratio is only preserved when the
/// virtual and actual sizes share it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScalingViewportAdapter {
    virtual_width: i32,
    virtual_height: i32,
}

impl ScalingViewportAdapter {
    /// A zero virtual dimension is accepted but yields a non-finite scale.
    #[inline]
    pub fn new(virtual_width: i32, virtual_height: i32) -> Self {
        log::debug!("scaling viewport adapter: virtual {virtual_width}x{virtual_height}");
        Self { virtual_width, virtual_height }
    }

    #[inline]
    pub fn virtual_width(&self) -> i32 {
        self.virtual_width
    }

    #[inline]
    pub fn virtual_height(&self) -> i32 {
        self.virtual_height
    }
}

impl ViewportAdapter for ScalingViewportAdapter {
    fn virtual_size(&self, _actual: Viewport) -> (i32, i32) {
        (self.virtual_width, self.virtual_height)
    }

    fn scale_matrix(&self, actual: Viewport) -> Mat4 {
        let scale_x = actual.width as f32 / self.virtual_width as f32;
        let scale_y = actual.height as f32 / self.virtual_height as f32;
        Mat4::from_scale(Vec3::new(scale_x, scale_y, 1.0))
    }
}
