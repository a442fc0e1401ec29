use crate::coords::{Rect, Vec2};
use crate::device::TextureId;
use crate::paint::Color;

/// One textured quad submission.
///
/// The quad covers `source` (or the whole texture) in texel units. It is placed by
/// subtracting `origin`, multiplying by `scale`, rotating by `rotation` radians
/// around the origin, then translating to `position`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sprite {
    pub texture: TextureId,
    pub position: Vec2,
    /// Sub-rectangle of the texture in texels. `None` = whole texture.
    pub source: Option<Rect>,
    pub color: Color,
    pub rotation: f32,
    pub origin: Vec2,
    pub scale: Vec2,
    /// Draw-ordering hint, meaningful only to sorted [`SortMode`]s.
    ///
    /// [`SortMode`]: super::SortMode
    pub depth: f32,
}

impl Sprite {
    /// Unrotated, unscaled draw of the whole texture at `position`.
    #[inline]
    pub fn new(texture: TextureId, position: Vec2, color: Color) -> Self {
        Self {
            texture,
            position,
            source: None,
            color,
            rotation: 0.0,
            origin: Vec2::zero(),
            scale: Vec2::one(),
            depth: 0.0,
        }
    }

    #[inline]
    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    #[inline]
    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.scale = scale;
        self
    }

    #[inline]
    pub fn with_origin(mut self, origin: Vec2) -> Self {
        self.origin = origin;
        self
    }

    #[inline]
    pub fn with_source(mut self, source: Rect) -> Self {
        self.source = Some(source);
        self
    }

    #[inline]
    pub fn with_depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }
}
