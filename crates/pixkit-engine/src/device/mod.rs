//! Capabilities consumed from the host rendering environment.
//!
//! The primitive layer never talks to a GPU API directly. It needs exactly:
//! - `GraphicsDevice`: query the live viewport, allocate a texture from pixels
//! - `SpriteBatch`: submit a textured quad inside an active drawing session
//!
//! Implementations shipped here:
//! - `HeadlessDevice`: in-memory textures, caller-provided viewport
//! - `GpuDevice`: wgpu textures via `render::TextureStore`
//! - `scene::SpriteList` implements `SpriteBatch`

mod gpu;
mod headless;
mod texture;

pub use gpu::{Gpu, GpuDevice, GpuInit, OffscreenTarget};
pub use headless::{HeadlessDevice, HeadlessTexture, DEFAULT_MAX_TEXTURE_DIMENSION};
pub use texture::{TextureError, TextureId};

pub(crate) use texture::validate_texture;

use crate::coords::Viewport;
use crate::paint::Color;
use crate::scene::Sprite;

/// Device-side resources the primitive layer depends on.
pub trait GraphicsDevice {
    /// Current viewport size in pixels. Queried live; never cache across frames.
    fn viewport(&self) -> Viewport;

    /// Allocates a `width x height` texture and uploads `pixels` (row-major).
    fn create_texture(
        &mut self,
        width: u32,
        height: u32,
        pixels: &[Color],
    ) -> Result<TextureId, TextureError>;
}

/// An open drawing session accepting textured quads.
///
/// Callers establish the session (begin/end, render pass) themselves; drawing
/// helpers only submit.
pub trait SpriteBatch {
    fn draw(&mut self, sprite: Sprite);
}

impl<B: SpriteBatch + ?Sized> SpriteBatch for &mut B {
    #[inline]
    fn draw(&mut self, sprite: Sprite) {
        (**self).draw(sprite);
    }
}
