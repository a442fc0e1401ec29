use crate::coords::Viewport;
use crate::paint::Color;

use super::texture::validate_texture;
use super::{GraphicsDevice, TextureError, TextureId};

/// Default texture dimension limit, matching wgpu's downlevel defaults.
pub const DEFAULT_MAX_TEXTURE_DIMENSION: u32 = 8192;

/// CPU-side copy of an uploaded texture.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessTexture {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

/// In-memory [`GraphicsDevice`].
///
/// Keeps uploaded pixels so they can be inspected, and reports a viewport set by
/// the caller. Useful for tooling, tests and server-side simulation where no GPU
/// is present.
#[derive(Debug, Clone)]
pub struct HeadlessDevice {
    viewport: Viewport,
    textures: Vec<HeadlessTexture>,
    max_texture_dimension: u32,
}

impl HeadlessDevice {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            textures: Vec::new(),
            max_texture_dimension: DEFAULT_MAX_TEXTURE_DIMENSION,
        }
    }

    /// Overrides the texture dimension limit.
    pub fn with_max_texture_dimension(mut self, max: u32) -> Self {
        self.max_texture_dimension = max;
        self
    }

    /// Simulates a window resize.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn texture(&self, id: TextureId) -> Option<&HeadlessTexture> {
        self.textures.get(id.index())
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }
}

impl GraphicsDevice for HeadlessDevice {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn create_texture(
        &mut self,
        width: u32,
        height: u32,
        pixels: &[Color],
    ) -> Result<TextureId, TextureError> {
        validate_texture(width, height, pixels, self.max_texture_dimension)?;

        let id = TextureId(self.textures.len() as u32);
        self.textures.push(HeadlessTexture { width, height, pixels: pixels.to_vec() });
        log::debug!("headless device: created texture {id:?} ({width}x{height})");
        Ok(id)
    }
}
