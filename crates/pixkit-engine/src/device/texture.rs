use std::fmt;

use crate::paint::Color;

/// Opaque handle to a texture owned by a [`GraphicsDevice`].
///
/// [`GraphicsDevice`]: super::GraphicsDevice
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub(crate) u32);

impl TextureId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Error returned by [`GraphicsDevice::create_texture`].
///
/// [`GraphicsDevice::create_texture`]: super::GraphicsDevice::create_texture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextureError {
    /// Width or height is zero.
    ZeroSize { width: u32, height: u32 },
    /// `pixels.len()` does not equal `width * height`.
    PixelCountMismatch { expected: usize, actual: usize },
    /// A dimension exceeds the device limit.
    TooLarge { width: u32, height: u32, max: u32 },
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextureError::ZeroSize { width, height } => {
                write!(f, "texture has zero size ({width}x{height})")
            }
            TextureError::PixelCountMismatch { expected, actual } => {
                write!(f, "texture expects {expected} pixels, got {actual}")
            }
            TextureError::TooLarge { width, height, max } => {
                write!(f, "texture {width}x{height} exceeds device limit {max}")
            }
        }
    }
}

impl std::error::Error for TextureError {}

/// Checks texture parameters shared by every device implementation.
pub(crate) fn validate_texture(
    width: u32,
    height: u32,
    pixels: &[Color],
    max_dimension: u32,
) -> Result<(), TextureError> {
    if width == 0 || height == 0 {
        return Err(TextureError::ZeroSize { width, height });
    }
    if width > max_dimension || height > max_dimension {
        return Err(TextureError::TooLarge { width, height, max: max_dimension });
    }
    let expected = width as usize * height as usize;
    if pixels.len() != expected {
        return Err(TextureError::PixelCountMismatch { expected, actual: pixels.len() });
    }
    Ok(())
}
