use crate::paint::Color;

/// Straight-alpha RGBA color with 8-bit channels, as authored by game-side code.
///
/// Channel order matches [`Color`]; conversion in either direction is lossless.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct ColorRgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ColorRgba {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(255, 255, 255, 255)
    }

    #[inline]
    pub const fn to_color(self) -> Color {
        Color::new(self.r, self.g, self.b, self.a)
    }
}

impl From<ColorRgba> for Color {
    #[inline]
    fn from(c: ColorRgba) -> Self {
        c.to_color()
    }
}

impl From<Color> for ColorRgba {
    #[inline]
    fn from(c: Color) -> Self {
        ColorRgba::new(c.r, c.g, c.b, c.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_preserves_every_channel() {
        let c = ColorRgba::new(1, 128, 254, 7);
        let engine = c.to_color();
        assert_eq!((engine.r, engine.g, engine.b, engine.a), (1, 128, 254, 7));
        assert_eq!(ColorRgba::from(engine), c);
    }
}
