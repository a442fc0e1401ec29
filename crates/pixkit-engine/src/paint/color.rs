/// Engine-side RGBA color with 8-bit straight-alpha channels.
///
/// This is the tint passed to the sprite batch. Renderers convert it to
/// premultiplied floats ([`Color::to_premul_f32`]) at upload time.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);
    pub const BLACK: Color = Color::new(0, 0, 0, 255);
    pub const WHITE: Color = Color::new(255, 255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0, 255);
    pub const GREEN: Color = Color::new(0, 255, 0, 255);
    pub const BLUE: Color = Color::new(0, 0, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Packs the channels little-endian as `0xAABBGGRR`.
    #[inline]
    pub const fn packed(self) -> u32 {
        u32::from_le_bytes([self.r, self.g, self.b, self.a])
    }

    #[inline]
    pub const fn from_packed(value: u32) -> Self {
        let [r, g, b, a] = value.to_le_bytes();
        Self::new(r, g, b, a)
    }

    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Straight-alpha float channels in `[0, 1]`.
    #[inline]
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }

    /// Premultiplied float channels in `[0, 1]`.
    #[inline]
    pub fn to_premul_f32(self) -> [f32; 4] {
        let [r, g, b, a] = self.to_f32();
        [r * a, g * a, b * a, a]
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_round_trip() {
        let c = Color::new(0x12, 0x34, 0x56, 0x78);
        assert_eq!(c.packed(), 0x7856_3412);
        assert_eq!(Color::from_packed(c.packed()), c);
    }

    #[test]
    fn premul_scales_rgb_by_alpha() {
        let [r, g, b, a] = Color::new(255, 0, 255, 0).to_premul_f32();
        assert_eq!((r, g, b, a), (0.0, 0.0, 0.0, 0.0));

        let [r, _, _, a] = Color::WHITE.to_premul_f32();
        assert_eq!((r, a), (1.0, 1.0));
    }
}
