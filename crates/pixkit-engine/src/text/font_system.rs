use std::fmt;

use crate::coords::Vec2;

use super::TextMeasure;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns a collection of loaded fonts. Fonts are immutable after loading.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("font loaded: id={} glyphs={}", id.0, self.fonts[id.0].glyph_count());
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Bounding box of a single laid-out line, in pixels.
    ///
    /// Unknown ids and empty strings measure as zero width and one line height.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32) -> Vec2 {
        use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

        let line_height = size * 1.2;
        let Some(font) = self.get(id) else {
            return Vec2::new(0.0, line_height);
        };

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, size, 0));

        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return Vec2::new(0.0, line_height);
        }

        // Pen position after each glyph, not the bitmap edge; trailing
        // whitespace has no bitmap but still advances.
        let w = glyphs
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        let h = glyphs.iter().map(|g| g.y + g.height as f32).fold(size, f32::max);
        Vec2::new(w, h)
    }

    /// Binds one font at one pixel size for use with [`wrap_text`](super::wrap_text).
    pub fn measure(&self, font: FontId, size: f32) -> FontMeasure<'_> {
        FontMeasure { fonts: self, font, size }
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// [`TextMeasure`] over a font from a [`FontSystem`] at a fixed pixel size.
#[derive(Copy, Clone)]
pub struct FontMeasure<'a> {
    fonts: &'a FontSystem,
    font: FontId,
    size: f32,
}

impl TextMeasure for FontMeasure<'_> {
    fn measure_width(&self, text: &str) -> f32 {
        self.fonts.measure_text(text, self.font, self.size).x
    }
}
