/// Measures the rendered width of a string, in pixels.
pub trait TextMeasure {
    fn measure_width(&self, text: &str) -> f32;
}

impl<F> TextMeasure for F
where
    F: Fn(&str) -> f32,
{
    #[inline]
    fn measure_width(&self, text: &str) -> f32 {
        self(text)
    }
}

/// Splits `text` into lines whose accumulated word widths fit `pixels`.
///
/// Words are separated by single spaces; consecutive spaces yield empty words.
/// Each word is appended with a trailing space and only the word itself is
/// measured. A line is flushed as soon as its width exceeds `pixels`, with the
/// word that crossed the limit kept on the flushed line. A non-empty remainder
/// becomes the last line.
pub fn wrap_text<M: TextMeasure + ?Sized>(text: &str, pixels: f32, measure: &M) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut width = 0.0f32;

    for word in text.split(' ') {
        line.push_str(word);
        line.push(' ');
        width += measure.measure_width(word);

        if width > pixels {
            lines.push(std::mem::take(&mut line));
            width = 0.0;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines
}
