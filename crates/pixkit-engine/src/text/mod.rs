//! Text helpers.
//!
//! - `wrap_text`: greedy word wrap against a pixel width
//! - `FontSystem`: fontdue-backed font storage and measurement
//! - `FontMeasure`: adapts one font at one size to `TextMeasure`

mod font_system;
mod wrap;

pub use font_system::{FontId, FontLoadError, FontMeasure, FontSystem};
pub use wrap::{wrap_text, TextMeasure};
