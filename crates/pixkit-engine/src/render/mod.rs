//! Drawing.
//!
//! - `Primitives`: points, lines, rectangles, circles and arcs as quads of a
//!   shared 1x1 texture, submitted to any `SpriteBatch`
//! - `SpriteRenderer` + `TextureStore`: wgpu backend that draws a recorded
//!   `SpriteList` into a render target
//!
//! Convention:
//! - CPU geometry is in pixels (top-left origin, +Y down).
//! - The vertex shader applies `RenderCtx::transform`, then converts to NDC.

mod common;
mod ctx;
mod primitives;
mod sprite;
mod textures;

pub use ctx::{RenderCtx, RenderTarget};
pub use primitives::{
    draw_texture_centered, draw_texture_in, Primitives, DEFAULT_DEPTH, DEFAULT_THICKNESS,
};
pub use sprite::SpriteRenderer;
pub use textures::TextureStore;
