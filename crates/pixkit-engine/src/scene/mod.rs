//! Scene (sprite stream) types.
//!
//! Responsibilities:
//! - describe a textured quad submission (`Sprite`)
//! - record submissions renderer-agnostically (`SpriteList`)
//! - provide deterministic paint ordering (depth policy + insertion order)

mod key;
mod list;
mod sprite;

pub use key::SortKey;
pub use list::{SortMode, SpriteItem, SpriteList};
pub use sprite::Sprite;
