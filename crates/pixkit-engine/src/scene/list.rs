use crate::device::SpriteBatch;

use super::{SortKey, Sprite};

/// Paint-order policy for a [`SpriteList`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum SortMode {
    /// Submission order; depth is ignored.
    #[default]
    Deferred,
    /// Lower depth painted first.
    FrontToBack,
    /// Higher depth painted first.
    BackToFront,
}

/// A single recorded sprite: sort key + quad.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteItem {
    pub key: SortKey,
    pub sprite: Sprite,
}

/// Recorded sprite stream for a frame.
///
/// This is the CPU-side [`SpriteBatch`]: primitives record into it, renderers
/// consume it in paint order.
///
/// Performance characteristics:
/// - `draw()` is O(1)
/// - paint-order iteration reuses an internal index buffer; no per-frame allocation once warmed
#[derive(Debug, Default)]
pub struct SpriteList {
    items: Vec<SpriteItem>,
    next_order: u32,
    mode: SortMode,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,
}

impl SpriteList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_mode(mode: SortMode) -> Self {
        Self { mode, ..Self::default() }
    }

    #[inline]
    pub fn mode(&self) -> SortMode {
        self.mode
    }

    #[inline]
    pub fn set_mode(&mut self, mode: SortMode) {
        if self.mode != mode {
            self.mode = mode;
            self.sorted_dirty = true;
        }
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[SpriteItem] {
        &self.items
    }

    /// Returns indices into `items` in paint order.
    ///
    /// This buffer is owned by `SpriteList` and reused across frames.
    pub fn indices_in_paint_order(&mut self) -> &[usize] {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }
        &self.sorted_indices
    }

    /// Iterates items in paint order without cloning.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &SpriteItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        let mode = self.mode;
        self.sorted_indices
            .sort_by(|&a, &b| self.items[a].key.compare(&self.items[b].key, mode));

        self.sorted_dirty = false;
    }
}

impl SpriteBatch for SpriteList {
    #[inline]
    fn draw(&mut self, sprite: Sprite) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(SpriteItem { key: SortKey::new(sprite.depth, order), sprite });
        self.sorted_dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::device::TextureId;
    use crate::paint::Color;

    fn sprite_at(x: f32, depth: f32) -> Sprite {
        Sprite::new(TextureId::new(0), Vec2::new(x, 0.0), Color::WHITE).with_depth(depth)
    }

    fn painted_x(list: &mut SpriteList) -> Vec<f32> {
        list.iter_in_paint_order().map(|item| item.sprite.position.x).collect()
    }

    fn recorded() -> SpriteList {
        let mut list = SpriteList::new();
        list.draw(sprite_at(0.0, 0.5));
        list.draw(sprite_at(1.0, 0.1));
        list.draw(sprite_at(2.0, 0.9));
        list.draw(sprite_at(3.0, 0.1));
        list
    }

    #[test]
    fn deferred_keeps_submission_order() {
        let mut list = recorded();
        assert_eq!(painted_x(&mut list), vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn front_to_back_is_ascending_and_stable() {
        let mut list = recorded();
        list.set_mode(SortMode::FrontToBack);
        assert_eq!(painted_x(&mut list), vec![1.0, 3.0, 0.0, 2.0]);
    }

    #[test]
    fn back_to_front_is_descending_and_stable() {
        let mut list = recorded();
        list.set_mode(SortMode::BackToFront);
        assert_eq!(painted_x(&mut list), vec![2.0, 0.0, 1.0, 3.0]);
    }

    #[test]
    fn clear_resets_items_and_order() {
        let mut list = recorded();
        list.clear();
        assert!(list.is_empty());
        assert!(list.indices_in_paint_order().is_empty());

        list.draw(sprite_at(9.0, 0.0));
        assert_eq!(list.items()[0].key.order, 0);
    }
}
