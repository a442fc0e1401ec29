use core::cmp::Ordering;

use super::SortMode;

/// Sort key for recorded sprites.
///
/// Ordering rules depend on [`SortMode`]:
/// - `Deferred`: insertion order only
/// - `FrontToBack`: ascending depth, then insertion order
/// - `BackToFront`: descending depth, then insertion order
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SortKey {
    pub depth: f32,
    /// Insertion index, keeps ties stable.
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(depth: f32, order: u32) -> Self {
        Self { depth, order }
    }

    #[inline]
    pub fn compare(&self, other: &Self, mode: SortMode) -> Ordering {
        let by_depth = match mode {
            SortMode::Deferred => Ordering::Equal,
            SortMode::FrontToBack => self.depth.total_cmp(&other.depth),
            SortMode::BackToFront => other.depth.total_cmp(&self.depth),
        };
        by_depth.then(self.order.cmp(&other.order))
    }
}
