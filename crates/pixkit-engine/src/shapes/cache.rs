use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::rc::Rc;

use crate::coords::Vec2;

use super::{arc_points, circle_points};

/// Shared, immutable point list handed out by [`ShapeCache`].
pub type PointList = Rc<[Vec2]>;

/// Shape cache configuration.
#[derive(Debug, Clone, Default)]
pub struct ShapeCacheConfig {
    /// Maximum entries per shape kind. `None` keeps every entry.
    ///
    /// When full, the oldest inserted entry is evicted first. `Some(0)` disables
    /// caching entirely (every call recomputes).
    pub capacity: Option<usize>,
}

/// Hit/miss counters, cumulative since construction or the last [`ShapeCache::clear`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

// Float parameters are keyed by bit pattern so only identical inputs share an entry.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
struct CircleKey {
    radius: u32,
    sides: u32,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
struct ArcKey {
    radius: u32,
    sides: u32,
    start: u32,
    sweep: u32,
}

/// Insertion-ordered map with optional FIFO eviction.
#[derive(Debug)]
struct Memo<K> {
    entries: HashMap<K, PointList>,
    order: VecDeque<K>,
    capacity: Option<usize>,
}

impl<K: Copy + Eq + Hash> Memo<K> {
    fn new(capacity: Option<usize>) -> Self {
        Self { entries: HashMap::new(), order: VecDeque::new(), capacity }
    }

    fn get(&self, key: &K) -> Option<PointList> {
        self.entries.get(key).cloned()
    }

    fn insert(&mut self, key: K, points: Vec<Vec2>) -> PointList {
        let points: PointList = points.into();

        if let Some(cap) = self.capacity {
            if cap == 0 {
                return points;
            }
            while self.entries.len() >= cap {
                let Some(oldest) = self.order.pop_front() else { break };
                self.entries.remove(&oldest);
            }
        }

        self.order.push_back(key);
        self.entries.insert(key, Rc::clone(&points));
        points
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

/// Memoizes circle and arc point lists.
///
/// Entries are immutable once inserted; callers receive shared [`PointList`]s, so
/// a repeated lookup returns the same allocation. Not thread-safe (`Rc`); own one
/// cache per render thread.
#[derive(Debug)]
pub struct ShapeCache {
    circles: Memo<CircleKey>,
    arcs: Memo<ArcKey>,
    stats: CacheStats,
}

impl ShapeCache {
    pub fn new() -> Self {
        Self::with_config(ShapeCacheConfig::default())
    }

    pub fn with_config(config: ShapeCacheConfig) -> Self {
        Self {
            circles: Memo::new(config.capacity),
            arcs: Memo::new(config.capacity),
            stats: CacheStats::default(),
        }
    }

    /// Returns the closed loop for a circle of `radius` with `sides` vertices.
    pub fn circle(&mut self, radius: f32, sides: u32) -> PointList {
        let key = CircleKey { radius: radius.to_bits(), sides };
        if let Some(points) = self.circles.get(&key) {
            self.stats.hits += 1;
            return points;
        }

        self.stats.misses += 1;
        log::trace!("shape cache: circle r={radius} sides={sides}");
        self.circles.insert(key, circle_points(radius, sides))
    }

    /// Returns the open polyline for an arc; see [`arc_points`] for quantization.
    pub fn arc(&mut self, radius: f32, sides: u32, starting_angle: f32, sweep: f32) -> PointList {
        let key = ArcKey {
            radius: radius.to_bits(),
            sides,
            start: starting_angle.to_bits(),
            sweep: sweep.to_bits(),
        };
        if let Some(points) = self.arcs.get(&key) {
            self.stats.hits += 1;
            return points;
        }

        let circle = self.circle(radius, sides);
        self.stats.misses += 1;
        log::trace!(
            "shape cache: arc r={radius} sides={sides} start={starting_angle} sweep={sweep}"
        );
        self.arcs.insert(key, arc_points(&circle, sides, starting_angle, sweep))
    }

    /// Total cached entries (circles + arcs).
    pub fn len(&self) -> usize {
        self.circles.len() + self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Drops every entry and resets the counters. Outstanding lists stay valid.
    pub fn clear(&mut self) {
        self.circles.clear();
        self.arcs.clear();
        self.stats = CacheStats::default();
    }
}

impl Default for ShapeCache {
    fn default() -> Self {
        Self::new()
    }
}
