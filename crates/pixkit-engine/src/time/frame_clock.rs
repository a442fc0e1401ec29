use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Clamped time since the previous tick, in seconds.
    pub dt: f32,

    /// Same clamped delta as `dt`, as a `Duration`.
    pub elapsed: Duration,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    pub frame_index: u64,
}

/// Produces `FrameTime` snapshots for one game loop.
///
/// Delta time is clamped so a debugger pause or a stalled frame does not feed a
/// huge step into update logic.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Clock with default clamps: 100us minimum, 250ms maximum.
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the baseline, e.g. when resuming from suspension.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    /// Advances the clock to `now`. Earlier timestamps count as zero elapsed.
    pub fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            elapsed: dt,
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_is_measured_between_ticks() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.tick_at(start);
        let ft = clock.tick_at(start + Duration::from_millis(16));
        assert_eq!(ft.elapsed, Duration::from_millis(16));
        assert!((ft.dt - 0.016).abs() < 1e-6);
        assert_eq!(ft.frame_index, 1);
    }

    #[test]
    fn delta_is_clamped() {
        let mut clock = FrameClock::with_clamps(Duration::from_millis(1), Duration::from_millis(100));
        let start = Instant::now();
        clock.tick_at(start);

        let long = clock.tick_at(start + Duration::from_secs(5));
        assert_eq!(long.elapsed, Duration::from_millis(100));

        let same = clock.tick_at(start + Duration::from_secs(5));
        assert_eq!(same.elapsed, Duration::from_millis(1));
    }

    #[test]
    fn going_backwards_counts_as_minimum() {
        let mut clock = FrameClock::with_clamps(Duration::from_millis(2), Duration::from_millis(100));
        let start = Instant::now();
        clock.tick_at(start + Duration::from_millis(50));
        let ft = clock.tick_at(start);
        assert_eq!(ft.elapsed, Duration::from_millis(2));
    }
}
