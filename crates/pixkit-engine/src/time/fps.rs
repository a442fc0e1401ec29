use std::time::Duration;

const WINDOW: Duration = Duration::from_secs(1);

/// Counts updates and draws, publishing per-second rates.
///
/// `update` accumulates elapsed time; each time a full second has accumulated
/// the counts are published, reset, and one second is subtracted so the
/// remainder carries into the next window.
#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    timer: Duration,
    updates: u32,
    draws: u32,
    update_fps: u32,
    draw_fps: u32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Call once per update step with that step's elapsed game time.
    pub fn update(&mut self, elapsed: Duration) {
        self.updates += 1;
        self.timer += elapsed;

        if self.timer < WINDOW {
            return;
        }

        self.update_fps = self.updates;
        self.draw_fps = self.draws;
        self.updates = 0;
        self.draws = 0;
        self.timer -= WINDOW;

        log::trace!("fps: update={} draw={}", self.update_fps, self.draw_fps);
    }

    /// Call once per rendered frame.
    #[inline]
    pub fn draw(&mut self) {
        self.draws += 1;
    }

    /// Updates in the last completed one-second window.
    #[inline]
    pub fn update_fps(&self) -> u32 {
        self.update_fps
    }

    /// Draws in the last completed one-second window.
    #[inline]
    pub fn draw_fps(&self) -> u32 {
        self.draw_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_published_before_one_second() {
        let mut fps = FpsCounter::new();
        for _ in 0..10 {
            fps.update(Duration::from_millis(50));
            fps.draw();
        }
        assert_eq!(fps.update_fps(), 0);
        assert_eq!(fps.draw_fps(), 0);
    }

    #[test]
    fn publishes_counts_after_one_second() {
        let mut fps = FpsCounter::new();
        for i in 0..30 {
            if i < 25 {
                fps.draw();
            }
            let step = if i == 29 { 130 } else { 30 };
            fps.update(Duration::from_millis(step));
        }
        assert_eq!(fps.update_fps(), 30);
        assert_eq!(fps.draw_fps(), 25);
    }

    #[test]
    fn counters_reset_and_remainder_carries() {
        let mut fps = FpsCounter::new();
        fps.draw();
        fps.update(Duration::from_millis(1250));
        assert_eq!((fps.update_fps(), fps.draw_fps()), (1, 1));

        // 250ms carried; 750ms more closes the next window.
        fps.update(Duration::from_millis(700));
        assert_eq!(fps.update_fps(), 1);
        fps.draw();
        fps.draw();
        fps.update(Duration::from_millis(50));
        assert_eq!((fps.update_fps(), fps.draw_fps()), (2, 2));
    }

    #[test]
    fn driven_by_frame_clock_elapsed() {
        use std::time::Instant;

        use crate::time::FrameClock;

        let mut clock = FrameClock::new();
        let start = Instant::now();
        clock.tick_at(start);

        let mut fps = FpsCounter::new();
        for i in 1..=50u32 {
            let ft = clock.tick_at(start + Duration::from_millis(20 * i as u64));
            assert_eq!(ft.elapsed, Duration::from_millis(20));
            if i % 2 == 0 {
                fps.draw();
            }
            fps.update(ft.elapsed);
        }

        assert_eq!(fps.update_fps(), 50);
        assert_eq!(fps.draw_fps(), 25);
    }

    #[test]
    fn published_values_hold_until_next_window() {
        let mut fps = FpsCounter::new();
        fps.update(Duration::from_secs(1));
        assert_eq!(fps.update_fps(), 1);
        fps.update(Duration::from_millis(10));
        assert_eq!(fps.update_fps(), 1);
    }
}
