use std::time::{Duration, Instant};

pub const TARGET_FPS: u32 = 30;
/// Longest step handed to the simulation.
pub const MAX_FRAME_TIME: Duration = Duration::from_millis(100);

/// Wall-clock delta source.  Pacing itself is left to the window.
pub struct FrameClock {
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous tick, capped at [`MAX_FRAME_TIME`].
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let dt = now.saturating_duration_since(self.last).min(MAX_FRAME_TIME);
        self.last = now;
        dt.as_secs_f32()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_elapsed_seconds() {
        let start = Instant::now();
        let mut clock = FrameClock { last: start };
        let dt = clock.tick_at(start + Duration::from_millis(33));
        assert!((dt - 0.033).abs() < 1e-6);
    }

    #[test]
    fn long_gaps_are_capped() {
        let start = Instant::now();
        let mut clock = FrameClock { last: start };
        assert!((clock.tick_at(start + Duration::from_secs(5)) - 0.1).abs() < 1e-6);
        // clock restarts from the late instant, not from the capped one
        let later = start + Duration::from_secs(5);
        assert!((clock.tick_at(later + Duration::from_millis(20)) - 0.02).abs() < 1e-6);
    }
}
