use std::time::{Duration, Instant};

/// Lower delta-time clamp; tight loops on some platforms tick with zero
/// elapsed time.
const DT_MIN: Duration = Duration::from_micros(100);

/// Upper delta-time clamp applied after long stalls (debugger, minimize).
const DT_MAX: Duration = Duration::from_millis(250);

/// Frame timing snapshot handed to the app each frame.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped to the clock bounds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Index of this frame, starting at 0.
    pub frame_index: u64,
}

impl FrameTime {
    /// Instantaneous frames-per-second estimate for this tick.
    ///
    /// `dt` is clamped away from zero, so the value is always finite.
    #[inline]
    pub fn fps(self) -> f32 {
        1.0 / self.dt
    }
}

/// Per-window frame clock producing [`FrameTime`] snapshots.
///
/// Delta time is clamped so a paused, minimized, or debugger-stalled app does
/// not feed pathological values downstream.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
        }
    }

    /// Resets the baseline, e.g. when resuming from suspension.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns the snapshot for the new frame.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last).clamp(DT_MIN, DT_MAX);
        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
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
    fn frame_index_starts_at_zero_and_increments() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.tick().frame_index, 2);
    }

    #[test]
    fn dt_stays_within_the_clamps() {
        let mut clock = FrameClock::new();
        for _ in 0..5 {
            let ft = clock.tick();
            assert!(ft.dt >= DT_MIN.as_secs_f32());
            assert!(ft.dt <= DT_MAX.as_secs_f32());
        }
    }

    #[test]
    fn fps_is_the_reciprocal_of_dt() {
        let mut clock = FrameClock::new();
        let ft = clock.tick();
        assert!((ft.fps() * ft.dt - 1.0).abs() < 1e-3);
    }

    #[test]
    fn reset_does_not_disturb_the_frame_index() {
        let mut clock = FrameClock::new();
        clock.tick();
        clock.reset();
        assert_eq!(clock.tick().frame_index, 1);
    }
}
