/// How a viewer schedules its own repaints.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RedrawMode {
    /// Draw one self-initiated frame, then rest.
    ///
    /// Platform-initiated repaints (resize, expose) still draw.
    Once,

    /// Request a new redraw after every driven frame, indefinitely.
    Continuous,
}

/// Redraw bookkeeping for one window.
///
/// The scheduler decides self-initiated redraw requests only; the runtime
/// consults [`RedrawScheduler::should_request`] at startup and again from
/// inside every driven frame, the way a frame callback re-arms itself.
/// Platform repaints bypass it.
#[derive(Debug, Clone)]
pub struct RedrawScheduler {
    mode: RedrawMode,
    requested: u64,
    presented: u64,
}

impl RedrawScheduler {
    pub fn new(mode: RedrawMode) -> Self {
        Self {
            mode,
            requested: 0,
            presented: 0,
        }
    }

    /// True if the viewer should ask the platform for another frame now.
    pub fn should_request(&self) -> bool {
        match self.mode {
            RedrawMode::Continuous => true,
            RedrawMode::Once => self.requested == 0,
        }
    }

    /// Records a redraw request handed to the platform.
    pub fn note_requested(&mut self) {
        self.requested += 1;
    }

    /// Records one driven frame.
    pub fn frame_presented(&mut self) {
        self.presented += 1;
    }

    /// Self-initiated requests so far.
    #[inline]
    pub fn requested(&self) -> u64 {
        self.requested
    }

    /// Driven frames so far.
    #[inline]
    pub fn presented(&self) -> u64 {
        self.presented
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drives `frames` simulated frames the way the runtime does: an initial
    /// request, then one consultation from inside each frame.
    fn simulate(mode: RedrawMode, frames: u32) -> RedrawScheduler {
        let mut s = RedrawScheduler::new(mode);
        if s.should_request() {
            s.note_requested();
        }
        for _ in 0..frames {
            s.frame_presented();
            if s.should_request() {
                s.note_requested();
            }
        }
        s
    }

    #[test]
    fn continuous_reschedules_after_every_frame() {
        let s = simulate(RedrawMode::Continuous, 60);
        assert_eq!(s.presented(), 60);
        assert_eq!(s.requested(), 61);
    }

    #[test]
    fn once_requests_exactly_one_frame() {
        let s = simulate(RedrawMode::Once, 60);
        assert_eq!(s.requested(), 1);
    }

    #[test]
    fn once_stops_asking_after_the_first_request() {
        let mut s = RedrawScheduler::new(RedrawMode::Once);
        assert!(s.should_request());
        s.note_requested();
        assert!(!s.should_request());
        s.frame_presented();
        assert!(!s.should_request());
    }

    #[test]
    fn continuous_always_asks() {
        let mut s = RedrawScheduler::new(RedrawMode::Continuous);
        for _ in 0..10 {
            assert!(s.should_request());
            s.note_requested();
            s.frame_presented();
        }
    }
}
