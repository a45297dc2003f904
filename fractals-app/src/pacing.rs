use std::time::{Duration, Instant};

/// Monotonic time source for the frame loop.
///
/// `now` is the time elapsed since some fixed origin; only differences
/// between two readings are meaningful.
pub trait Clock {
    fn now(&self) -> Duration;
    fn sleep(&self, duration: Duration);
}

/// Wall-clock implementation backed by [`Instant`].
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Caps the loop at a target frame rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    frame_budget: Duration,
}

impl FramePacer {
    /// Budget is `1000 / fps` whole milliseconds, so 30 fps gives 33 ms.
    pub fn from_fps(fps: u32) -> Self {
        Self {
            frame_budget: Duration::from_millis(1000 / u64::from(fps.max(1))),
        }
    }

    pub fn frame_budget(&self) -> Duration {
        self.frame_budget
    }

    /// How long to block after a tick that took `elapsed`. Never negative.
    pub fn wait_for(&self, elapsed: Duration) -> Duration {
        self.frame_budget.saturating_sub(elapsed)
    }
}
