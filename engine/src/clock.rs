use std::cell::Cell;
use std::time::{Duration, Instant};

/// Monotonic time source. `now()` is measured from the clock's own epoch.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall-clock backed by `Instant`, so it never jumps with system clock adjustments.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.start.elapsed()
    }
}

/// A clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    pub fn new(start: Duration) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }

    pub fn advance(&self, dt: Duration) {
        self.now.set(self.now.get().saturating_add(dt));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Advances by a fixed step on every read. Gives headless runs a deterministic
/// frame rate independent of how fast the host executes them.
#[derive(Debug)]
pub struct FixedStepClock {
    step: Duration,
    now: Cell<Duration>,
}

impl FixedStepClock {
    pub fn new(step: Duration) -> Self {
        Self {
            step,
            now: Cell::new(Duration::ZERO),
        }
    }

    pub fn per_second(frames: u32) -> Self {
        Self::new(Duration::from_secs(1) / frames.max(1))
    }
}

impl Clock for FixedStepClock {
    fn now(&self) -> Duration {
        let t = self.now.get();
        self.now.set(t.saturating_add(self.step));
        t
    }
}
