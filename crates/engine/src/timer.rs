//! Timers for the gravity loop
//!
//! Both timers are plain accumulators advanced by the caller with elapsed
//! milliseconds, so they are deterministic under test. [`PollClock`] turns
//! wall time into those elapsed values for the real loop.

use std::time::{Duration, Instant};

/// Cancellable periodic gravity timer.
///
/// While armed it accumulates elapsed time and fires once the total reaches
/// the interval, then starts over from zero. A cancelled timer never fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GravityTimer {
    interval_ms: u32,
    elapsed_ms: u32,
    armed: bool,
}

impl GravityTimer {
    /// A disarmed timer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the timer with an empty accumulator.
    pub fn arm(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms;
        self.elapsed_ms = 0;
        self.armed = true;
    }

    /// Stop the timer and drop any accumulated time.
    pub fn cancel(&mut self) {
        self.armed = false;
        self.elapsed_ms = 0;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Change the interval, keeping the time accumulated so far.
    pub fn set_interval(&mut self, interval_ms: u32) {
        self.interval_ms = interval_ms;
    }

    /// Restart the current interval from zero.
    pub fn reset_elapsed(&mut self) {
        self.elapsed_ms = 0;
    }

    /// Add elapsed time. Returns `true` if the timer fired.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        if !self.armed {
            return false;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms = 0;
            return true;
        }
        false
    }
}

/// One-shot delayed step, used for the lock that follows a hard drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeferredStep {
    remaining_ms: Option<u32>,
}

impl DeferredStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the step `delay_ms` from now, replacing any pending one.
    pub fn schedule(&mut self, delay_ms: u32) {
        self.remaining_ms = Some(delay_ms);
    }

    pub fn cancel(&mut self) {
        self.remaining_ms = None;
    }

    pub fn is_pending(&self) -> bool {
        self.remaining_ms.is_some()
    }

    /// Add elapsed time. Returns `true` exactly once, when the delay has passed.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        let Some(remaining) = self.remaining_ms else {
            return false;
        };
        let remaining = remaining.saturating_sub(elapsed_ms);
        if remaining == 0 {
            self.remaining_ms = None;
            true
        } else {
            self.remaining_ms = Some(remaining);
            false
        }
    }
}

/// Samples wall time for the polling loop.
#[derive(Debug, Clone, Copy)]
pub struct PollClock {
    period: Duration,
    last: Instant,
}

impl PollClock {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period: Duration::from_millis(period_ms.max(1) as u64),
            last: Instant::now(),
        }
    }

    /// Time left until the next poll is due.
    pub fn timeout(&self) -> Duration {
        self.period
            .checked_sub(self.last.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Whether a full period has passed since the last sample.
    pub fn is_due(&self) -> bool {
        self.last.elapsed() >= self.period
    }

    /// Milliseconds since the previous sample; restarts the measurement.
    pub fn sample_ms(&mut self) -> u32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX)
    }
}
