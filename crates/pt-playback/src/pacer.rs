//! Rate limiting between ticks.

use pt_core::Real;
use std::time::{Duration, Instant};

/// Suspension point of the tick loop: blocks until the next tick is due at
/// the given rate. The rate is re-read every tick, so rate-change commands
/// take effect immediately.
pub trait Pacer {
    fn wait(&mut self, rate_tps: Real);
}

/// Wall-clock pacer. Tracks a deadline instead of sleeping a fixed period
/// so scheduling jitter does not accumulate into drift.
#[derive(Debug, Default)]
pub struct SleepPacer {
    next_deadline: Option<Instant>,
}

impl SleepPacer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Pacer for SleepPacer {
    fn wait(&mut self, rate_tps: Real) {
        let now = Instant::now();
        let period = Duration::from_secs_f64(1.0 / rate_tps.max(1e-6));
        let deadline = self.next_deadline.unwrap_or(now);
        if deadline > now {
            std::thread::sleep(deadline - now);
        }
        // If we fell behind, restart from now rather than bursting to
        // catch up.
        self.next_deadline = Some(deadline.max(now) + period);
    }
}

/// Pacer that never blocks; keeps tests and headless batch runs fast.
#[derive(Debug, Default)]
pub struct NoopPacer;

impl Pacer for NoopPacer {
    fn wait(&mut self, _rate_tps: Real) {}
}
