//! Blink timer state machine.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use super::types::{BlinkPhase, BlinkTiming};

/// Per-avatar blink state, advanced once per frame.
#[derive(Debug, Clone)]
pub struct BlinkTimer {
    timing: BlinkTiming,
    phase: BlinkPhase,
    /// Time spent in the current phase.
    elapsed: f64,
    /// Waiting time before the next blink starts.
    threshold: f64,
    cycles: u64,
    rng: StdRng,
}

impl BlinkTimer {
    /// Create a timer. A `seed` makes the blink schedule reproducible.
    pub fn new(timing: BlinkTiming, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut timer = Self {
            timing,
            phase: BlinkPhase::Waiting,
            elapsed: 0.0,
            threshold: 0.0,
            cycles: 0,
            rng,
        };
        timer.threshold = timer.draw_threshold();
        timer
    }

    /// Waiting time drawn so that wait plus blink fits in `max_interval`.
    fn draw_threshold(&mut self) -> f64 {
        let lo = self.timing.min_interval;
        let blink = self.timing.close_duration + self.timing.open_duration;
        let hi = (self.timing.max_interval - blink).max(lo);
        if hi > lo {
            self.rng.gen_range(lo..=hi)
        } else {
            lo
        }
    }

    /// Advance by `dt` seconds. Negative or non-finite steps are ignored.
    pub fn advance(&mut self, dt: f64) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.elapsed += dt;
        loop {
            match self.phase {
                BlinkPhase::Waiting if self.elapsed >= self.threshold => {
                    self.elapsed -= self.threshold;
                    self.phase = BlinkPhase::Closing;
                }
                BlinkPhase::Closing if self.elapsed >= self.timing.close_duration => {
                    self.elapsed -= self.timing.close_duration;
                    self.phase = BlinkPhase::Opening;
                }
                BlinkPhase::Opening if self.elapsed >= self.timing.open_duration => {
                    self.phase = BlinkPhase::Waiting;
                    self.elapsed = 0.0;
                    self.threshold = self.draw_threshold();
                    self.cycles += 1;
                    trace!(
                        cycles = self.cycles,
                        next = self.threshold,
                        "blink cycle complete"
                    );
                    break;
                }
                _ => break,
            }
        }
    }

    /// Eye openness for this frame given the mood's resting openness.
    pub fn openness(&self, baseline: f32) -> f32 {
        let closed = self.timing.closed_openness.min(baseline);
        match self.phase {
            BlinkPhase::Waiting => baseline,
            BlinkPhase::Closing => {
                let t = (self.elapsed / self.timing.close_duration).clamp(0.0, 1.0) as f32;
                baseline + (closed - baseline) * t
            }
            BlinkPhase::Opening => {
                let t = (self.elapsed / self.timing.open_duration).clamp(0.0, 1.0) as f32;
                closed + (baseline - closed) * t
            }
        }
    }

    pub fn phase(&self) -> BlinkPhase {
        self.phase
    }

    /// Time accumulated in the current phase.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Waiting time drawn for the upcoming blink.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Number of completed close/open cycles.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn timing(&self) -> &BlinkTiming {
        &self.timing
    }
}
