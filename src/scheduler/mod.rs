//! Timing control for the enemy side
//!
//! Enemy ants resolve on their own interval, decoupled from the allied
//! fixed timestep. [`EnemyCadence`] nudges that interval against the
//! observed frame rate so enemy resolution backs off when the host is
//! struggling and speeds up when there is headroom. [`WaveTimer`] schedules
//! the next enemy wave a random delay ahead.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Load-adaptive interval between enemy resolution passes
#[derive(Debug, Clone)]
pub struct EnemyCadence {
    interval: f32,
}

impl EnemyCadence {
    pub fn new() -> Self {
        Self { interval: 0.1 }
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    /// Adjust the interval from the observed frame rate in Hz
    ///
    /// Below 30 Hz the interval grows by 10 ms per pass; above 50 Hz it
    /// shrinks by the same amount, never below the 0.1 s floor.
    pub fn adjust(&mut self, frame_rate: f32) {
        if frame_rate < 30.0 {
            self.interval += 0.01;
        } else if frame_rate > 50.0 && self.interval > 0.1 {
            self.interval -= 0.01;
        }
    }
}

impl Default for EnemyCadence {
    fn default() -> Self {
        Self::new()
    }
}

/// Countdown to the next enemy wave
#[derive(Debug, Clone)]
pub struct WaveTimer {
    remaining: f32,
}

impl WaveTimer {
    /// Arm the timer with a random delay between 20 and 40 seconds
    pub fn new(rng: &mut ChaCha8Rng) -> Self {
        Self {
            remaining: rng.gen_range(20.0..40.0),
        }
    }

    /// Advance by `dt`; returns true when a wave is due and rearms itself
    pub fn advance(&mut self, dt: f32, rng: &mut ChaCha8Rng) -> bool {
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = rng.gen_range(20.0..40.0);
            true
        } else {
            false
        }
    }
}
