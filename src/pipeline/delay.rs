//! Simulated support delays
//!
//! `Days_To_Support` is not observed in the source data; it is simulated.
//! The draw contract is fixed so that reruns and other implementations that
//! follow it produce the same sequence:
//!
//! * generator: `StdRng::seed_from_u64(seed)` (default seed 42);
//! * one draw per raw row, in input order, including rows that are later
//!   dropped by the state rule;
//! * each draw takes two uniform `f64`s `u1, u2` in `[0, 1)` and applies the
//!   Box-Muller transform `z = sqrt(-2 ln(1 - u1)) * cos(2 pi u2)`;
//! * the delay is `mean + std_dev * z` rounded half to even, then clamped to
//!   at least `min_days`.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::DelayConfig;

/// Seeded generator of simulated delays
#[derive(Debug, Clone)]
pub struct DelaySampler {
    rng: StdRng,
    mean: f64,
    std_dev: f64,
    min_days: u32,
    draws: u64,
}

impl DelaySampler {
    /// Create a sampler seeded from the configuration
    #[must_use]
    pub fn new(config: &DelayConfig) -> Self {
        Self::from_rng(StdRng::seed_from_u64(config.seed), config)
    }

    /// Create a sampler around an explicitly constructed generator
    #[must_use]
    pub fn from_rng(rng: StdRng, config: &DelayConfig) -> Self {
        Self {
            rng,
            mean: config.mean,
            std_dev: config.std_dev,
            min_days: config.min_days,
            draws: 0,
        }
    }

    /// Next unrounded normal sample
    pub fn next_normal(&mut self) -> f64 {
        let u1: f64 = self.rng.random();
        let u2: f64 = self.rng.random();
        self.draws += 1;

        let radius = (-2.0 * (1.0 - u1).ln()).sqrt();
        self.mean + self.std_dev * radius * (TAU * u2).cos()
    }

    /// Next delay in whole days, never below `min_days`
    pub fn next_days(&mut self) -> u32 {
        let rounded = self.next_normal().round_ties_even();
        if rounded < f64::from(self.min_days) {
            self.min_days
        } else {
            // Saturating float-to-int cast
            rounded as u32
        }
    }

    /// Number of draws taken so far
    #[must_use]
    pub const fn draws(&self) -> u64 {
        self.draws
    }
}
