// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

// Pairwise stochastic thermostats.
//
// Both schemes change the velocities of the two particles of a pair by equal and opposite
// amounts along the pair's separation vector, so each pair update conserves momentum. Pairs
// sharing a particle do not commute, so every call draws one random permutation of the pair
// list and then walks it strictly in order, one pair at a time.

mod lowe;
mod shardlow;

pub use lowe::{lowe, LoweAndersen};
pub use shardlow::{shardlow, Shardlow};

use crate::error::{require_positive, require_probability, DpdError};
use crate::force::PairRecord;
use glam::DVec3;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

/// A velocity update driven by the pair list of the current step.
pub trait Thermostat {
    /// Update `velocities` in place using the pairs found by the force evaluation of the same
    /// step. Randomness, including the pair order, is drawn from `rng`.
    fn apply(
        &self,
        velocities: &mut [DVec3],
        pairs: &[PairRecord],
        rng: &mut dyn RngCore,
    ) -> Result<(), DpdError>;

    /// Short human-readable name.
    fn name(&self) -> &'static str;
}

/// Parameters shared by both thermostats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PairBath {
    pub temperature: f64,
    pub gamma_step: f64,
}

impl PairBath {
    pub fn new(temperature: f64, gamma_step: f64) -> Result<Self, DpdError> {
        Ok(Self {
            temperature: require_positive("temperature", temperature)?,
            gamma_step: require_probability("gamma_step", gamma_step)?,
        })
    }

    /// Standard deviation of the relative velocity along the pair axis.
    pub fn v_std(&self) -> f64 {
        (2.0 * self.temperature).sqrt()
    }
}

/// Fails if any pair refers to a particle the velocity array does not have.
pub(crate) fn check_pairs(len: usize, pairs: &[PairRecord]) -> Result<(), DpdError> {
    match pairs.iter().find(|p| p.i >= len || p.j >= len) {
        Some(p) => Err(DpdError::PairOutOfRange {
            i: p.i,
            j: p.j,
            len,
        }),
        None => Ok(()),
    }
}

/// A uniformly random ordering of `0..len`.
pub(crate) fn random_order<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..len).collect();
    order.shuffle(rng);
    order
}

/// Projection of the pair's relative velocity on its separation direction.
pub(crate) fn relative_projection(velocities: &[DVec3], pair: &PairRecord) -> f64 {
    (velocities[pair.i] - velocities[pair.j]).dot(pair.unit)
}

/// Change the relative velocity along the pair axis by `delta`, split equally between the two
/// particles.
pub(crate) fn exchange(velocities: &mut [DVec3], pair: &PairRecord, delta: f64) {
    let half = 0.5 * delta * pair.unit;
    velocities[pair.i] += half;
    velocities[pair.j] -= half;
}

// End of File
