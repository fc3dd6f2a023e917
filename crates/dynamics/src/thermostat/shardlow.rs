// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

// Shardlow splitting for the DPD fluctuation-dissipation terms.
//
// Every pair is updated, in two half-steps sharing one normal draw v_new:
//
//   sqrt_prob = sqrt(gamma_step) (1 - r),  prob = sqrt_prob²
//   first:   Δ = sqrt_prob v_new - prob v_old
//   second:  Δ = (sqrt_prob v_new - prob v_old) / (1 + prob)
//
// v_old is the current relative velocity along the pair axis and is re-read before each
// half-step, since earlier updates may already have changed it.

use super::{check_pairs, exchange, random_order, relative_projection, PairBath, Thermostat};
use crate::error::DpdError;
use crate::force::PairRecord;
use glam::DVec3;
use rand::{Rng, RngCore};
use rand_distr::StandardNormal;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shardlow {
    bath: PairBath,
}

impl Shardlow {
    /// `gamma_step` is the friction coefficient times half the time step.
    pub fn new(temperature: f64, gamma_step: f64) -> Result<Self, DpdError> {
        Ok(Self {
            bath: PairBath::new(temperature, gamma_step)?,
        })
    }

    pub fn temperature(&self) -> f64 {
        self.bath.temperature
    }

    pub fn gamma_step(&self) -> f64 {
        self.bath.gamma_step
    }

    pub fn apply_with<R: Rng + ?Sized>(
        &self,
        velocities: &mut [DVec3],
        pairs: &[PairRecord],
        rng: &mut R,
    ) -> Result<(), DpdError> {
        check_pairs(velocities.len(), pairs)?;

        let sqrt_gamma_step = self.bath.gamma_step.sqrt();
        let v_std = self.bath.v_std();

        for p in random_order(pairs.len(), rng) {
            let pair = &pairs[p];

            let sqrt_prob = sqrt_gamma_step * pair.weight();
            let prob = sqrt_prob * sqrt_prob;
            let v_new = v_std * rng.sample::<f64, _>(StandardNormal);

            // First half step
            let v_old = relative_projection(velocities, pair);
            exchange(velocities, pair, sqrt_prob * v_new - prob * v_old);

            // Second half step
            let v_old = relative_projection(velocities, pair);
            exchange(
                velocities,
                pair,
                (sqrt_prob * v_new - prob * v_old) / (1.0 + prob),
            );
        }

        log::debug!("Shardlow: updated {} pairs", pairs.len());
        Ok(())
    }
}

impl Thermostat for Shardlow {
    fn apply(
        &self,
        velocities: &mut [DVec3],
        pairs: &[PairRecord],
        rng: &mut dyn RngCore,
    ) -> Result<(), DpdError> {
        self.apply_with(velocities, pairs, rng)
    }

    fn name(&self) -> &'static str {
        "Shardlow"
    }
}

/// Updates velocities using the Shardlow integration algorithm.
pub fn shardlow<R: Rng + ?Sized>(
    temperature: f64,
    gamma_step: f64,
    velocities: &mut [DVec3],
    pairs: &[PairRecord],
    rng: &mut R,
) -> Result<(), DpdError> {
    Shardlow::new(temperature, gamma_step)?.apply_with(velocities, pairs, rng)
}

// End of File
