// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

// Lowe-Andersen pairwise thermostat.
//
// Each pair collides with probability gamma_step. A collision replaces the component of the
// relative velocity along the pair axis with a fresh draw from N(0, 2T), leaving the
// perpendicular components and the pair's centre-of-mass velocity untouched.

use super::{check_pairs, exchange, random_order, relative_projection, PairBath, Thermostat};
use crate::error::DpdError;
use crate::force::PairRecord;
use glam::DVec3;
use rand::{Rng, RngCore};
use rand_distr::StandardNormal;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoweAndersen {
    bath: PairBath,
}

impl LoweAndersen {
    /// `gamma_step` is the per-step collision probability of each pair.
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

    /// Applies the thermostat and returns the number of collisions that took place.
    pub fn apply_counting<R: Rng + ?Sized>(
        &self,
        velocities: &mut [DVec3],
        pairs: &[PairRecord],
        rng: &mut R,
    ) -> Result<usize, DpdError> {
        check_pairs(velocities.len(), pairs)?;

        let v_std = self.bath.v_std();
        let mut collisions = 0;

        for p in random_order(pairs.len(), rng) {
            let zeta: f64 = rng.gen();
            if zeta < self.bath.gamma_step {
                let pair = &pairs[p];
                let v_old = relative_projection(velocities, pair);
                let v_new = v_std * rng.sample::<f64, _>(StandardNormal);
                exchange(velocities, pair, v_new - v_old);
                collisions += 1;
            }
        }

        log::debug!("Lowe-Andersen: {} of {} pairs collided", collisions, pairs.len());
        Ok(collisions)
    }
}

impl Thermostat for LoweAndersen {
    fn apply(
        &self,
        velocities: &mut [DVec3],
        pairs: &[PairRecord],
        rng: &mut dyn RngCore,
    ) -> Result<(), DpdError> {
        self.apply_counting(velocities, pairs, rng).map(|_| ())
    }

    fn name(&self) -> &'static str {
        "Lowe-Andersen"
    }
}

/// Updates velocities using the pairwise Lowe-Andersen thermostat.
pub fn lowe<R: Rng + ?Sized>(
    temperature: f64,
    gamma_step: f64,
    velocities: &mut [DVec3],
    pairs: &[PairRecord],
    rng: &mut R,
) -> Result<(), DpdError> {
    LoweAndersen::new(temperature, gamma_step)?
        .apply_counting(velocities, pairs, rng)
        .map(|_| ())
}

// End of File
