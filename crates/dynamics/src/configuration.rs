// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Starting configurations and periodic wrapping, in reduced (box = 1) units.

use crate::error::{require_positive, DpdError};
use glam::DVec3;
use rand::Rng;
use rand_distr::StandardNormal;

/// `n` positions drawn uniformly from the unit box `[-0.5, 0.5)³`.
pub fn random_positions<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<DVec3> {
    (0..n)
        .map(|_| DVec3::new(rng.gen(), rng.gen(), rng.gen()) - DVec3::splat(0.5))
        .collect()
}

/// `n` velocities drawn from the Maxwell-Boltzmann distribution at `temperature`, shifted so
/// that the total momentum is zero.
pub fn maxwell_boltzmann_velocities<R: Rng + ?Sized>(
    n: usize,
    temperature: f64,
    rng: &mut R,
) -> Result<Vec<DVec3>, DpdError> {
    let v_std = require_positive("temperature", temperature)?.sqrt();

    let mut velocities: Vec<DVec3> = (0..n)
        .map(|_| {
            DVec3::new(
                rng.sample(StandardNormal),
                rng.sample(StandardNormal),
                rng.sample(StandardNormal),
            ) * v_std
        })
        .collect();

    if n > 0 {
        let mean = velocities.iter().copied().sum::<DVec3>() / n as f64;
        for v in velocities.iter_mut() {
            *v -= mean;
        }
    }

    Ok(velocities)
}

/// Maps every position back into the unit box by removing whole box lengths.
pub fn wrap_positions(positions: &mut [DVec3]) {
    for r in positions.iter_mut() {
        *r -= r.round();
    }
}


// End of File
