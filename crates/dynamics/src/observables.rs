// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Instantaneous observables of a DPD configuration. Particle masses are 1.

use crate::error::DpdError;
use crate::potential::PotentialType;
use glam::DVec3;

pub fn kinetic_energy(velocities: &[DVec3]) -> f64 {
    0.5 * velocities.iter().map(|v| v.length_squared()).sum::<f64>()
}

pub fn total_momentum(velocities: &[DVec3]) -> DVec3 {
    velocities.iter().copied().sum()
}

/// Kinetic temperature `2 KE / (3 (n - 1))`, allowing for the conserved total momentum.
pub fn kinetic_temperature(velocities: &[DVec3]) -> Result<f64, DpdError> {
    let n = velocities.len();
    if n < 2 {
        return Err(DpdError::TooFewParticles(n));
    }
    Ok(2.0 * kinetic_energy(velocities) / (3.0 * (n - 1) as f64))
}

/// Configurational temperature `Σ|f|² / ∇²U`, from scaled forces and totals.
pub fn configurational_temperature(forces: &[DVec3], total: &PotentialType) -> f64 {
    let f_sq: f64 = forces.iter().map(|f| f.length_squared()).sum();
    f_sq / total.lap
}

/// Virial pressure `rho T + W / V`, where `W` is the scaled virial total.
pub fn virial_pressure(density: f64, temperature: f64, total: &PotentialType, volume: f64) -> f64 {
    density * temperature + total.vir / volume
}

// End of File
