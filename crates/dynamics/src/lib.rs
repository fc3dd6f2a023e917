// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! # Dissipative Particle Dynamics Kernel
//!
//! Soft repulsive pair forces for point particles of unit diameter in a periodic cubic box,
//! and the two pairwise thermostats that go with them.  A driver calls
//! [`ForceEvaluator::evaluate`] once per step, integrates with the returned forces, and then
//! hands the returned pair list to one [`Thermostat`]:
//!
//! - [`LoweAndersen`] resamples the relative velocity of each pair with probability
//!   `gamma_step`;
//! - [`Shardlow`] applies a two half-step splitting of the DPD friction and noise to every
//!   pair.
//!
//! Positions are passed in reduced units where the box edge is 1.  Thermostats draw all their
//! randomness from a caller-supplied generator, so seeded runs are reproducible.

mod error;
mod potential;

pub mod configuration;
pub mod force;
pub mod observables;
pub mod pressure;
pub mod thermostat;

pub use error::DpdError;
pub use force::{force, positions_from_rows, ForceEvaluator, ForceResult, PairRecord, CUTOFF};
pub use potential::PotentialType;
pub use pressure::p_approx;
pub use thermostat::{lowe, shardlow, LoweAndersen, Shardlow, Thermostat};

/// A module which is typically glob imported.
pub mod prelude {
    pub use super::{
        DpdError, ForceEvaluator, ForceResult, LoweAndersen, PairRecord, PotentialType, Shardlow,
        Thermostat,
    };
}

// End of File
