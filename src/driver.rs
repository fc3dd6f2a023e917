// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use anyhow::{Context, Result};
use dynamics::configuration::{maxwell_boltzmann_velocities, random_positions, wrap_positions};
use dynamics::observables::{
    configurational_temperature, kinetic_energy, kinetic_temperature, virial_pressure,
};
use dynamics::{p_approx, ForceEvaluator, PotentialType, Thermostat};
use glam::DVec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sim_config::SimulationConfig;
use std::ops::{Add, Div};

/// Instantaneous per-step measurements.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Total energy per particle.
    pub energy: f64,
    pub kinetic_temperature: f64,
    pub configurational_temperature: f64,
    pub pressure: f64,
    /// Number of interacting pairs.
    pub pairs: f64,
}

impl Add for Sample {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            energy: self.energy + other.energy,
            kinetic_temperature: self.kinetic_temperature + other.kinetic_temperature,
            configurational_temperature: self.configurational_temperature
                + other.configurational_temperature,
            pressure: self.pressure + other.pressure,
            pairs: self.pairs + other.pairs,
        }
    }
}

impl Div<f64> for Sample {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self {
            energy: self.energy / rhs,
            kinetic_temperature: self.kinetic_temperature / rhs,
            configurational_temperature: self.configurational_temperature / rhs,
            pressure: self.pressure / rhs,
            pairs: self.pairs / rhs,
        }
    }
}

/// A DPD fluid advanced by velocity Verlet with a pairwise thermostat after every step.
pub struct Simulation {
    config: SimulationConfig,
    evaluator: ForceEvaluator,
    thermostat: Box<dyn Thermostat + Send + Sync>,
    rng: StdRng,
    seed: u64,
    /// Reduced (box = 1) coordinates.
    positions: Vec<DVec3>,
    velocities: Vec<DVec3>,
    forces: Vec<DVec3>,
    total: PotentialType,
    pair_count: usize,
}

impl Simulation {
    /// Random starting configuration at the configured density and temperature.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);

        let evaluator = ForceEvaluator::new_with_threading(
            config.box_length(),
            config.strength(),
            config.multithreaded,
        )?;
        let thermostat = config.build_thermostat()?;

        let positions = random_positions(config.n, &mut rng);
        let velocities = maxwell_boltzmann_velocities(config.n, config.temperature, &mut rng)?;
        let result = evaluator
            .evaluate(&positions)
            .context("Initial force evaluation failed")?;

        log::info!(
            "{} particles, box {:.4}, a = {}, {} thermostat (gamma_step = {:.6}), seed {}",
            config.n,
            evaluator.box_length(),
            evaluator.strength(),
            thermostat.name(),
            config.gamma_step(),
            seed
        );

        Ok(Self {
            config,
            evaluator,
            thermostat,
            rng,
            seed,
            positions,
            velocities,
            forces: result.forces,
            total: result.total,
            pair_count: result.pairs.len(),
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn velocities(&self) -> &[DVec3] {
        &self.velocities
    }

    /// Kick, drift, force evaluation, kick, then the thermostat on the new pair list.
    pub fn step(&mut self) -> Result<()> {
        let dt = self.config.dt;
        let box_length = self.evaluator.box_length();

        for (v, f) in self.velocities.iter_mut().zip(self.forces.iter()) {
            *v += 0.5 * dt * *f;
        }
        for (r, v) in self.positions.iter_mut().zip(self.velocities.iter()) {
            *r += dt * *v / box_length;
        }
        wrap_positions(&mut self.positions);

        let result = self.evaluator.evaluate(&self.positions)?;
        for (v, f) in self.velocities.iter_mut().zip(result.forces.iter()) {
            *v += 0.5 * dt * *f;
        }
        self.thermostat
            .apply(&mut self.velocities, &result.pairs, &mut self.rng)?;

        self.forces = result.forces;
        self.total = result.total;
        self.pair_count = result.pairs.len();
        Ok(())
    }

    pub fn sample(&self) -> Result<Sample> {
        let n = self.config.n as f64;
        let volume = self.evaluator.box_length().powi(3);
        let kinetic_temperature = kinetic_temperature(&self.velocities)?;

        Ok(Sample {
            energy: (kinetic_energy(&self.velocities) + self.total.pot) / n,
            kinetic_temperature,
            configurational_temperature: configurational_temperature(&self.forces, &self.total),
            pressure: virial_pressure(
                self.config.density,
                kinetic_temperature,
                &self.total,
                volume,
            ),
            pairs: self.pair_count as f64,
        })
    }

    /// Pressure predicted by the empirical equation of state at the configured state point.
    pub fn approximate_pressure(&self) -> f64 {
        p_approx(
            self.evaluator.strength(),
            self.config.density,
            self.config.temperature,
        )
    }

    /// Runs `nstep` steps and returns the average of the samples taken after each.
    pub fn run_block(&mut self) -> Result<Sample> {
        let nstep = self.config.nstep;
        let mut sum = Sample::default();
        for _ in 0..nstep {
            self.step()?;
            sum = sum + self.sample()?;
        }
        Ok(sum / nstep as f64)
    }
}


// End of File
