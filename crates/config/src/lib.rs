// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

//! Run parameters for a DPD simulation, read from TOML.
//!
//! Every field has a default, so an empty file is a valid configuration:
//!
//! ```toml
//! n = 300
//! density = 3.0
//! temperature = 1.0
//! gamma = 4.5
//! dt = 0.02
//! thermostat = "shardlow"
//! ```

use dynamics::{DpdError, LoweAndersen, Shardlow, Thermostat};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error(transparent)]
    Parameter(#[from] DpdError),
}

/// Which pairwise thermostat the driver applies after each force evaluation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThermostatKind {
    #[default]
    Lowe,
    Shardlow,
}

impl ThermostatKind {
    /// The per-step parameter each scheme expects for friction `gamma` and time step `dt`:
    /// the collision probability `1 - exp(-gamma dt)` for Lowe-Andersen, and `gamma dt / 2`
    /// for Shardlow.
    pub fn gamma_step(&self, gamma: f64, dt: f64) -> f64 {
        match self {
            ThermostatKind::Lowe => 1.0 - (-gamma * dt).exp(),
            ThermostatKind::Shardlow => 0.5 * gamma * dt,
        }
    }

    pub fn build(
        &self,
        temperature: f64,
        gamma_step: f64,
    ) -> Result<Box<dyn Thermostat + Send + Sync>, DpdError> {
        let thermostat: Box<dyn Thermostat + Send + Sync> = match self {
            ThermostatKind::Lowe => Box::new(LoweAndersen::new(temperature, gamma_step)?),
            ThermostatKind::Shardlow => Box::new(Shardlow::new(temperature, gamma_step)?),
        };
        Ok(thermostat)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Number of particles.
    pub n: usize,
    /// Number density; fixes the box edge at `(n / density)^(1/3)`.
    pub density: f64,
    pub temperature: f64,
    /// Repulsion strength. Defaults to `75 T / density`.
    pub a: Option<f64>,
    /// Friction coefficient of the thermostat.
    pub gamma: f64,
    pub dt: f64,
    pub thermostat: ThermostatKind,
    pub nblock: usize,
    /// Steps per block.
    pub nstep: usize,
    /// Seed for all random draws. A random seed is used when absent.
    pub seed: Option<u64>,
    /// Distribute the force evaluation over the rayon thread pool.
    pub multithreaded: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n: 300,
            density: 3.0,
            temperature: 1.0,
            a: None,
            gamma: 4.5,
            dt: 0.02,
            thermostat: ThermostatKind::Lowe,
            nblock: 10,
            nstep: 100,
            seed: None,
            multithreaded: false,
        }
    }
}

impl SimulationConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n < 2 {
            return Err(ConfigError::Invalid(format!(
                "n must be at least 2, got {}",
                self.n
            )));
        }
        if self.nblock == 0 || self.nstep == 0 {
            return Err(ConfigError::Invalid(
                "nblock and nstep must be positive".to_string(),
            ));
        }
        for (name, value) in [
            ("density", self.density),
            ("temperature", self.temperature),
            ("dt", self.dt),
            ("a", self.strength()),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )));
            }
        }
        if !(self.gamma.is_finite() && self.gamma >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "gamma must be non-negative and finite, got {}",
                self.gamma
            )));
        }
        let gamma_step = self.gamma_step();
        if gamma_step > 1.0 {
            return Err(ConfigError::Invalid(format!(
                "gamma * dt is too large for the {:?} thermostat (gamma_step = {})",
                self.thermostat, gamma_step
            )));
        }
        Ok(())
    }

    /// Physical box edge.
    pub fn box_length(&self) -> f64 {
        (self.n as f64 / self.density).cbrt()
    }

    /// Repulsion strength, `75 T / density` unless set explicitly.
    pub fn strength(&self) -> f64 {
        self.a.unwrap_or(75.0 * self.temperature / self.density)
    }

    pub fn gamma_step(&self) -> f64 {
        self.thermostat.gamma_step(self.gamma, self.dt)
    }

    pub fn build_thermostat(&self) -> Result<Box<dyn Thermostat + Send + Sync>, ConfigError> {
        Ok(self.thermostat.build(self.temperature, self.gamma_step())?)
    }
}


// End of File
