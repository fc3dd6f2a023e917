// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

mod driver;

pub use driver::{Sample, Simulation};

use anyhow::Result;
use colored::*;
use logging::prelude::*;
use sim_config::SimulationConfig;
use std::path::Path;
use std::time::Instant;

pub const APP_NAME: &str = "dpd";

/// Averages for each block of a run, and the wall-clock time spent stepping.
#[derive(Debug)]
pub struct RunSummary {
    pub blocks: Vec<Sample>,
    pub approximate_pressure: f64,
    pub elapsed: std::time::Duration,
}

/// Runs the simulation described by `config` block by block.
pub fn run(config: SimulationConfig) -> Result<RunSummary> {
    log::info!("DPD soft potential");
    log::info!("Diameter, r_cut = 1");

    let nblock = config.nblock;
    let mut simulation = Simulation::new(config)?;
    let start = Instant::now();

    let mut blocks = Vec::with_capacity(nblock);
    for blk in 0..nblock {
        let averages = simulation.run_block()?;
        log::info!(
            "Block {:4}: E/N {:10.5}  T-kin {:8.5}  T-con {:8.5}  P {:10.5}",
            blk + 1,
            averages.energy,
            averages.kinetic_temperature,
            averages.configurational_temperature,
            averages.pressure
        );
        blocks.push(averages);
    }

    Ok(RunSummary {
        blocks,
        approximate_pressure: simulation.approximate_pressure(),
        elapsed: start.elapsed(),
    })
}

/// Entry point of the `dpd` binary: logging, configuration, run, report.
pub fn start(config_path: Option<&Path>) -> Result<()> {
    Logging::new(vec![
        env!("CARGO_PKG_NAME"),
        "dpd_config",
        "dpd_dynamics",
        "dpd_logging",
    ])
    .init();

    let config = match config_path {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    let nstep = config.nstep * config.nblock;
    let summary = run(config)?;

    let mean = summary
        .blocks
        .iter()
        .fold(Sample::default(), |acc, s| acc + *s)
        / summary.blocks.len() as f64;

    println!("{}", "Run averages".green());
    println!("{:40}{:15.6}", "E/N", mean.energy);
    println!("{:40}{:15.6}", "T-kin", mean.kinetic_temperature);
    println!("{:40}{:15.6}", "T-con", mean.configurational_temperature);
    println!("{:40}{:15.6}", "P", mean.pressure);
    println!("{:40}{:15.6}", "P (approximate EOS)", summary.approximate_pressure);
    println!("{:40}{:15.1}", "Pairs in range", mean.pairs);
    println!(
        "{}",
        format!(
            "{} steps in {:?} ({:?} per step)",
            nstep,
            summary.elapsed,
            summary.elapsed / nstep as u32
        )
        .yellow()
    );
    log::info!("Program ends");

    Ok(())
}

// End of File
