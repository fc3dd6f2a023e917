// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

// Soft repulsive DPD pair forces in a periodic cubic box.
//
// Every unordered pair i < j is visited (no cell lists). Separations are wrapped to the
// minimum image in reduced units, where the box edge is 1, and then scaled by the physical
// box length. Pairs closer than the particle diameter (the cutoff, 1) interact through
//
//   w = 1 - r,  u = a w² / 2,  f_ij = a w r̂_ij
//
// where r̂_ij points from j to i. The pairs found are returned so that a thermostat can reuse
// them in the same step.

use crate::error::{require_positive, DpdError};
use crate::potential::PotentialType;
use glam::DVec3;
use rayon::prelude::*;

/// Interaction range, equal to the particle diameter.
pub const CUTOFF: f64 = 1.0;

/// A pair of particles within range, as found by [`ForceEvaluator::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairRecord {
    /// Index of the first particle (`i < j`).
    pub i: usize,
    /// Index of the second particle.
    pub j: usize,
    /// Minimum-image separation in physical units, in `[0, CUTOFF)`.
    pub distance: f64,
    /// Unit separation vector pointing from `j` to `i`.
    pub unit: DVec3,
}

impl PairRecord {
    /// Linear weight `1 - r`: one at contact, zero at the cutoff.
    pub fn weight(&self) -> f64 {
        1.0 - self.distance
    }
}

/// Everything a force evaluation produces for one step.
#[derive(Debug, Clone)]
pub struct ForceResult {
    /// Scaled totals: `pot * a`, `vir * a / 3`, `lap * 2a`.
    pub total: PotentialType,
    /// Force on every particle, in the same order as the positions.
    pub forces: Vec<DVec3>,
    /// Interacting pairs, ordered by ascending `i` then ascending `j`.
    pub pairs: Vec<PairRecord>,
}

/// All-pairs evaluator for the DPD soft repulsion.
#[derive(Debug, Clone)]
pub struct ForceEvaluator {
    box_length: f64,
    strength: f64,
    use_multithreading: bool,
}

impl ForceEvaluator {
    /// Create an evaluator for a box of edge `box_length` and repulsion strength `strength`
    /// (single-threaded by default).
    pub fn new(box_length: f64, strength: f64) -> Result<Self, DpdError> {
        Self::new_with_threading(box_length, strength, false)
    }

    /// Create an evaluator with explicit threading configuration. Rows of the pair scan are
    /// then distributed over the rayon thread pool; the pair order of the result is the same
    /// either way.
    pub fn new_with_threading(
        box_length: f64,
        strength: f64,
        use_multithreading: bool,
    ) -> Result<Self, DpdError> {
        Ok(Self {
            box_length: require_positive("box", box_length)?,
            strength: require_positive("a", strength)?,
            use_multithreading,
        })
    }

    pub fn box_length(&self) -> f64 {
        self.box_length
    }

    pub fn strength(&self) -> f64 {
        self.strength
    }

    /// Compute totals, forces and the pair list for positions given in reduced (box = 1)
    /// units.
    ///
    /// Coincident particles give non-finite totals and forces; they are reported with a
    /// warning but not rejected.
    pub fn evaluate(&self, positions: &[DVec3]) -> Result<ForceResult, DpdError> {
        let n = positions.len();
        if n < 2 {
            return Err(DpdError::TooFewParticles(n));
        }

        let rows: Vec<(PotentialType, Vec<PairRecord>)> = if self.use_multithreading {
            (0..n - 1)
                .into_par_iter()
                .map(|i| self.scan_row(positions, i))
                .collect()
        } else {
            (0..n - 1).map(|i| self.scan_row(positions, i)).collect()
        };

        let mut total = PotentialType::ZERO;
        let mut pairs = Vec::with_capacity(rows.iter().map(|(_, row)| row.len()).sum());
        for (partial, row) in rows {
            total += partial;
            pairs.extend(row);
        }

        let mut forces = vec![DVec3::ZERO; n];
        for pair in &pairs {
            let fij = pair.weight() * pair.unit;
            forces[pair.i] += fij;
            forces[pair.j] -= fij;
        }
        for f in forces.iter_mut() {
            *f *= self.strength;
        }

        let total = total.scaled(self.strength);
        if !total.is_finite() {
            log::warn!(
                "Non-finite pair totals ({:?}); some particles are coincident",
                total
            );
        }
        log::debug!("{} particles, {} interacting pairs", n, pairs.len());

        Ok(ForceResult {
            total,
            forces,
            pairs,
        })
    }

    /// Same as [`ForceEvaluator::evaluate`] for coordinates given as rows, each of which must
    /// have exactly three components.
    pub fn evaluate_rows<R: AsRef<[f64]>>(&self, rows: &[R]) -> Result<ForceResult, DpdError> {
        let positions = positions_from_rows(rows)?;
        self.evaluate(&positions)
    }

    /// Pairs (i, j > i) within range, with their unscaled potential sum.
    fn scan_row(&self, positions: &[DVec3], i: usize) -> (PotentialType, Vec<PairRecord>) {
        let ri = positions[i];
        let mut partial = PotentialType::ZERO;
        let mut row = Vec::new();

        for (j, &rj) in positions.iter().enumerate().skip(i + 1) {
            let mut rij = ri - rj;
            rij -= rij.round();
            rij *= self.box_length;

            let rij_sq = rij.length_squared();
            if rij_sq < CUTOFF * CUTOFF {
                let rij_mag = rij_sq.sqrt();
                partial += PotentialType::from_separation(rij_mag);
                row.push(PairRecord {
                    i,
                    j,
                    distance: rij_mag,
                    unit: rij / rij_mag,
                });
            }
        }

        (partial, row)
    }
}

/// Computes forces and potentials for the configuration, and the list of pairs in range.
///
/// Positions are in units where the box edge is 1; `box_length` converts them to units of
/// the particle diameter.
pub fn force(box_length: f64, a: f64, positions: &[DVec3]) -> Result<ForceResult, DpdError> {
    ForceEvaluator::new(box_length, a)?.evaluate(positions)
}

/// Converts coordinate rows into 3-vectors, failing on the first row that is not of length 3.
pub fn positions_from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Vec<DVec3>, DpdError> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| match row.as_ref() {
            &[x, y, z] => Ok(DVec3::new(x, y, z)),
            other => Err(DpdError::Dimension {
                index,
                found: other.len(),
            }),
        })
        .collect()
}

// End of File
