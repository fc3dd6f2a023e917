// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Composite accumulator for the pair interactions: potential energy, virial and Laplacian.
///
/// Addition is componentwise, so partial sums from any grouping of pairs (including per-thread
/// partial sums) combine to the same total up to rounding. [`PotentialType::default`] is the
/// additive identity.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PotentialType {
    /// Potential energy, zero at the cutoff.
    pub pot: f64,
    /// Virial.
    pub vir: f64,
    /// Laplacian of the potential.
    pub lap: f64,
}

impl PotentialType {
    pub const ZERO: Self = Self {
        pot: 0.0,
        vir: 0.0,
        lap: 0.0,
    };

    pub fn new(pot: f64, vir: f64, lap: f64) -> Self {
        Self { pot, vir, lap }
    }

    /// Unscaled contribution of one pair at separation `r < 1`.
    ///
    /// With `w = 1 - r`: potential `w²/2`, virial `w r`, Laplacian `3 - 2/r`. The Laplacian
    /// diverges as `r -> 0`.
    pub fn from_separation(r: f64) -> Self {
        let w = 1.0 - r;
        Self {
            pot: 0.5 * w * w,
            vir: w * r,
            lap: 3.0 - 2.0 / r,
        }
    }

    /// Applies the strength-dependent prefactors once the pair sum is complete.
    pub fn scaled(self, a: f64) -> Self {
        Self {
            pot: self.pot * a,
            vir: self.vir * a / 3.0,
            lap: self.lap * a * 2.0,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.pot.is_finite() && self.vir.is_finite() && self.lap.is_finite()
    }
}

impl Add for PotentialType {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            pot: self.pot + other.pot,
            vir: self.vir + other.vir,
            lap: self.lap + other.lap,
        }
    }
}

impl AddAssign for PotentialType {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for PotentialType {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a PotentialType> for PotentialType {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}


// End of File
