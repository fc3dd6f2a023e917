// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DpdError {
    #[error("Dimension error: coordinate row {index} has {found} components, expected 3")]
    Dimension { index: usize, found: usize },

    #[error("At least 2 particles are required, found {0}")]
    TooFewParticles(usize),

    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Pair ({i}, {j}) refers to a particle outside a velocity array of length {len}")]
    PairOutOfRange { i: usize, j: usize, len: usize },
}

/// Rejects non-finite and non-positive values.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64, DpdError> {
    if !value.is_finite() {
        return Err(DpdError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(DpdError::InvalidParameter {
            name,
            value,
            reason: "must be positive",
        });
    }
    Ok(value)
}

/// Rejects values outside the closed unit interval (NaN included).
pub(crate) fn require_probability(name: &'static str, value: f64) -> Result<f64, DpdError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(DpdError::InvalidParameter {
            name,
            value,
            reason: "must lie in [0, 1]",
        });
    }
    Ok(value)
}

// End of File
