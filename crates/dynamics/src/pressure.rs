// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

// Empirical equation of state for the DPD fluid.
//
// Groot and Warren, J Chem Phys 107, 4423 (1997), in the revised form of Liyana-Arachchi,
// Jamadagni, Elke, Koenig and Siepmann, J Chem Phys 142, 044902 (2015):
//
//   p = rho T + alpha(a, rho) a rho²
//   alpha = B2(a)/a / (1 + rho³) + c1 rho² / (1 + c2 rho²)

const C1: f64 = 0.0802;
const C2: f64 = 0.7787;

/// Polynomial fit of `B2 / a`, highest power first.
const B2_COEFFS: [f64; 5] = [1.705e-8, -2.585e-6, 1.556e-4, -4.912e-3, 9.755e-2];

/// Evaluates a polynomial with coefficients given from the highest power down (Horner).
fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Approximate pressure of the DPD fluid at repulsion strength `a`, number density `rho` and
/// temperature `temperature`.
pub fn p_approx(a: f64, rho: f64, temperature: f64) -> f64 {
    let b2 = polyval(&B2_COEFFS, a);
    let rho_sq = rho * rho;
    let alpha = b2 / (1.0 + rho_sq * rho) + (C1 * rho_sq) / (1.0 + C2 * rho_sq);
    rho * temperature + alpha * a * rho_sq
}


// End of File
