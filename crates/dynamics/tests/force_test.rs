// Tests for the all-pairs DPD force evaluation.
//
// Validates:
// - reference values for a single pair (potential, virial, Laplacian, force direction)
// - minimum-image wrapping and the cutoff against brute-force enumeration
// - Newton's third law and periodic invariance on random configurations
// - input validation (row shape, particle count, parameter ranges)

use dpd_dynamics::configuration::random_positions;
use dpd_dynamics::{force, DpdError, ForceEvaluator, PotentialType, CUTOFF};
use glam::DVec3;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn assert_close(a: f64, b: f64, tol: f64) {
    assert!((a - b).abs() < tol, "{a} != {b} (tolerance {tol})");
}

fn assert_vec_close(a: DVec3, b: DVec3, tol: f64) {
    assert!((a - b).length() < tol, "{a:?} != {b:?} (tolerance {tol})");
}

/// Random configuration of `n` particles at number density `density`. Returns (box, positions).
fn random_fluid(n: usize, density: f64, seed: u64) -> (f64, Vec<DVec3>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let box_length = (n as f64 / density).cbrt();
    (box_length, random_positions(n, &mut rng))
}

/// Brute force: nearest periodic image distance over all 27 neighbouring images.
fn brute_force_pairs(box_length: f64, positions: &[DVec3]) -> Vec<(usize, usize, f64)> {
    let mut result = Vec::new();
    for i in 0..positions.len() {
        for j in (i + 1)..positions.len() {
            let mut best = f64::INFINITY;
            for sx in -1..=1 {
                for sy in -1..=1 {
                    for sz in -1..=1 {
                        let shift = DVec3::new(sx as f64, sy as f64, sz as f64);
                        let d = (positions[i] - positions[j] + shift) * box_length;
                        best = best.min(d.length());
                    }
                }
            }
            if best < CUTOFF {
                result.push((i, j, best));
            }
        }
    }
    result
}

// ============================================================================
// Single pair reference values
// ============================================================================

#[test]
fn pair_at_half_diameter() {
    // 0.125 reduced units in a box of 4 is a separation of exactly 0.5.
    let positions = vec![DVec3::new(0.125, 0.0, 0.0), DVec3::ZERO];
    let result = force(4.0, 1.0, &positions).unwrap();

    assert_eq!(result.pairs.len(), 1);
    let pair = result.pairs[0];
    assert_eq!((pair.i, pair.j), (0, 1));
    assert_eq!(pair.distance, 0.5);
    assert_eq!(pair.unit, DVec3::X);

    // Unscaled: pot 0.125, vir 0.25, lap -1. Scaled with a = 1: vir / 3, lap * 2.
    assert_close(result.total.pot, 0.125, 1e-15);
    assert_close(result.total.vir * 3.0, 0.25, 1e-15);
    assert_close(result.total.lap, -2.0, 1e-15);

    // w = 0.5 along +x on particle 0, the opposite on particle 1.
    assert_vec_close(result.forces[0], DVec3::new(0.5, 0.0, 0.0), 1e-15);
    assert_vec_close(result.forces[1], DVec3::new(-0.5, 0.0, 0.0), 1e-15);
}

#[test]
fn strength_scales_all_outputs() {
    let positions = vec![DVec3::new(0.0, 0.1, 0.0), DVec3::new(0.0, -0.05, 0.02)];
    let unit = force(3.0, 1.0, &positions).unwrap();
    let strong = force(3.0, 25.0, &positions).unwrap();

    assert_close(strong.total.pot, 25.0 * unit.total.pot, 1e-12);
    assert_close(strong.total.vir, 25.0 * unit.total.vir, 1e-12);
    assert_close(strong.total.lap, 25.0 * unit.total.lap, 1e-12);
    for (fs, fu) in strong.forces.iter().zip(unit.forces.iter()) {
        assert_vec_close(*fs, 25.0 * *fu, 1e-12);
    }
    assert_eq!(strong.pairs, unit.pairs);
}

#[test]
fn pair_across_periodic_boundary() {
    // 0.9 apart in reduced units is 0.1 through the boundary; box 5 makes that 0.5.
    let positions = vec![DVec3::new(0.45, 0.0, 0.0), DVec3::new(-0.45, 0.0, 0.0)];
    let result = force(5.0, 1.0, &positions).unwrap();

    assert_eq!(result.pairs.len(), 1);
    let pair = result.pairs[0];
    assert_close(pair.distance, 0.5, 1e-12);
    // Particle 0 sits just below particle 1's periodic image, so the unit vector is -x.
    assert_vec_close(pair.unit, DVec3::new(-1.0, 0.0, 0.0), 1e-12);
    assert_vec_close(result.forces[0], DVec3::new(-0.5, 0.0, 0.0), 1e-12);
}

#[test]
fn no_pairs_in_range() {
    let positions = vec![
        DVec3::ZERO,
        DVec3::new(0.3, 0.0, 0.0),
        DVec3::new(0.0, 0.0, -0.3),
    ];
    let result = force(10.0, 25.0, &positions).unwrap();

    assert!(result.pairs.is_empty());
    assert_eq!(result.total, PotentialType::ZERO);
    assert!(result.forces.iter().all(|f| *f == DVec3::ZERO));
    assert_eq!(result.forces.len(), 3);
}

#[test]
fn pair_exactly_at_cutoff_is_excluded() {
    // 0.25 * 4 = 1.0 exactly.
    let positions = vec![DVec3::new(0.25, 0.0, 0.0), DVec3::ZERO];
    let result = force(4.0, 1.0, &positions).unwrap();
    assert!(result.pairs.is_empty());
}

#[test]
fn coincident_particles_propagate_non_finite_values() {
    let positions = vec![DVec3::new(0.1, 0.2, 0.3), DVec3::new(0.1, 0.2, 0.3)];
    let result = force(4.0, 1.0, &positions).unwrap();
    assert_eq!(result.pairs.len(), 1);
    assert!(!result.total.is_finite());
}

// ============================================================================
// Properties on random configurations
// ============================================================================

#[test]
fn pair_list_matches_brute_force() {
    let (box_length, positions) = random_fluid(120, 3.0, 1);
    let result = force(box_length, 25.0, &positions).unwrap();
    let expected = brute_force_pairs(box_length, &positions);

    assert!(!expected.is_empty());
    assert_eq!(result.pairs.len(), expected.len());
    for (pair, &(i, j, r)) in result.pairs.iter().zip(expected.iter()) {
        assert_eq!((pair.i, pair.j), (i, j));
        assert!(pair.i < pair.j);
        assert_close(pair.distance, r, 1e-12);
        assert_close(pair.unit.length(), 1.0, 1e-12);
    }
}

#[test]
fn total_force_vanishes() {
    for seed in 0..5 {
        let (box_length, positions) = random_fluid(150, 3.0, seed);
        let result = force(box_length, 25.0, &positions).unwrap();
        let total: DVec3 = result.forces.iter().copied().sum();
        assert!(total.length() < 1e-9, "seed {seed}: total force {total:?}");
    }
}

#[test]
fn pair_forces_are_antisymmetric() {
    let (box_length, positions) = random_fluid(60, 3.0, 9);
    let result = force(box_length, 1.0, &positions).unwrap();

    // Rebuild forces pair by pair from the records: each pair contributes +f to i, -f to j.
    let mut rebuilt = vec![DVec3::ZERO; positions.len()];
    for pair in &result.pairs {
        let fij = pair.weight() * pair.unit;
        rebuilt[pair.i] += fij;
        rebuilt[pair.j] -= fij;
    }
    for (f, g) in result.forces.iter().zip(rebuilt.iter()) {
        assert_vec_close(*f, *g, 1e-12);
    }

    // Sum of the unscaled per-pair potentials matches the reported total.
    let sum: PotentialType = result
        .pairs
        .iter()
        .map(|p| PotentialType::from_separation(p.distance))
        .sum();
    assert_close(sum.scaled(1.0).pot, result.total.pot, 1e-10);
    assert_close(sum.scaled(1.0).vir, result.total.vir, 1e-10);
    assert_close(sum.scaled(1.0).lap, result.total.lap, 1e-9);
}

#[test]
fn periodic_translation_invariance() {
    let (box_length, positions) = random_fluid(100, 3.0, 3);
    let reference = force(box_length, 25.0, &positions).unwrap();

    let shifts = [
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(0.0, -2.0, 0.0),
        DVec3::new(0.0, 0.0, 3.0),
    ];
    let shifted: Vec<DVec3> = positions
        .iter()
        .enumerate()
        .map(|(k, r)| *r + shifts[k % shifts.len()])
        .collect();
    let result = force(box_length, 25.0, &shifted).unwrap();

    assert_eq!(result.pairs.len(), reference.pairs.len());
    assert_close(result.total.pot, reference.total.pot, 1e-9);
    assert_close(result.total.vir, reference.total.vir, 1e-9);
    assert_close(result.total.lap, reference.total.lap, 1e-6);
    for (f, g) in result.forces.iter().zip(reference.forces.iter()) {
        assert_vec_close(*f, *g, 1e-9);
    }
}

#[test]
fn multithreaded_matches_single_threaded() {
    let (box_length, positions) = random_fluid(300, 3.0, 5);
    let single = ForceEvaluator::new(box_length, 25.0)
        .unwrap()
        .evaluate(&positions)
        .unwrap();
    let multi = ForceEvaluator::new_with_threading(box_length, 25.0, true)
        .unwrap()
        .evaluate(&positions)
        .unwrap();

    assert_eq!(single.pairs, multi.pairs);
    assert_close(single.total.pot, multi.total.pot, 1e-9);
    assert_close(single.total.vir, multi.total.vir, 1e-9);
    assert_close(single.total.lap, multi.total.lap, 1e-6);
    for (f, g) in single.forces.iter().zip(multi.forces.iter()) {
        assert_vec_close(*f, *g, 1e-12);
    }
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn rows_with_wrong_dimension_are_rejected() {
    let evaluator = ForceEvaluator::new(4.0, 1.0).unwrap();
    let rows = vec![vec![0.0, 0.0, 0.0], vec![0.1, 0.2], vec![0.0, 0.0, 0.0]];
    assert_eq!(
        evaluator.evaluate_rows(&rows).unwrap_err(),
        DpdError::Dimension { index: 1, found: 2 }
    );

    let rows = vec![[0.125, 0.0, 0.0], [0.0, 0.0, 0.0]];
    let result = evaluator.evaluate_rows(&rows).unwrap();
    assert_eq!(result.pairs.len(), 1);
}

#[test]
fn too_few_particles() {
    assert_eq!(
        force(4.0, 1.0, &[DVec3::ZERO]).unwrap_err(),
        DpdError::TooFewParticles(1)
    );
    assert_eq!(
        force(4.0, 1.0, &[]).unwrap_err(),
        DpdError::TooFewParticles(0)
    );
}

#[test]
fn invalid_box_and_strength() {
    assert!(matches!(
        ForceEvaluator::new(0.0, 1.0),
        Err(DpdError::InvalidParameter { name: "box", .. })
    ));
    assert!(matches!(
        ForceEvaluator::new(4.0, -1.0),
        Err(DpdError::InvalidParameter { name: "a", .. })
    ));
    assert!(matches!(
        ForceEvaluator::new(f64::NAN, 1.0),
        Err(DpdError::InvalidParameter { name: "box", .. })
    ));
    assert!(matches!(
        ForceEvaluator::new(4.0, f64::INFINITY),
        Err(DpdError::InvalidParameter { name: "a", .. })
    ));
}
