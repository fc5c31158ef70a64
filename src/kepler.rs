use crate::constants::{Radian, DPI, KEPLER_MAX_ITERATIONS, KEPLER_TOLERANCE};
use crate::perihelion_errors::PerihelionError;

/// Returns the principal value of an angle in radians, reduced into [0, 2π).
pub fn principal_angle(a: Radian) -> Radian {
    a.rem_euclid(DPI)
}

/// Solve Kepler's equation `M = E − e·sin(E)` for the eccentric anomaly.
///
/// Uses the default tolerance and iteration cap
/// ([`KEPLER_TOLERANCE`], [`KEPLER_MAX_ITERATIONS`]).
/// See [`solve_kepler_with`] for the full contract.
pub fn solve_kepler(mean_anomaly: Radian, eccentricity: f64) -> Result<Radian, PerihelionError> {
    solve_kepler_with(
        mean_anomaly,
        eccentricity,
        KEPLER_TOLERANCE,
        KEPLER_MAX_ITERATIONS,
    )
}

/// Solve Kepler's equation by Newton–Raphson with an explicit iteration cap.
///
/// Starting from `E₀ = M`, iterates
/// `E ← E − (E − e·sin E − M) / (1 − e·cos E)`
/// until the correction falls below `tolerance`. For `e = 0` the starting
/// point is already exact and the first iteration terminates. Convergence is
/// fast for eccentricities up to ~0.9 and degrades as `e → 1`; when the cap
/// is reached the last estimate is discarded and
/// [`PerihelionError::KeplerNotConverged`] is returned instead.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomaly `M` in radians
/// * `eccentricity`: orbital eccentricity, expected in `[0, 1)` (enforced by
///   element validation upstream, not re-checked here)
/// * `tolerance`: convergence threshold on `|ΔE|`, in radians
/// * `max_iterations`: Newton iteration budget
///
/// Return
/// ------
/// * the eccentric anomaly `E` in radians, or a convergence failure
pub fn solve_kepler_with(
    mean_anomaly: Radian,
    eccentricity: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Result<Radian, PerihelionError> {
    let mut ecc_anomaly = mean_anomaly;

    for _ in 0..max_iterations {
        let delta = (ecc_anomaly - eccentricity * ecc_anomaly.sin() - mean_anomaly)
            / (1.0 - eccentricity * ecc_anomaly.cos());
        ecc_anomaly -= delta;
        if delta.abs() < tolerance {
            return Ok(ecc_anomaly);
        }
    }

    Err(PerihelionError::KeplerNotConverged {
        mean_anomaly,
        eccentricity,
        iterations: max_iterations,
    })
}

#[cfg(test)]
mod kepler_test {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_principal_angle() {
        assert_eq!(principal_angle(0.0), 0.0);
        assert_eq!(principal_angle(DPI), 0.0);
        assert_eq!(principal_angle(-PI), PI);
        assert!((principal_angle(3.0 * PI) - PI).abs() < 1e-15);
    }

    #[test]
    fn test_circular_orbit_is_exact() {
        // For e = 0 the first Newton step is a no-op and E = M exactly.
        for k in 0..8 {
            let m = k as f64 * DPI / 8.0;
            assert_eq!(solve_kepler(m, 0.0).unwrap(), m);
        }
    }

    #[test]
    fn test_kepler_equation_residual() {
        // Deterministic sweep over the elliptical regime.
        for i in 0..50 {
            let m = principal_angle(i as f64 * 0.377);
            for j in 0..10 {
                let e = j as f64 * 0.09;
                let ecc_anomaly = solve_kepler(m, e).unwrap();
                let residual = ecc_anomaly - e * ecc_anomaly.sin() - m;
                assert!(
                    residual.abs() < KEPLER_TOLERANCE,
                    "residual {residual} for M = {m}, e = {e}"
                );
            }
        }
    }

    #[test]
    fn test_known_solution() {
        // M = 1, e = 0.5: reference value from direct evaluation of Kepler's equation
        let ecc_anomaly = solve_kepler(1.0, 0.5).unwrap();
        assert!((ecc_anomaly - 1.4987011335178482).abs() < 1e-6);
    }

    #[test]
    fn test_iteration_budget_exhaustion() {
        // A single iteration is not enough for a strongly elliptical orbit.
        let res = solve_kepler_with(3.0, 0.9, 1e-12, 1);
        assert_eq!(
            res,
            Err(PerihelionError::KeplerNotConverged {
                mean_anomaly: 3.0,
                eccentricity: 0.9,
                iterations: 1,
            })
        );
    }

    #[test]
    fn test_high_eccentricity_still_converges() {
        let ecc_anomaly = solve_kepler(0.1, 0.9).unwrap();
        let residual = ecc_anomaly - 0.9 * ecc_anomaly.sin() - 0.1;
        assert!(residual.abs() < KEPLER_TOLERANCE);
    }
}
