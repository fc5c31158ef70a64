use nalgebra::Vector3;

use crate::constants::{JulianDate, DPI};
use crate::kepler::{principal_angle, solve_kepler};
use crate::keplerian_element::KeplerianElements;
use crate::perihelion_errors::PerihelionError;
use crate::ref_system::orbital_to_ecliptic;

/// Heliocentric position of a body at a given instant, in AU, in the
/// Sun-centered ecliptic frame.
///
/// Propagation steps:
/// 1. mean motion `n = 2π / P` (rad/day) and mean anomaly
///    `M = M0 + n·(jd − t0)`, reduced into `[0, 2π)`,
/// 2. eccentric anomaly from Kepler's equation,
/// 3. perifocal coordinates `x' = a·(cos E − e)`, `y' = a·√(1−e²)·sin E`,
/// 4. rotation into the ecliptic frame
///    ([`orbital_to_ecliptic`]).
///
/// Arguments
/// ---------
/// * `jd`: the instant, as a Julian Date
/// * `elements`: the body's orbital elements (validated at construction)
///
/// Return
/// ------
/// * the position in AU, or [`PerihelionError::KeplerNotConverged`]
pub fn heliocentric_position(
    jd: JulianDate,
    elements: &KeplerianElements,
) -> Result<Vector3<f64>, PerihelionError> {
    let mean_motion = DPI / elements.orbital_period;
    let mean_anomaly = principal_angle(
        elements.mean_anomaly + mean_motion * (jd - elements.reference_epoch),
    );

    let ecc = elements.eccentricity;
    let ecc_anomaly = solve_kepler(mean_anomaly, ecc)?;

    let a = elements.semi_major_axis;
    let perifocal = Vector3::new(
        a * (ecc_anomaly.cos() - ecc),
        a * (1.0 - ecc * ecc).sqrt() * ecc_anomaly.sin(),
        0.0,
    );

    Ok(orbital_to_ecliptic(
        &perifocal,
        elements.periapsis_argument,
        elements.inclination,
        elements.ascending_node_longitude,
    ))
}

/// Position of a body relative to Earth at a given instant, in AU.
///
/// Subtracts Earth's heliocentric position from the body's, both computed by
/// [`heliocentric_position`]. Earth's own orbit is the same two-body
/// Keplerian approximation, so accuracy degrades with time from the elements'
/// reference epoch and near Earth-crossing geometry; this is an accepted
/// limitation, not a bug.
///
/// Arguments
/// ---------
/// * `jd`: the instant, as a Julian Date
/// * `body`: the body's orbital elements
/// * `earth`: Earth's reference elements
///   (typically [`KeplerianElements::earth_j2000`])
pub fn geocentric_position(
    jd: JulianDate,
    body: &KeplerianElements,
    earth: &KeplerianElements,
) -> Result<Vector3<f64>, PerihelionError> {
    Ok(heliocentric_position(jd, body)? - heliocentric_position(jd, earth)?)
}
