use serde_json::Value;
use std::collections::HashMap;

use crate::constants::{Degree, JulianDate, Radian, RADEG};
use crate::perihelion_errors::PerihelionError;

/// Keplerian orbital elements of a single body.
///
/// Units:
/// * `reference_epoch`: JD (Julian Date)
/// * `semi_major_axis`: AU (Astronomical Units)
/// * `eccentricity`: unitless, in `[0, 1)` (elliptical orbits only)
/// * `inclination`: radians
/// * `ascending_node_longitude`: radians
/// * `periapsis_argument`: radians
/// * `mean_anomaly`: radians (at `reference_epoch`)
/// * `orbital_period`: days
///
/// Immutable once constructed; the validating constructors are the only way
/// out-of-domain values are kept away from the propagation code.
#[derive(Debug, Clone, PartialEq)]
pub struct KeplerianElements {
    pub reference_epoch: JulianDate,
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: Radian,
    pub ascending_node_longitude: Radian,
    pub periapsis_argument: Radian,
    pub mean_anomaly: Radian,
    pub orbital_period: f64,
}

/// Record field names, as delivered by the small-body catalog.
const FIELD_NAMES: [&str; 8] = [
    "semi_major_axis",
    "eccentricity",
    "inclination",
    "ascending_node_longitude",
    "perihelion_argument",
    "mean_anomaly",
    "epoch_osculation",
    "orbital_period",
];

impl KeplerianElements {
    /// Build an element set from catalog-style values, converting angles from
    /// degrees to radians and validating the domain.
    ///
    /// Arguments
    /// ---------
    /// * `semi_major_axis`: AU, must be positive
    /// * `eccentricity`: must lie in `[0, 1)`
    /// * `inclination`, `ascending_node_longitude`, `periapsis_argument`,
    ///   `mean_anomaly`: degrees
    /// * `reference_epoch`: JD
    /// * `orbital_period`: days, must be positive
    pub fn from_degrees(
        semi_major_axis: f64,
        eccentricity: f64,
        inclination: Degree,
        ascending_node_longitude: Degree,
        periapsis_argument: Degree,
        mean_anomaly: Degree,
        reference_epoch: JulianDate,
        orbital_period: f64,
    ) -> Result<Self, PerihelionError> {
        if !(semi_major_axis > 0.0) {
            return Err(PerihelionError::InvalidSemiMajorAxis(semi_major_axis));
        }
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(PerihelionError::InvalidEccentricity(eccentricity));
        }
        if !(orbital_period > 0.0) {
            return Err(PerihelionError::InvalidOrbitalPeriod(orbital_period));
        }

        Ok(Self {
            reference_epoch,
            semi_major_axis,
            eccentricity,
            inclination: inclination * RADEG,
            ascending_node_longitude: ascending_node_longitude * RADEG,
            periapsis_argument: periapsis_argument * RADEG,
            mean_anomaly: mean_anomaly * RADEG,
            orbital_period,
        })
    }

    /// Build an element set from a catalog record: a mapping from field name to
    /// a JSON number or numeric string (remote catalogs serve both shapes).
    ///
    /// Expected fields: `semi_major_axis` (AU), `eccentricity`, `inclination`,
    /// `ascending_node_longitude`, `perihelion_argument`, `mean_anomaly` (all
    /// degrees), `epoch_osculation` (JD), `orbital_period` (days).
    ///
    /// A missing field, a non-numeric value, or an out-of-domain element is
    /// reported as the matching [`PerihelionError`] variant, never coerced.
    pub fn from_record(record: &HashMap<String, Value>) -> Result<Self, PerihelionError> {
        let [a, e, i, node, peri, m0, epoch, period] =
            FIELD_NAMES.map(|field| numeric_field(record, field));

        Self::from_degrees(a?, e?, i?, node?, peri?, m0?, epoch?, period?)
    }

    /// Earth's J2000 osculating elements.
    ///
    /// Used as the reference orbit by the geocentric transform. This is a
    /// two-body approximation of Earth's motion, not an ephemeris: the error
    /// grows with time from J2000 and matters most for Earth-crossing
    /// geometries. Construct once and pass by reference wherever needed.
    pub fn earth_j2000() -> Self {
        Self::from_degrees(
            1.00000011,
            0.01671022,
            0.00005,
            -11.26064,
            102.94719,
            100.46435,
            2_451_545.0,
            365.256363004,
        )
        .expect("Earth reference elements are in-domain")
    }
}

/// Extract one element field, accepting JSON numbers and numeric strings.
fn numeric_field(record: &HashMap<String, Value>, field: &str) -> Result<f64, PerihelionError> {
    let value = record
        .get(field)
        .ok_or_else(|| PerihelionError::MissingElement(field.to_string()))?;

    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| PerihelionError::NonNumericElement {
        field: field.to_string(),
        value: value.to_string(),
    })
}
