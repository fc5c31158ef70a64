use thiserror::Error;

/// Errors produced by the propagation pipeline.
///
/// Validation errors are raised by the element constructors before any
/// iteration starts; range errors by the sampler on its time/resolution
/// arguments; convergence failure by the Kepler solver when its iteration
/// budget is exhausted. Nothing is retried internally: every computation is
/// deterministic, so an identical retry cannot change the outcome.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PerihelionError {
    #[error("Missing orbital element field: {0}")]
    MissingElement(String),

    #[error("Orbital element field '{field}' is not numeric: {value}")]
    NonNumericElement { field: String, value: String },

    #[error("Eccentricity {0} outside the elliptical domain [0, 1)")]
    InvalidEccentricity(f64),

    #[error("Semi-major axis must be positive, got {0} AU")]
    InvalidSemiMajorAxis(f64),

    #[error("Orbital period must be positive, got {0} days")]
    InvalidOrbitalPeriod(f64),

    #[error(
        "Kepler solver did not converge after {iterations} iterations (M = {mean_anomaly} rad, e = {eccentricity})"
    )]
    KeplerNotConverged {
        mean_anomaly: f64,
        eccentricity: f64,
        iterations: usize,
    },

    #[error("Invalid time range: end {end} ms is before start {start} ms")]
    InvalidTimeRange { start: i64, end: i64 },

    #[error("Sampling resolution {resolution} exceeds the maximum of {max}")]
    ResolutionTooLarge { resolution: u32, max: u32 },

    #[error("Invalid date string: {0}")]
    InvalidDateFormat(String),
}
