//! # Constants and type definitions for Perihelion
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `Perihelion` library.
//!
//! ## Overview
//!
//! - Astronomical constants and unit conversions (degrees ↔ radians, AU ↔ km, ms ↔ days)
//! - Epoch anchors relating Unix milliseconds to the Julian Date scale
//! - Defaults for the Kepler solver and the position sampler
//! - Core type aliases used across the crate
//!
//! These definitions are used by all main modules: the solver, the ephemeris model
//! and the sampler.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Number of milliseconds in a Julian day
pub const MILLIS_PER_DAY: f64 = SECONDS_PER_DAY * 1000.0;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Julian Date of the Unix epoch (1970-01-01T00:00:00 UTC)
pub const JD_UNIX_EPOCH: f64 = 2_440_587.5;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00:00 TT)
pub const T2000: f64 = 2_451_545.0;

// -------------------------------------------------------------------------------------------------
// Solver and sampler defaults
// -------------------------------------------------------------------------------------------------

/// Default convergence tolerance for the Kepler solver, in radians
pub const KEPLER_TOLERANCE: f64 = 1e-6;

/// Default iteration cap for the Kepler solver.
///
/// Newton–Raphson on Kepler's equation converges in a handful of iterations for
/// eccentricities up to ~0.9; the cap exists so that near-parabolic inputs fail
/// loudly instead of spinning.
pub const KEPLER_MAX_ITERATIONS: usize = 50;

/// Upper bound on the sampling resolution accepted by
/// [`sample_positions`](crate::sampler::sample_positions).
///
/// Each step costs one Kepler solve for the body and one for Earth, so this
/// bounds the total work of a single call.
pub const MAX_SAMPLING_RESOLUTION: u32 = 100_000;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Julian Date (days)
pub type JulianDate = f64;
