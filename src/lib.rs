//! # Perihelion
//!
//! A Keplerian two-body propagator for small solar-system bodies: given a
//! body's osculating orbital elements, compute its position relative to Earth
//! at an arbitrary instant, or sample that position over a time span at a
//! chosen resolution.
//!
//! The pipeline, leaf-first:
//! - [`time`]: milliseconds since the Unix epoch ↔ Julian Date,
//! - [`kepler`]: Newton–Raphson solution of Kepler's equation, with an
//!   explicit iteration budget,
//! - [`keplerian_element`]: the validated element set (plus Earth's J2000
//!   reference elements),
//! - [`ref_system`]: the perifocal → ecliptic rotation sequence,
//! - [`ephemeris`]: heliocentric and geocentric positions in AU,
//! - [`sampler`]: evenly spaced geocentric samples in kilometers.
//!
//! Everything is a pure function of its inputs; there is no global state and
//! no I/O, so concurrent calls need no coordination. Elliptical orbits only:
//! eccentricities outside `[0, 1)` are rejected at element construction.

pub mod constants;
pub mod ephemeris;
pub mod kepler;
pub mod keplerian_element;
pub mod perihelion_errors;
pub mod ref_system;
pub mod sampler;
pub mod time;

pub use keplerian_element::KeplerianElements;
pub use perihelion_errors::PerihelionError;
pub use sampler::{sample_positions, PositionSample};
