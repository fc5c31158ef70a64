use serde::{Deserialize, Serialize};

use crate::constants::{Kilometer, AU, MAX_SAMPLING_RESOLUTION};
use crate::ephemeris::geocentric_position;
use crate::keplerian_element::KeplerianElements;
use crate::perihelion_errors::PerihelionError;
use crate::time::julian_date;

/// Earth-centered position in kilometers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeocentricKm {
    pub x: Kilometer,
    pub y: Kilometer,
    pub z: Kilometer,
}

/// One timestamped sample of a body's geocentric position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionSample {
    /// Milliseconds since the Unix epoch. Always the same instant the
    /// position was computed for.
    pub timestamp: i64,
    pub geocentric_position_km: GeocentricKm,
}

/// Sample a body's geocentric position over an evenly spaced time span.
///
/// Produces `resolution + 1` samples at `tₖ = start + k·Δ` with
/// `Δ = (end − start) / resolution`; `resolution = 0` yields exactly one
/// sample at `start_millis`. Each `tₖ` is derived from `k` directly rather
/// than by accumulating `Δ`, so rounding error does not drift across long
/// spans and the reported timestamp is exactly the instant the position was
/// computed for.
///
/// The whole computation is a pure function of its arguments: no hidden
/// state, identical inputs give bit-identical output.
///
/// Arguments
/// ---------
/// * `body`: orbital elements of the body to track
/// * `earth`: Earth's reference elements
///   (typically [`KeplerianElements::earth_j2000`])
/// * `start_millis`, `end_millis`: time span, milliseconds since the Unix
///   epoch, `end_millis >= start_millis`
/// * `resolution`: number of additional samples beyond the first, at most
///   [`MAX_SAMPLING_RESOLUTION`]
///
/// Return
/// ------
/// * samples ordered by non-decreasing timestamp, spanning
///   `[start_millis, end_millis]`, positions in kilometers
pub fn sample_positions(
    body: &KeplerianElements,
    earth: &KeplerianElements,
    start_millis: i64,
    end_millis: i64,
    resolution: u32,
) -> Result<Vec<PositionSample>, PerihelionError> {
    if end_millis < start_millis {
        return Err(PerihelionError::InvalidTimeRange {
            start: start_millis,
            end: end_millis,
        });
    }
    if resolution > MAX_SAMPLING_RESOLUTION {
        return Err(PerihelionError::ResolutionTooLarge {
            resolution,
            max: MAX_SAMPLING_RESOLUTION,
        });
    }

    let delta = if resolution == 0 {
        0.0
    } else {
        (end_millis - start_millis) as f64 / resolution as f64
    };

    let mut samples = Vec::with_capacity(resolution as usize + 1);
    for step in 0..=resolution {
        let timestamp = (start_millis as f64 + step as f64 * delta).round() as i64;
        let position_au = geocentric_position(julian_date(timestamp), body, earth)?;
        let position_km = position_au * AU;

        samples.push(PositionSample {
            timestamp,
            geocentric_position_km: GeocentricKm {
                x: position_km.x,
                y: position_km.y,
                z: position_km.z,
            },
        });
    }

    Ok(samples)
}
