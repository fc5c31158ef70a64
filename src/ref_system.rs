use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::constants::Radian;

/// Construct a right-handed 3×3 rotation matrix around one of the principal axes (X, Y, or Z).
///
/// This function builds a [`nalgebra::Matrix3`] representing an **active rotation**
/// of a 3D vector by an angle `alpha` around the chosen axis, in the direct
/// (counter-clockwise) sense.
///
/// # Arguments
///
/// * `alpha` - Rotation angle in **radians** (positive = direct/trigonometric sense).
/// * `k` - Index of the axis of rotation:
///   * `0` → X-axis
///   * `1` → Y-axis
///   * `2` → Z-axis
///
/// # Returns
///
/// A 3×3 rotation matrix `R` such that the rotated vector is `x' = R · x`.
///
/// # Panics
///
/// Panics if `k > 2`, as only axes 0–2 are valid.
pub fn rotmt(alpha: Radian, k: usize) -> Matrix3<f64> {
    let axis = match k {
        0 => Vector3::x_axis(),
        1 => Vector3::y_axis(),
        2 => Vector3::z_axis(),
        _ => panic!("**** ROTMT: invalid axis index {k} (must be 0,1,2) ****"),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Rotate a perifocal (orbital-plane) position into the ecliptic frame.
///
/// The transformation composes three elementary rotations, applied in this
/// fixed order:
///
/// 1. argument of perihelion `ω` about the orbital-plane normal (Z),
/// 2. inclination `i` about the line of nodes (X),
/// 3. longitude of the ascending node `Ω` about the ecliptic pole (Z).
///
/// The order is load-bearing: these rotations do not commute, and swapping any
/// two of them lands the vector in a different frame.
///
/// Arguments
/// ---------
/// * `perifocal`: position in the orbital plane, periapsis along +X, `z = 0`
/// * `periapsis_argument`: ω in radians
/// * `inclination`: i in radians
/// * `ascending_node_longitude`: Ω in radians
///
/// Return
/// ------
/// * the same position expressed in the Sun-centered ecliptic frame
pub fn orbital_to_ecliptic(
    perifocal: &Vector3<f64>,
    periapsis_argument: Radian,
    inclination: Radian,
    ascending_node_longitude: Radian,
) -> Vector3<f64> {
    let in_plane = rotmt(periapsis_argument, 2) * perifocal;
    let tilted = rotmt(inclination, 0) * in_plane;
    rotmt(ascending_node_longitude, 2) * tilted
}
