//! Angle unit conversions.

use std::f64::consts::PI;

/// Tilt applied once to the rig mount at setup time, in degrees.
///
/// The device is held upright with the screen facing the user, so its
/// reference "up" has to be turned into the camera's forward axis.
pub const RIG_TILT_DEGREES: f64 = -90.0;

/// Converts degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Converts radians to degrees.
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// The rig tilt in radians.
#[inline]
pub fn rig_tilt_radians() -> f64 {
    degrees_to_radians(RIG_TILT_DEGREES)
}
