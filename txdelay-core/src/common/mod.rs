mod angle;

pub use std::f64::consts::PI;

pub use angle::*;

/// meter
pub const METER: f64 = 1.0;

/// millimeter
pub const MILLIMETER: f64 = METER / 1000.0;

/// The default longitudinal velocity in soft tissue in \[m/s\]
pub const DEFAULT_SOUND_SPEED: f64 = 1540.0 * METER;

/// \[㎜\]
#[allow(non_upper_case_globals)]
pub const mm: f64 = MILLIMETER;

/// Sign of `x` with `sign(0) == 0`.
///
/// Unlike [`f64::signum`], zero (of either sign) maps to zero and NaN maps to NaN.
#[must_use]
pub fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        x * 0.0
    }
}
