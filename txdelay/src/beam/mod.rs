mod diverging;
mod focus;
mod line;
mod plane;

pub use diverging::{Diverging, DivergingOption};
pub use focus::Focus;
pub use line::LineFocus;
pub use plane::Plane;

use txdelay_core::{
    common::Angle,
    delays::TxDelays,
    error::DelayError,
    geometry::Point3,
    param::TxParam,
};

/// A delay law of a beam pattern.
pub trait DelayLaw: std::fmt::Debug {
    /// Calculates the transmit delay of each element in \[s\] before normalization.
    ///
    /// # Errors
    ///
    /// Returns a [`DelayError`] if `param` or the beam pattern is not valid.
    fn raw_delays(&self, param: &TxParam) -> Result<Vec<f64>, DelayError>;

    /// Calculates the transmit delays shifted so that the minimum delay is zero.
    ///
    /// # Errors
    ///
    /// See [`DelayLaw::raw_delays`].
    fn calc(&self, param: &TxParam) -> Result<TxDelays, DelayError> {
        self.raw_delays(param).map(TxDelays::from_raw)
    }
}

/// Beam pattern
#[derive(Clone, Debug, PartialEq, derive_more::From)]
pub enum Beam {
    /// Focus on a point.
    Focus(Focus),
    /// Focus on a line.
    LineFocus(LineFocus),
    /// Tilted plane wave.
    Plane(Plane),
    /// Diverging wave.
    Diverging(Diverging),
}

impl Beam {
    /// Creates a focus point from one coordinate each, or a focus line from two coordinates each.
    ///
    /// # Errors
    ///
    /// Returns [`DelayError::MismatchedTargetLength`] if `x0`, `y0`, and `z0` do not all have length 1 or all have length 2.
    pub fn focused(x0: &[f64], y0: &[f64], z0: &[f64]) -> Result<Self, DelayError> {
        match (x0, y0, z0) {
            ([x], [y], [z]) => Ok(Focus::new(Point3::new(*x, *y, *z)).into()),
            ([x1, x2], [y1, y2], [z1, z2]) => Ok(LineFocus::new(
                Point3::new(*x1, *y1, *z1),
                Point3::new(*x2, *y2, *z2),
            )
            .into()),
            _ => Err(DelayError::MismatchedTargetLength {
                x: x0.len(),
                y: y0.len(),
                z: z0.len(),
            }),
        }
    }
}

impl DelayLaw for Beam {
    fn raw_delays(&self, param: &TxParam) -> Result<Vec<f64>, DelayError> {
        match self {
            Self::Focus(b) => b.raw_delays(param),
            Self::LineFocus(b) => b.raw_delays(param),
            Self::Plane(b) => b.raw_delays(param),
            Self::Diverging(b) => b.raw_delays(param),
        }
    }
}

pub(crate) fn validate_tilt(tilt_x: Angle, tilt_y: Angle) -> Result<(), DelayError> {
    if tilt_x.is_valid_tilt() && tilt_y.is_valid_tilt() {
        Ok(())
    } else {
        Err(DelayError::InvalidTiltAngle(format!(
            "got {:?} and {:?}",
            tilt_x, tilt_y
        )))
    }
}

pub(crate) fn validate_target(pos: &Point3) -> Result<(), DelayError> {
    if pos.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(DelayError::InvalidArguments(format!(
            "focus ({}, {}, {}) is not finite",
            pos.x, pos.y, pos.z
        )))
    }
}
