use txdelay_core::{common::rad, delays::TxDelays, error::DelayError, param::TxParam};

use crate::beam::{Beam, Diverging, Plane};

/// A positional argument.
///
/// This mirrors the loosely typed calling convention where the beam pattern is told apart by the number and kind of arguments:
///
/// | arguments | beam pattern |
/// |---|---|
/// | `x0, y0, z0, param` | focus point (scalars) or focus line (two-element sequences) |
/// | `param, tilt_x, tilt_y` | plane wave |
/// | `param, tilt_x, tilt_y, omega` | diverging wave |
///
/// Tilt angles are in \[rad\] and `omega` in \[sr\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Argument<'a> {
    /// The array and medium parameters.
    Param(&'a TxParam),
    /// A scalar.
    Scalar(f64),
    /// A sequence of values.
    Sequence(&'a [f64]),
}

impl<'a> From<&'a TxParam> for Argument<'a> {
    fn from(param: &'a TxParam) -> Self {
        Self::Param(param)
    }
}

impl From<f64> for Argument<'_> {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl<'a> From<&'a [f64]> for Argument<'a> {
    fn from(v: &'a [f64]) -> Self {
        Self::Sequence(v)
    }
}

impl Argument<'_> {
    fn coordinates(&self) -> Result<Vec<f64>, DelayError> {
        match self {
            Self::Scalar(v) => Ok(vec![*v]),
            Self::Sequence(v) => Ok(v.to_vec()),
            Self::Param(_) => Err(DelayError::InvalidArguments(
                "the focus coordinates must be numbers".to_string(),
            )),
        }
    }

    fn scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(v) => Some(*v),
            _ => None,
        }
    }
}

impl Beam {
    /// Tells apart the beam pattern from positional arguments.
    ///
    /// # Errors
    ///
    /// - [`DelayError::InvalidArguments`] if the arguments do not match any pattern.
    /// - [`DelayError::MismatchedTargetLength`] if the focus coordinates have inconsistent lengths.
    /// - [`DelayError::InvalidTiltAngle`] if a tilt angle is not a scalar.
    /// - [`DelayError::InvalidSolidAngle`] if the solid angle is not a scalar.
    pub fn from_args<'a>(args: &[Argument<'a>]) -> Result<(&'a TxParam, Beam), DelayError> {
        match args {
            [x0, y0, z0, Argument::Param(param)] => {
                tracing::debug!("Focus is selected.");
                let beam = Beam::focused(
                    &x0.coordinates()?,
                    &y0.coordinates()?,
                    &z0.coordinates()?,
                )?;
                Ok((*param, beam))
            }
            [Argument::Param(param), tilt_x, tilt_y, omega] => {
                tracing::debug!("Diverging wave is selected.");
                let (tilt_x, tilt_y) = tilts(tilt_x, tilt_y)?;
                let omega = omega.scalar().ok_or_else(|| {
                    DelayError::InvalidSolidAngle("OMEGA must be a scalar".to_string())
                })?;
                Ok((*param, Diverging::new(tilt_x * rad, tilt_y * rad, omega).into()))
            }
            [Argument::Param(param), tilt_x, tilt_y] => {
                tracing::debug!("Plane wave is selected.");
                let (tilt_x, tilt_y) = tilts(tilt_x, tilt_y)?;
                Ok((*param, Plane::new(tilt_x * rad, tilt_y * rad).into()))
            }
            _ => Err(DelayError::InvalidArguments(format!(
                "{} arguments do not match any beam pattern",
                args.len()
            ))),
        }
    }
}

fn tilts(tilt_x: &Argument, tilt_y: &Argument) -> Result<(f64, f64), DelayError> {
    tilt_x.scalar().zip(tilt_y.scalar()).ok_or_else(|| {
        DelayError::InvalidTiltAngle("TILTx and TILTy must be scalars".to_string())
    })
}

/// Calculates the transmit delays from positional arguments.
///
/// # Errors
///
/// See [`Beam::from_args`] and [`crate::tx_delay`].
pub fn tx_delay_from_args(args: &[Argument]) -> Result<TxDelays, DelayError> {
    let (param, beam) = Beam::from_args(args)?;
    crate::tx_delay(param, &beam)
}
