use txdelay_core::{
    common::Angle, delays::TxDelays, error::DelayError, param::TxParam,
};

use crate::beam::{Beam, Diverging, Plane};

/// Shorthands for the three beam patterns.
pub trait TxParamExt {
    /// Delays for a focus point (one coordinate each) or a focus line (two coordinates each).
    ///
    /// # Errors
    ///
    /// See [`Beam::focused`] and [`crate::tx_delay`].
    fn focused(&self, x0: &[f64], y0: &[f64], z0: &[f64]) -> Result<TxDelays, DelayError>;

    /// Delays for a plane wave tilted by `tilt_x` about the x-axis and `tilt_y` about the y-axis.
    ///
    /// # Errors
    ///
    /// See [`crate::tx_delay`].
    fn plane(&self, tilt_x: Angle, tilt_y: Angle) -> Result<TxDelays, DelayError>;

    /// Delays for a diverging wave with the solid angle `omega` \[sr\].
    ///
    /// # Errors
    ///
    /// See [`crate::tx_delay`].
    fn diverging(&self, tilt_x: Angle, tilt_y: Angle, omega: f64) -> Result<TxDelays, DelayError>;
}

impl TxParamExt for TxParam {
    fn focused(&self, x0: &[f64], y0: &[f64], z0: &[f64]) -> Result<TxDelays, DelayError> {
        crate::tx_delay(self, &Beam::focused(x0, y0, z0)?)
    }

    fn plane(&self, tilt_x: Angle, tilt_y: Angle) -> Result<TxDelays, DelayError> {
        crate::tx_delay(self, &Plane::new(tilt_x, tilt_y).into())
    }

    fn diverging(&self, tilt_x: Angle, tilt_y: Angle, omega: f64) -> Result<TxDelays, DelayError> {
        crate::tx_delay(self, &Diverging::new(tilt_x, tilt_y, omega).into())
    }
}
