use txdelay_core::{common::sign, error::DelayError, geometry::Point3, param::TxParam};

use super::{validate_target, DelayLaw};

/// Focus on a single point.
///
/// If `pos.z` is negative, `pos` is a virtual source and the wave diverges from it.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Focus {
    /// The position of the focal point in \[m\].
    pub pos: Point3,
}

impl Focus {
    /// Creates a new [`Focus`].
    #[must_use]
    pub const fn new(pos: Point3) -> Self {
        Self { pos }
    }
}

impl DelayLaw for Focus {
    fn raw_delays(&self, param: &TxParam) -> Result<Vec<f64>, DelayError> {
        param.medium().validate()?;
        validate_target(&self.pos)?;
        let medium = param.medium();
        let s = sign(self.pos.z);
        Ok(param
            .elements()
            .iter()
            .map(|e| -medium.time_of_flight((self.pos - e.position()).norm()) * s)
            .collect())
    }
}
