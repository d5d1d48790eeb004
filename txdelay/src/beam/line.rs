use txdelay_core::{common::sign, error::DelayError, geometry::Point3, param::TxParam};

use super::{validate_target, DelayLaw};

/// Focus on the line through two points.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LineFocus {
    /// A point on the focal line in \[m\].
    pub start: Point3,
    /// Another point on the focal line in \[m\].
    pub end: Point3,
}

impl LineFocus {
    /// Creates a new [`LineFocus`].
    #[must_use]
    pub const fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }
}

impl DelayLaw for LineFocus {
    fn raw_delays(&self, param: &TxParam) -> Result<Vec<f64>, DelayError> {
        param.medium().validate()?;
        validate_target(&self.start)?;
        validate_target(&self.end)?;
        let len = (self.end - self.start).norm();
        if len == 0. {
            return Err(DelayError::InvalidArguments(
                "the two points of the focal line must be distinct".to_string(),
            ));
        }

        let medium = param.medium();
        let s = sign(self.start.z);
        Ok(param
            .elements()
            .iter()
            .map(|e| {
                let p = e.position();
                let d = (p - self.start).cross(&(p - self.end)).norm() / len;
                -medium.time_of_flight(d) * s
            })
            .collect())
    }
}
