use derive_more::Debug;

/// \[°\]
#[allow(non_camel_case_types)]
pub struct deg;

/// \[rad\]
#[allow(non_camel_case_types)]
pub struct rad;

/// Angle
#[repr(C)]
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug, Default)]
#[debug("{}rad", radian)]
pub struct Angle {
    radian: f64,
}

impl Angle {
    /// An angle of zero
    pub const ZERO: Self = Self { radian: 0.0 };

    /// An angle of π
    pub const PI: Self = Self {
        radian: std::f64::consts::PI,
    };

    /// Returns the angle in radian
    #[must_use]
    pub const fn radian(self) -> f64 {
        self.radian
    }

    /// Returns the angle in degree
    #[must_use]
    pub fn degree(self) -> f64 {
        self.radian.to_degrees()
    }

    /// Returns the sine of the angle
    #[must_use]
    pub fn sin(self) -> f64 {
        self.radian.sin()
    }

    /// Returns the cosine of the angle
    #[must_use]
    pub fn cos(self) -> f64 {
        self.radian.cos()
    }

    /// Returns `true` if the angle is a valid tilt, i.e., `|angle| < π/2`.
    #[must_use]
    pub fn is_valid_tilt(self) -> bool {
        self.radian.abs() < std::f64::consts::FRAC_PI_2
    }
}

impl std::ops::Mul<deg> for f64 {
    type Output = Angle;

    fn mul(self, _rhs: deg) -> Self::Output {
        Self::Output {
            radian: self.to_radians(),
        }
    }
}

impl std::ops::Mul<rad> for f64 {
    type Output = Angle;

    fn mul(self, _rhs: rad) -> Self::Output {
        Self::Output { radian: self }
    }
}

impl std::ops::Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Self::Output {
        Self {
            radian: -self.radian,
        }
    }
}
