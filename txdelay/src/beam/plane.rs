use txdelay_core::{common::Angle, error::DelayError, param::TxParam};

use super::{validate_tilt, DelayLaw};

/// Tilted plane wave
///
/// The delays form a linear ramp across the aperture.
/// If both tilt angles are zero, all the elements fire at the same time.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Plane {
    /// The tilt angle about the x-axis.
    pub tilt_x: Angle,
    /// The tilt angle about the y-axis.
    pub tilt_y: Angle,
}

impl Plane {
    /// Creates a new [`Plane`].
    #[must_use]
    pub const fn new(tilt_x: Angle, tilt_y: Angle) -> Self {
        Self { tilt_x, tilt_y }
    }
}

impl DelayLaw for Plane {
    fn raw_delays(&self, param: &TxParam) -> Result<Vec<f64>, DelayError> {
        param.medium().validate()?;
        validate_tilt(self.tilt_x, self.tilt_y)?;
        let medium = param.medium();
        let (sin_x, sin_y) = (self.tilt_x.sin(), self.tilt_y.sin());
        Ok(param
            .elements()
            .iter()
            .map(|e| medium.time_of_flight(e.x() * sin_y - e.y() * sin_x))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;
    use txdelay_core::common::{deg, rad, PI};

    use super::*;
    use crate::tests::{matrix, square4};

    fn plane_check(g: Plane, param: &TxParam) -> anyhow::Result<()> {
        let d = g.raw_delays(param)?;
        param.elements().iter().zip(d).for_each(|(e, d)| {
            let expected = (e.x() * g.tilt_y.radian().sin() - e.y() * g.tilt_x.radian().sin())
                / param.sound_speed();
            approx::assert_abs_diff_eq!(expected, d, epsilon = 1e-15);
        });
        Ok(())
    }

    #[test]
    fn test_plane() -> anyhow::Result<()> {
        let mut rng = rand::rng();
        let param = matrix(8);
        plane_check(Plane::default(), &param)?;
        plane_check(
            Plane::new(
                rng.random_range(-PI / 2.1..PI / 2.1) * rad,
                rng.random_range(-PI / 2.1..PI / 2.1) * rad,
            ),
            &param,
        )?;
        Ok(())
    }

    #[test]
    fn zero_tilt() -> anyhow::Result<()> {
        let d = Plane::default().calc(&matrix(16))?;
        assert!(d.iter().all(|&d| d == 0.));
        let d = Plane::new(0. * deg, 0. * deg).calc(&square4())?;
        assert_eq!(&[0., 0., 0., 0.], d.as_slice());
        Ok(())
    }

    #[test]
    fn tilt_about_y_ramps_along_x() -> anyhow::Result<()> {
        let param = matrix(4);
        let d = Plane::new(0. * deg, 20. * deg).calc(&param)?;
        param
            .elements()
            .iter()
            .zip(d.iter())
            .for_each(|(e, &d)| {
                let expected = (e.x() + 0.45e-3) * (20. * deg).sin() / param.sound_speed();
                approx::assert_abs_diff_eq!(expected, d, epsilon = 1e-15);
            });
        Ok(())
    }

    #[rstest::rstest]
    #[case(90. * deg, 0. * deg)]
    #[case(0. * deg, -90. * deg)]
    #[case(100. * deg, 10. * deg)]
    #[case(f64::NAN * rad, 0. * deg)]
    fn invalid_tilt(#[case] tilt_x: Angle, #[case] tilt_y: Angle) {
        assert!(matches!(
            Plane::new(tilt_x, tilt_y).calc(&square4()),
            Err(DelayError::InvalidTiltAngle(_))
        ));
    }
}
