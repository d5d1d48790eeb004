use txdelay_core::{
    acoustics::{solid_angle, Spherical},
    common::{Angle, PI},
    error::DelayError,
    geometry::{Aperture, Point3},
    optimize::{minimize_bounded, BoundedOption, Minimum, Sampling},
    param::TxParam,
};

use super::{validate_tilt, DelayLaw, Focus};

/// The option of [`Diverging`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DivergingOption {
    /// The maximum distance of the virtual source from the array center in \[m\].
    ///
    /// Solid angles smaller than the one subtended at this distance cannot be reached.
    pub max_distance: f64,
    /// The absolute tolerance on the virtual source distance in \[m\].
    pub xtol: f64,
    /// The number of samples taken over `[0, max_distance]` before refinement.
    ///
    /// The samples are geometrically spaced, starting at a hundredth of the aperture diagonal.
    pub num_samples: usize,
    /// The maximum number of refinement iterations.
    pub max_iter: usize,
}

impl Default for DivergingOption {
    fn default() -> Self {
        Self {
            max_distance: 2. * PI,
            xtol: 1e-6,
            num_samples: 64,
            max_iter: 500,
        }
    }
}

/// Diverging wave
///
/// The wave diverges from a virtual source behind the array.
/// The virtual source lies in the direction given by the tilt angles,
/// at the distance from which the aperture subtends the solid angle `omega`.
/// The elements must be on a plaid grid.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Diverging {
    /// The tilt angle about the x-axis.
    pub tilt_x: Angle,
    /// The tilt angle about the y-axis.
    pub tilt_y: Angle,
    /// The solid angle subtended by the aperture in \[sr\], in `[0, 2π]`.
    pub omega: f64,
    /// The option of the solver.
    pub option: DivergingOption,
}

impl Diverging {
    /// Creates a new [`Diverging`] with the default option.
    #[must_use]
    pub fn new(tilt_x: Angle, tilt_y: Angle, omega: f64) -> Self {
        Self {
            tilt_x,
            tilt_y,
            omega,
            option: DivergingOption::default(),
        }
    }

    /// Gets the direction of the virtual source, i.e., `(0, 0, -1)` rotated by `tilt_x` about the x-axis and then by `tilt_y` about the y-axis.
    #[must_use]
    pub fn direction(&self) -> Spherical {
        let (sin_x, cos_x) = (self.tilt_x.sin(), self.tilt_x.cos());
        let (sin_y, cos_y) = (self.tilt_y.sin(), self.tilt_y.cos());
        Spherical::from_cartesian(-sin_y * cos_x, sin_x, -cos_y * cos_x)
    }

    /// Calculates the position of the virtual source.
    ///
    /// # Errors
    ///
    /// Returns [`DelayError::InvalidTiltAngle`], [`DelayError::InvalidSolidAngle`], [`DelayError::NonPlaidGrid`],
    /// [`DelayError::MissingElementSize`], or [`DelayError::InvalidSearchBound`] if the input is not valid.
    pub fn virtual_source(&self, param: &TxParam) -> Result<Point3, DelayError> {
        validate_tilt(self.tilt_x, self.tilt_y)?;
        if !(0.0..=2. * PI).contains(&self.omega) {
            return Err(DelayError::InvalidSolidAngle(format!("got {}", self.omega)));
        }
        if !param.elements().is_plaid() {
            return Err(DelayError::NonPlaidGrid);
        }

        let aperture = param.aperture()?;
        let dir = self.direction();
        let min = solve_distance(&aperture, dir, self.omega, &self.option)?;
        let (x, y, z) = dir.to_cartesian(min.x);
        tracing::debug!(
            "Virtual source at ({}, {}, {}) (r = {}, |Ω(r) - ω| = {}, {} evaluations).",
            x,
            y,
            z,
            min.x,
            min.fx,
            min.evaluations
        );
        if !min.converged {
            tracing::warn!(
                "Virtual source distance did not converge within {} iterations.",
                self.option.max_iter
            );
        }
        Ok(Point3::new(x, y, z))
    }
}

/// Finds the distance `r` in `dir` from which `aperture` subtends the solid angle `omega`.
///
/// `|Ω(r) - ω|` is minimized over `[0, option.max_distance]`.
/// The samples taken before refinement start at a hundredth of the aperture diagonal and are geometrically spaced.
///
/// # Errors
///
/// Returns [`DelayError::InvalidSearchBound`] if `option` is not valid.
pub fn solve_distance(
    aperture: &Aperture,
    dir: Spherical,
    omega: f64,
    option: &DivergingOption,
) -> Result<Minimum, DelayError> {
    minimize_bounded(
        |r| (solid_angle(r, aperture, dir) - omega).abs(),
        0.,
        option.max_distance,
        BoundedOption {
            xtol: option.xtol,
            max_iter: option.max_iter,
            num_samples: option.num_samples,
            sampling: match aperture.width.hypot(aperture.height) * 1e-2 {
                first if first > 0. => Sampling::Geometric { first },
                _ => Sampling::Uniform,
            },
        },
    )
}

impl DelayLaw for Diverging {
    fn raw_delays(&self, param: &TxParam) -> Result<Vec<f64>, DelayError> {
        param.medium().validate()?;
        Focus::new(self.virtual_source(param)?).raw_delays(param)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use txdelay_core::{
        common::{deg, mm, rad},
        geometry::ElementGeometry,
    };

    use super::*;
    use crate::tests::{matrix, square4};

    const APERTURE: Aperture = Aperture {
        width: 9.85 * mm,
        height: 9.85 * mm,
    };

    #[rstest::rstest]
    #[case(1e-3)]
    #[case(1e-2)]
    #[case(0.1)]
    #[case(1.)]
    #[case(PI / 2.)]
    #[case(3.)]
    #[case(6.)]
    fn solves_on_axis(#[case] omega: f64) -> anyhow::Result<()> {
        let dir = Diverging::new(0. * rad, 0. * rad, omega).direction();
        let min = solve_distance(&APERTURE, dir, omega, &DivergingOption::default())?;
        assert!(min.converged);

        // Ω = 4 asin(a² / (a² + r²)) on the axis of a square with half-side a
        let a = APERTURE.width / 2.;
        let expected_r = (a * a / (omega / 4.).sin() - a * a).sqrt();
        approx::assert_abs_diff_eq!(expected_r, min.x, epsilon = 1e-6);
        approx::assert_abs_diff_eq!(omega, solid_angle(min.x, &APERTURE, dir), epsilon = 1e-3);
        Ok(())
    }

    #[test]
    fn hemisphere() -> anyhow::Result<()> {
        let dir = Diverging::new(0. * rad, 0. * rad, 2. * PI).direction();
        let min = solve_distance(&APERTURE, dir, 2. * PI, &DivergingOption::default())?;
        approx::assert_abs_diff_eq!(0., min.x, epsilon = 1e-5);
        Ok(())
    }

    #[test]
    fn unreachable_solid_angle_is_capped() -> anyhow::Result<()> {
        let option = DivergingOption {
            max_distance: 10. * mm,
            ..Default::default()
        };
        let dir = Diverging::new(0. * rad, 0. * rad, 0.).direction();
        let min = solve_distance(&APERTURE, dir, 1e-3, &option)?;
        approx::assert_abs_diff_eq!(10. * mm, min.x, epsilon = 1e-5);
        Ok(())
    }

    #[rstest::rstest]
    #[case(0. * deg, 0. * deg)]
    #[case(20. * deg, 0. * deg)]
    #[case(0. * deg, -30. * deg)]
    #[case(15. * deg, 25. * deg)]
    fn direction(#[case] tilt_x: Angle, #[case] tilt_y: Angle) -> anyhow::Result<()> {
        let g = Diverging::new(tilt_x, tilt_y, PI / 2.);
        let (x, y, z) = g.direction().to_cartesian(1.);
        approx::assert_abs_diff_eq!(-tilt_y.sin() * tilt_x.cos(), x, epsilon = 1e-12);
        approx::assert_abs_diff_eq!(tilt_x.sin(), y, epsilon = 1e-12);
        approx::assert_abs_diff_eq!(-tilt_y.cos() * tilt_x.cos(), z, epsilon = 1e-12);

        let param = matrix(32);
        let vs = g.virtual_source(&param)?;
        assert!(vs.z < 0.);
        let dir = vs.coords.normalize();
        approx::assert_abs_diff_eq!(x, dir.x, epsilon = 1e-9);
        approx::assert_abs_diff_eq!(y, dir.y, epsilon = 1e-9);
        approx::assert_abs_diff_eq!(z, dir.z, epsilon = 1e-9);
        approx::assert_abs_diff_eq!(
            PI / 2.,
            solid_angle(vs.coords.norm(), &param.aperture()?, g.direction()),
            epsilon = 1e-3
        );
        Ok(())
    }

    #[test]
    fn diverges_from_virtual_source() -> anyhow::Result<()> {
        let param = matrix(16);
        let g = Diverging::new(0. * deg, 0. * deg, PI / 2.);
        let vs = g.virtual_source(&param)?;
        let d = g.calc(&param)?;
        assert_eq!(d, Focus::new(vs).calc(&param)?);
        // the elements nearest to the center fire first
        let center = param
            .elements()
            .iter()
            .map(|e| e.x().hypot(e.y()))
            .enumerate()
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
            .unwrap();
        approx::assert_abs_diff_eq!(0., d[center], epsilon = 1e-15);
        assert!(d.iter().all(|&v| v >= 0.));
        Ok(())
    }

    #[test]
    fn shuffled_grid_is_accepted() -> anyhow::Result<()> {
        let [x, y] = matrix(4).elements().rows();
        let param = TxParam::new(ElementGeometry::new(
            &x.iter().rev().copied().collect::<Vec<_>>(),
            &y.iter().rev().copied().collect::<Vec<_>>(),
        )?)
        .with_element_size(0.25 * mm, 0.25 * mm);
        assert!(Diverging::new(0. * deg, 0. * deg, 1.).calc(&param).is_ok());
        Ok(())
    }

    #[test]
    fn non_plaid_grid() -> anyhow::Result<()> {
        let param = TxParam::new(ElementGeometry::new(
            &[-1. * mm, 1. * mm, -1. * mm, 1.1 * mm],
            &[-1. * mm, -1. * mm, 1. * mm, 1. * mm],
        )?)
        .with_element_size(0.25 * mm, 0.25 * mm);
        assert_eq!(
            Err(DelayError::NonPlaidGrid),
            Diverging::new(0. * deg, 0. * deg, 1.).calc(&param)
        );
        Ok(())
    }

    #[rstest::rstest]
    #[case(-0.1)]
    #[case(2. * PI + 1e-9)]
    #[case(f64::NAN)]
    fn invalid_solid_angle(#[case] omega: f64) {
        assert!(matches!(
            Diverging::new(0. * deg, 0. * deg, omega).calc(&matrix(4)),
            Err(DelayError::InvalidSolidAngle(_))
        ));
    }

    #[test]
    fn invalid_tilt() {
        assert!(matches!(
            Diverging::new(FRAC_PI_2 * rad, 0. * deg, 1.).calc(&matrix(4)),
            Err(DelayError::InvalidTiltAngle(_))
        ));
    }

    #[test]
    fn missing_element_size() {
        assert_eq!(
            Err(DelayError::MissingElementSize),
            Diverging::new(0. * deg, 0. * deg, 1.).calc(&square4())
        );
    }

    #[test]
    fn invalid_search_bound() {
        let g = Diverging {
            option: DivergingOption {
                max_distance: 0.,
                ..Default::default()
            },
            ..Diverging::new(0. * deg, 0. * deg, 1.)
        };
        assert!(matches!(
            g.calc(&matrix(4)),
            Err(DelayError::InvalidSearchBound(_))
        ));
    }
}
