use crate::{common::Angle, geometry::Aperture};

/// Direction of an observation point given by azimuth and elevation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spherical {
    /// The azimuth, measured in the x-y plane from the x-axis.
    pub azimuth: Angle,
    /// The elevation, measured from the x-y plane.
    pub elevation: Angle,
}

impl Spherical {
    /// Converts a cartesian direction to azimuth and elevation.
    #[must_use]
    pub fn from_cartesian(x: f64, y: f64, z: f64) -> Self {
        use crate::common::rad;
        Self {
            azimuth: y.atan2(x) * rad,
            elevation: z.atan2(x.hypot(y)) * rad,
        }
    }

    /// Gets the cartesian coordinates of the point at radial distance `r` in this direction.
    #[must_use]
    pub fn to_cartesian(self, r: f64) -> (f64, f64, f64) {
        let cos_el = self.elevation.cos();
        (
            r * cos_el * self.azimuth.cos(),
            r * cos_el * self.azimuth.sin(),
            r * self.elevation.sin(),
        )
    }
}

/// Calculates the solid angle \[sr\] subtended by a rectangular aperture.
///
/// The aperture is centered at the origin in the plane `z = 0`, and the observation point lies at radial distance `r` in the direction `dir`.
/// See Khadjavi, A. "Calculation of solid angle subtended by rectangular apertures." JOSA 58.10 (1968): 1417-1418.
///
/// `solid_angle` gives `2π` at `r = 0` and tends to `0` as `r` grows.
/// It is continuous in `r` and decreases monotonically for the usual apertures and directions,
/// but this is not guaranteed for every combination of aperture and direction.
#[must_use]
pub fn solid_angle(r: f64, aperture: &Aperture, dir: Spherical) -> f64 {
    let (px, py, h) = dir.to_cartesian(r);
    let l1 = aperture.width / 2. + px;
    let l2 = -aperture.width / 2. + px;
    let b1 = aperture.height / 2. + py;
    let b2 = aperture.height / 2. - py;

    let w = |l: f64, b: f64| {
        let den = l.hypot(h) * b.hypot(h);
        if den == 0. {
            return 0.;
        }
        (l * b / den).clamp(-1., 1.).asin()
    };

    w(l1, b1) + w(l1, b2) - w(l2, b1) - w(l2, b2)
}
