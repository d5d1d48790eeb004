use crate::error::DelayError;

const GOLDEN: f64 = 0.381_966_011_250_105_1; // (3 - √5) / 2

/// Placement of the samples taken by [`minimize_bounded`] before refinement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Sampling {
    /// Evenly spaced over the interval.
    #[default]
    Uniform,
    /// The lower bound, then geometrically spaced from `lower + first` up to the upper bound.
    ///
    /// Falls back to [`Sampling::Uniform`] if `first` is not smaller than the interval or fewer than 3 samples are taken.
    Geometric {
        /// Offset of the first sample after the lower bound.
        first: f64,
    },
}

/// Options of [`minimize_bounded`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedOption {
    /// Absolute tolerance on the argument.
    pub xtol: f64,
    /// Maximum number of refinement iterations.
    pub max_iter: usize,
    /// Number of samples taken before refinement.
    ///
    /// The refinement is bracketed around the best sample, so a local minimum elsewhere in the interval is not picked up.
    /// If this is less than 2, the whole interval is refined directly.
    pub num_samples: usize,
    /// Placement of the samples.
    pub sampling: Sampling,
}

impl Default for BoundedOption {
    fn default() -> Self {
        Self {
            xtol: 1e-5,
            max_iter: 500,
            num_samples: 64,
            sampling: Sampling::Uniform,
        }
    }
}

/// Result of [`minimize_bounded`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minimum {
    /// The argument of the minimum.
    pub x: f64,
    /// The value at the minimum.
    pub fx: f64,
    /// The number of function evaluations.
    pub evaluations: usize,
    /// Whether the refinement reached the tolerance within `max_iter` iterations.
    pub converged: bool,
}

/// Finds a minimum of `f` on `[lower, upper]`.
///
/// The interval is first sampled as given by [`BoundedOption::sampling`]; the best sample and its neighbours bracket
/// a Brent bounded minimization (golden section with parabolic interpolation).
/// No derivative of `f` is used. NaN values are treated as `+∞`.
///
/// # Errors
///
/// Returns [`DelayError::InvalidSearchBound`] if the interval, tolerance, or sampling is not valid.
pub fn minimize_bounded<F: FnMut(f64) -> f64>(
    mut f: F,
    lower: f64,
    upper: f64,
    option: BoundedOption,
) -> Result<Minimum, DelayError> {
    if !(lower.is_finite() && upper.is_finite() && lower < upper) {
        return Err(DelayError::InvalidSearchBound(format!(
            "[{}, {}] is not a valid interval",
            lower, upper
        )));
    }
    if !(option.xtol.is_finite() && option.xtol > 0.) {
        return Err(DelayError::InvalidSearchBound(format!(
            "tolerance must be positive (got {})",
            option.xtol
        )));
    }

    if let Sampling::Geometric { first } = option.sampling {
        if !(first.is_finite() && first > 0.) {
            return Err(DelayError::InvalidSearchBound(format!(
                "first sample offset must be positive (got {})",
                first
            )));
        }
    }

    let mut eval = |x: f64| {
        let fx = f(x);
        if fx.is_nan() {
            f64::INFINITY
        } else {
            fx
        }
    };

    if option.num_samples < 2 {
        return Ok(brent(&mut eval, lower, upper, option.xtol, option.max_iter));
    }

    let n = option.num_samples;
    let width = upper - lower;
    let sample = |i: usize| match option.sampling {
        Sampling::Geometric { first } if first < width && n >= 3 => match i {
            0 => lower,
            i if i == n - 1 => upper,
            i => lower + first * (width / first).powf((i - 1) as f64 / (n - 2) as f64),
        },
        _ => lower + width * i as f64 / (n - 1) as f64,
    };
    let (best_idx, best_fx) = (0..n)
        .map(|i| (i, eval(sample(i))))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .unwrap_or((0, f64::INFINITY));
    tracing::trace!(
        "Best of {} samples: f({}) = {}",
        n,
        sample(best_idx),
        best_fx
    );

    let a = sample(best_idx.saturating_sub(1));
    let b = sample((best_idx + 1).min(n - 1));
    let refined = brent(&mut eval, a, b, option.xtol, option.max_iter);
    let evaluations = refined.evaluations + n;
    Ok(if refined.fx <= best_fx {
        Minimum {
            evaluations,
            ..refined
        }
    } else {
        Minimum {
            x: sample(best_idx),
            fx: best_fx,
            evaluations,
            converged: refined.converged,
        }
    })
}

fn brent<F: FnMut(f64) -> f64>(f: &mut F, a: f64, b: f64, xtol: f64, max_iter: usize) -> Minimum {
    let sqrt_eps = f64::EPSILON.sqrt();
    let (mut a, mut b) = (a, b);

    let mut fulc = a + GOLDEN * (b - a);
    let mut nfc = fulc;
    let mut xf = fulc;
    let mut rat = 0.0f64;
    let mut e = 0.0f64;
    let mut fx = f(xf);
    let mut evaluations = 1;
    let mut ffulc = fx;
    let mut fnfc = fx;

    let mut xm = 0.5 * (a + b);
    let mut tol1 = sqrt_eps * xf.abs() + xtol / 3.;
    let mut tol2 = 2. * tol1;

    let mut converged = true;
    while (xf - xm).abs() > tol2 - 0.5 * (b - a) {
        if evaluations > max_iter {
            converged = false;
            break;
        }

        let mut golden = true;
        if e.abs() > tol1 {
            golden = false;
            let mut r = (xf - nfc) * (fx - ffulc);
            let mut q = (xf - fulc) * (fx - fnfc);
            let mut p = (xf - fulc) * q - (xf - nfc) * r;
            q = 2. * (q - r);
            if q > 0. {
                p = -p;
            }
            q = q.abs();
            r = e;
            e = rat;

            if p.abs() < (0.5 * q * r).abs() && p > q * (a - xf) && p < q * (b - xf) {
                rat = p / q;
                let x = xf + rat;
                if (x - a) < tol2 || (b - x) < tol2 {
                    rat = if xm >= xf { tol1 } else { -tol1 };
                }
            } else {
                golden = true;
            }
        }
        if golden {
            e = if xf >= xm { a - xf } else { b - xf };
            rat = GOLDEN * e;
        }

        let x = xf + if rat >= 0. { 1. } else { -1. } * rat.abs().max(tol1);
        let fu = f(x);
        evaluations += 1;
        tracing::trace!("f({}) = {}", x, fu);

        if fu <= fx {
            if x >= xf {
                a = xf;
            } else {
                b = xf;
            }
            fulc = nfc;
            ffulc = fnfc;
            nfc = xf;
            fnfc = fx;
            xf = x;
            fx = fu;
        } else {
            if x < xf {
                a = x;
            } else {
                b = x;
            }
            if fu <= fnfc || nfc == xf {
                fulc = nfc;
                ffulc = fnfc;
                nfc = x;
                fnfc = fu;
            } else if fu <= ffulc || fulc == xf || fulc == nfc {
                fulc = x;
                ffulc = fu;
            }
        }

        xm = 0.5 * (a + b);
        tol1 = sqrt_eps * xf.abs() + xtol / 3.;
        tol2 = 2. * tol1;
    }

    Minimum {
        x: xf,
        fx,
        evaluations,
        converged,
    }
}
