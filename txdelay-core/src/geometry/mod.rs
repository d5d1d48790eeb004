mod element;
mod grid;

use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};

use crate::error::DelayError;

pub use element::*;

/// 3-dimensional column vector.
pub type Vector3 = nalgebra::Vector3<f64>;
/// 3-dimensional unit vector.
pub type UnitVector3 = nalgebra::UnitVector3<f64>;
/// 3-dimensional point.
pub type Point3 = nalgebra::Point3<f64>;

/// Width (along x) and height (along y) of a single element.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementSize {
    /// The element width in the x-direction.
    pub width: f64,
    /// The element height in the y-direction.
    pub height: f64,
}

/// Overall width and height of the rectangular aperture of a matrix array.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aperture {
    /// The aperture width in the x-direction.
    pub width: f64,
    /// The aperture height in the y-direction.
    pub height: f64,
}

/// Positions of the elements of a matrix array.
#[derive(Clone, Debug, PartialEq, derive_more::Deref)]
pub struct ElementGeometry {
    #[deref]
    elements: Vec<Element>,
}

impl ElementGeometry {
    /// Creates a new [`ElementGeometry`] from the x- and y-coordinates of the element centers.
    ///
    /// # Errors
    ///
    /// Returns [`DelayError::MissingGeometry`] if the coordinates are empty, have different lengths, or are not finite.
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, DelayError> {
        if x.is_empty() {
            return Err(DelayError::MissingGeometry(
                "no element is given".to_string(),
            ));
        }
        if x.len() != y.len() {
            return Err(DelayError::MissingGeometry(format!(
                "{} x-coordinates but {} y-coordinates",
                x.len(),
                y.len()
            )));
        }
        if let Some(i) = x
            .iter()
            .zip(y.iter())
            .position(|(x, y)| !x.is_finite() || !y.is_finite())
        {
            return Err(DelayError::MissingGeometry(format!(
                "the position of element {} is not finite",
                i
            )));
        }
        Ok(Self {
            elements: x
                .iter()
                .zip(y.iter())
                .enumerate()
                .map(|(idx, (&x, &y))| {
                    let mut element = Element::new(x, y);
                    element.idx = idx;
                    element
                })
                .collect(),
        })
    }

    /// Creates a new [`ElementGeometry`] from a two-row matrix.
    ///
    /// The first row contains the x-coordinates and the second row the y-coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`DelayError::MissingGeometry`] if `rows` does not have exactly two valid rows.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, DelayError> {
        match rows {
            [x, y] => Self::new(x.as_ref(), y.as_ref()),
            _ => Err(DelayError::MissingGeometry(format!(
                "expected 2 rows, got {}",
                rows.len()
            ))),
        }
    }

    /// Creates a centered `nx` by `ny` matrix array with the given pitch.
    ///
    /// The element centers are `(i - (n + 1) / 2) * pitch` for `i = 1..=n` in each direction,
    /// and the elements are ordered column by column, i.e., the y-index varies fastest.
    ///
    /// # Errors
    ///
    /// Returns [`DelayError::MissingGeometry`] if `nx` or `ny` is zero or `pitch` is not finite.
    pub fn matrix(nx: usize, ny: usize, pitch: f64) -> Result<Self, DelayError> {
        let centers = |n: usize| {
            (1..=n)
                .map(|i| (i as f64 - (n as f64 + 1.) / 2.) * pitch)
                .collect::<Vec<_>>()
        };
        let (x, y): (Vec<_>, Vec<_>) = centers(nx)
            .into_iter()
            .cartesian_product(centers(ny))
            .unzip();
        Self::new(&x, &y)
    }

    /// Gets the number of elements.
    #[must_use]
    pub fn num_elements(&self) -> usize {
        self.elements.len()
    }

    /// Gets the x- and y-coordinates as a two-row matrix.
    #[must_use]
    pub fn rows(&self) -> [Vec<f64>; 2] {
        [
            self.elements.iter().map(Element::x).collect(),
            self.elements.iter().map(Element::y).collect(),
        ]
    }

    /// Gets the aperture of the array, i.e., the extent of the element centers plus one element size.
    #[must_use]
    pub fn aperture(&self, size: ElementSize) -> Aperture {
        let extent = |v: MinMaxResult<f64>| match v {
            MinMaxResult::NoElements => 0.,
            MinMaxResult::OneElement(_) => 0.,
            MinMaxResult::MinMax(min, max) => max - min,
        };
        Aperture {
            width: extent(self.iter().map(Element::x).minmax_by(f64::total_cmp)) + size.width,
            height: extent(self.iter().map(Element::y).minmax_by(f64::total_cmp)) + size.height,
        }
    }
}

impl<'a> IntoIterator for &'a ElementGeometry {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
