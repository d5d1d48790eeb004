use super::Point3;

/// An element of a matrix array, lying in the plane `z = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Element {
    pub(crate) idx: usize,
    x: f64,
    y: f64,
}

impl Element {
    /// Creates a new [`Element`] centered at `(x, y, 0)`.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { idx: 0, x, y }
    }

    /// Gets the index of the element in the array.
    #[must_use]
    pub const fn idx(&self) -> usize {
        self.idx
    }

    /// Gets the x-coordinate of the element center.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Gets the y-coordinate of the element center.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Gets the position of the element center.
    #[must_use]
    pub fn position(&self) -> Point3 {
        Point3::new(self.x, self.y, 0.)
    }
}
