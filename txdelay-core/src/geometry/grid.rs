use itertools::Itertools;

use super::ElementGeometry;

// -0.0 and 0.0 are the same coordinate.
fn key(v: f64) -> u64 {
    (v + 0.0).to_bits()
}

impl ElementGeometry {
    /// Returns the number of distinct x- and y-coordinates if the elements form a plaid grid.
    ///
    /// A plaid grid is a set of points exactly equal to the Cartesian product of its distinct x- and y-coordinates.
    /// The order of the elements does not matter, but every combination must be present exactly once.
    #[must_use]
    pub fn grid_shape(&self) -> Option<(usize, usize)> {
        let nx = self.iter().map(|e| key(e.x())).unique().count();
        let ny = self.iter().map(|e| key(e.y())).unique().count();
        if nx * ny != self.num_elements() {
            return None;
        }
        let distinct = self
            .iter()
            .map(|e| (key(e.x()), key(e.y())))
            .unique()
            .count();
        (distinct == self.num_elements()).then_some((nx, ny))
    }

    /// Returns `true` if the elements form a plaid grid.
    #[must_use]
    pub fn is_plaid(&self) -> bool {
        self.grid_shape().is_some()
    }
}
