use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Transmit delays in \[s\], one per element.
///
/// The delays are shifted so that the earliest element fires at `t = 0`,
/// i.e., the minimum delay is exactly zero and all others are non-negative.
/// Deserialized delays are normalized in the same way.
#[derive(
    Clone,
    Debug,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    derive_more::Deref,
    derive_more::IntoIterator,
)]
#[serde(from = "Vec<f64>", into = "Vec<f64>")]
pub struct TxDelays(#[into_iterator(owned, ref)] Vec<f64>);

impl TxDelays {
    /// Normalizes raw delays by subtracting their minimum.
    #[must_use]
    pub fn from_raw(mut raw: Vec<f64>) -> Self {
        if let Some(min) = raw.iter().copied().min_by(f64::total_cmp) {
            raw.iter_mut().for_each(|d| *d -= min);
        }
        Self(raw)
    }

    /// Gets the maximum delay, i.e., the duration of the transmit sequence.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.0.iter().copied().max_by(f64::total_cmp).unwrap_or(0.)
    }

    /// Consumes `self` and returns the inner vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    /// Returns the indices of the elements in firing order.
    #[must_use]
    pub fn firing_order(&self) -> Vec<usize> {
        (0..self.0.len())
            .sorted_by(|&a, &b| self.0[a].total_cmp(&self.0[b]))
            .collect()
    }
}

impl From<Vec<f64>> for TxDelays {
    fn from(raw: Vec<f64>) -> Self {
        Self::from_raw(raw)
    }
}

impl From<TxDelays> for Vec<f64> {
    fn from(delays: TxDelays) -> Self {
        delays.0
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[test]
    fn from_raw() {
        let d = TxDelays::from_raw(vec![-3., 1., -1., 2.]);
        assert_eq!(&[0., 4., 2., 5.], d.as_slice());
        assert_eq!(5., d.span());
        assert_eq!(vec![0, 2, 1, 3], d.firing_order());
    }

    #[test]
    fn from_raw_random() {
        let mut rng = rand::rng();
        let raw = (0..256)
            .map(|_| rng.random_range(-1e-5..1e-5))
            .collect::<Vec<f64>>();
        let d = TxDelays::from_raw(raw);
        assert_eq!(0., d.iter().copied().fold(f64::INFINITY, f64::min));
        assert!(d.iter().all(|&v| v >= 0.));
    }

    #[test]
    fn empty() {
        let d = TxDelays::from_raw(vec![]);
        assert!(d.is_empty());
        assert_eq!(0., d.span());
    }

    #[rstest::rstest]
    #[case(vec![0., 1e-6], "[5e-6, 6e-6]")]
    #[case(vec![0., 4.], "[-1.0, 3.0]")]
    #[case(vec![0., 2e-6, 1e-6], "[0.0, 2e-6, 1e-6]")]
    #[case(vec![], "[]")]
    fn deserialize_normalizes(#[case] expect: Vec<f64>, #[case] json: &str) -> anyhow::Result<()> {
        let d: TxDelays = serde_json::from_str(json)?;
        approx::assert_abs_diff_eq!(expect.as_slice(), d.as_slice(), epsilon = 1e-18);
        Ok(())
    }

    #[test]
    fn serialize() -> anyhow::Result<()> {
        let d = TxDelays::from_raw(vec![1., 3.]);
        assert_eq!("[0.0,2.0]", serde_json::to_string(&d)?);
        assert_eq!(d, serde_json::from_str(&serde_json::to_string(&d)?)?);
        Ok(())
    }

    #[test]
    fn into_iter() {
        let d = TxDelays::from_raw(vec![1., 2.]);
        assert_eq!(vec![0., 1.], (&d).into_iter().copied().collect::<Vec<_>>());
        assert_eq!(vec![0., 1.], d.into_iter().collect::<Vec<_>>());
    }
}
