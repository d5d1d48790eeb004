#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Transmit delays for matrix ultrasound arrays.
//!
//! The delays of a [`Beam`](beam::Beam) are computed for the elements of a [`TxParam`](core::param::TxParam).
//!
//! ```
//! use txdelay::prelude::*;
//!
//! # fn main() -> Result<(), DelayError> {
//! let elements = ElementGeometry::matrix(32, 32, 0.3 * mm)?;
//! let param = TxParam::new(elements).with_element_size(0.25 * mm, 0.25 * mm);
//!
//! let focused = tx_delay(&param, &Focus::new(Point3::new(0., -2. * mm, 30. * mm)).into())?;
//! let plane = tx_delay(&param, &Plane::new(10. * deg, -5. * deg).into())?;
//! let diverging = tx_delay(&param, &Diverging::new(0. * deg, 0. * deg, PI / 2.).into())?;
//!
//! assert_eq!(1024, focused.len());
//! assert_eq!(1024, plane.len());
//! assert_eq!(1024, diverging.len());
//! # Ok(())
//! # }
//! ```

/// Beam patterns and their delay laws.
pub mod beam;
/// Positional-argument front-end.
pub mod dispatch;
mod ext;
/// Commonly used types.
pub mod prelude;

pub use ext::TxParamExt;
pub use txdelay_core as core;

use beam::{Beam, DelayLaw};
use txdelay_core::{delays::TxDelays, error::DelayError, param::TxParam};

/// Calculates the transmit delays of `beam`.
///
/// The returned delays are in \[s\] and the earliest element fires at `t = 0`.
///
/// # Errors
///
/// Returns a [`DelayError`] if `param` or `beam` is not valid.
#[tracing::instrument(level = "debug", skip(param))]
pub fn tx_delay(param: &TxParam, beam: &Beam) -> Result<TxDelays, DelayError> {
    tracing::debug!(
        "Calculating transmit delays for {} elements.",
        param.elements().num_elements()
    );
    beam.calc(param)
}

/// Calculates the transmit delays of `beam` and returns them with the updated `param`.
///
/// The returned [`TxParam`] holds the delays in [`TxParam::tx_delay`].
///
/// # Errors
///
/// See [`tx_delay`].
pub fn tx_delay_with_param(
    param: TxParam,
    beam: &Beam,
) -> Result<(TxDelays, TxParam), DelayError> {
    let delays = tx_delay(&param, beam)?;
    let param = param.with_tx_delay(delays.clone());
    Ok((delays, param))
}
