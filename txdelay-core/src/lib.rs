#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Core types for transmit delay computation with matrix ultrasound arrays.

/// Utilities for acoustics.
pub mod acoustics;
/// Common constants and types.
pub mod common;
/// Transmit delay vector.
pub mod delays;
/// Errors.
pub mod error;
/// Geometry of the array elements.
pub mod geometry;
/// Propagation medium.
pub mod medium;
/// Bounded scalar minimization.
pub mod optimize;
/// Array and medium parameters.
pub mod param;

/// Commonly used types.
pub mod prelude {
    pub use crate::{
        acoustics::{solid_angle, Spherical},
        common::{deg, mm, rad, Angle, DEFAULT_SOUND_SPEED, PI},
        delays::TxDelays,
        error::DelayError,
        geometry::{Aperture, Element, ElementGeometry, ElementSize, Point3, Vector3},
        medium::Medium,
        param::TxParam,
    };
}
