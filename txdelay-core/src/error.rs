use thiserror::Error;

/// An error occurred during transmit delay calculation.
#[derive(Error, Debug, PartialEq, Clone)]
#[non_exhaustive]
pub enum DelayError {
    /// The arguments do not match any beam pattern.
    #[error("Wrong input arguments: {0}")]
    InvalidArguments(String),
    /// The element coordinates are absent or malformed.
    #[error("Element positions must be two rows (x and y) of equal, non-zero length: {0}")]
    MissingGeometry(String),
    /// The focus coordinates have inconsistent or unsupported lengths.
    #[error("X0, Y0, and Z0 must have the same length of 1 or 2 (got {x}, {y}, and {z})")]
    MismatchedTargetLength {
        /// The length of the x-coordinates.
        x: usize,
        /// The length of the y-coordinates.
        y: usize,
        /// The length of the z-coordinates.
        z: usize,
    },
    /// The tilt angles are not scalars satisfying `|tilt| < π/2`.
    #[error("The tilt angles must be scalars verifying |TILTx| and |TILTy| < pi/2: {0}")]
    InvalidTiltAngle(String),
    /// The solid angle is not a scalar in `[0, 2π]`.
    #[error("The solid angle must be a scalar in [0, 2pi] sr: {0}")]
    InvalidSolidAngle(String),
    /// The element positions do not form a plaid grid.
    #[error("The elements must be on a plaid grid with the diverging wave option")]
    NonPlaidGrid,
    /// The element width and height are required but not given.
    #[error("Element width and height are required for diverging waves")]
    MissingElementSize,
    /// The sound speed is not a positive finite number.
    #[error("Sound speed must be a positive finite value (got {0} m/s)")]
    InvalidSoundSpeed(f64),
    /// The search interval or tolerance of the minimizer is invalid.
    #[error("Invalid search bound: {0}")]
    InvalidSearchBound(String),
}
