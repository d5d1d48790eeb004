use serde::{Deserialize, Serialize};

use crate::{common::DEFAULT_SOUND_SPEED, error::DelayError};

/// Propagation medium.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Medium {
    /// Longitudinal velocity in \[m/s\].
    pub sound_speed: f64,
}

impl Medium {
    /// Creates a new medium with the default sound speed (1540 m/s).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sound_speed: DEFAULT_SOUND_SPEED,
        }
    }

    /// Creates a new medium with the given sound speed in \[m/s\].
    #[must_use]
    pub const fn with_sound_speed(sound_speed: f64) -> Self {
        Self { sound_speed }
    }

    /// Checks that the sound speed is a positive finite value.
    ///
    /// # Errors
    ///
    /// Returns [`DelayError::InvalidSoundSpeed`] otherwise.
    pub fn validate(&self) -> Result<(), DelayError> {
        if self.sound_speed.is_finite() && self.sound_speed > 0. {
            Ok(())
        } else {
            Err(DelayError::InvalidSoundSpeed(self.sound_speed))
        }
    }

    /// Gets the time of flight over `distance` \[m\] in \[s\].
    #[must_use]
    pub fn time_of_flight(&self, distance: f64) -> f64 {
        distance / self.sound_speed
    }
}

impl Default for Medium {
    fn default() -> Self {
        Self::new()
    }
}
