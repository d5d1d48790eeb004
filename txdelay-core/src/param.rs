use getset::Getters;
use serde::{Deserialize, Serialize};

use crate::{
    common::DEFAULT_SOUND_SPEED,
    delays::TxDelays,
    error::DelayError,
    geometry::{Aperture, ElementGeometry, ElementSize},
    medium::Medium,
};

/// Parameters of a matrix array and the medium.
///
/// The serialized form uses the field names `elements` (a two-row matrix of the x- and y-coordinates in \[m\]),
/// `width` and `height` (element size in \[m\]), `c` (longitudinal velocity in \[m/s\], 1540 by default),
/// and `tx_delay` (the last computed transmit delays in \[s\], if any).
#[derive(Clone, Debug, PartialEq, Getters, Serialize, Deserialize)]
#[serde(try_from = "TxParamRepr", into = "TxParamRepr")]
pub struct TxParam {
    #[getset(get = "pub")]
    /// The element positions.
    elements: ElementGeometry,
    width: Option<f64>,
    height: Option<f64>,
    #[getset(get = "pub")]
    /// The medium.
    medium: Medium,
    tx_delay: Option<TxDelays>,
}

impl TxParam {
    /// Creates a new [`TxParam`] with the default medium.
    #[must_use]
    pub fn new(elements: ElementGeometry) -> Self {
        Self {
            elements,
            width: None,
            height: None,
            medium: Medium::default(),
            tx_delay: None,
        }
    }

    /// Sets the element width and height.
    #[must_use]
    pub fn with_element_size(self, width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..self
        }
    }

    /// Sets the medium.
    #[must_use]
    pub fn with_medium(self, medium: Medium) -> Self {
        Self { medium, ..self }
    }

    /// Sets the longitudinal velocity in \[m/s\].
    #[must_use]
    pub fn with_sound_speed(self, sound_speed: f64) -> Self {
        self.with_medium(Medium::with_sound_speed(sound_speed))
    }

    /// Sets the transmit delays.
    #[must_use]
    pub fn with_tx_delay(self, tx_delay: TxDelays) -> Self {
        Self {
            tx_delay: Some(tx_delay),
            ..self
        }
    }

    /// Gets the longitudinal velocity in \[m/s\].
    #[must_use]
    pub const fn sound_speed(&self) -> f64 {
        self.medium.sound_speed
    }

    /// Gets the last computed transmit delays.
    #[must_use]
    pub const fn tx_delay(&self) -> Option<&TxDelays> {
        self.tx_delay.as_ref()
    }

    /// Gets the element width and height.
    ///
    /// # Errors
    ///
    /// Returns [`DelayError::MissingElementSize`] if either is not set or is not a non-negative finite value.
    pub fn element_size(&self) -> Result<ElementSize, DelayError> {
        match (self.width, self.height) {
            (Some(width), Some(height))
                if width.is_finite() && height.is_finite() && width >= 0. && height >= 0. =>
            {
                Ok(ElementSize { width, height })
            }
            _ => Err(DelayError::MissingElementSize),
        }
    }

    /// Gets the aperture of the array.
    ///
    /// # Errors
    ///
    /// See [`TxParam::element_size`].
    pub fn aperture(&self) -> Result<Aperture, DelayError> {
        Ok(self.elements.aperture(self.element_size()?))
    }
}

#[derive(Serialize, Deserialize)]
struct TxParamRepr {
    elements: Vec<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    height: Option<f64>,
    #[serde(default = "default_sound_speed")]
    c: f64,
    #[serde(default, alias = "TXdelay", skip_serializing_if = "Option::is_none")]
    tx_delay: Option<TxDelays>,
}

fn default_sound_speed() -> f64 {
    DEFAULT_SOUND_SPEED
}

impl TryFrom<TxParamRepr> for TxParam {
    type Error = DelayError;

    fn try_from(repr: TxParamRepr) -> Result<Self, Self::Error> {
        Ok(Self {
            elements: ElementGeometry::from_rows(&repr.elements)?,
            width: repr.width,
            height: repr.height,
            medium: Medium::with_sound_speed(repr.c),
            tx_delay: repr.tx_delay,
        })
    }
}

impl From<TxParam> for TxParamRepr {
    fn from(param: TxParam) -> Self {
        Self {
            elements: param.elements.rows().into(),
            width: param.width,
            height: param.height,
            c: param.medium.sound_speed,
            tx_delay: param.tx_delay,
        }
    }
}
