//! Temperature units, normalised to degrees Celsius.
//!
//! Temperature scales differ by an offset as well as a factor, so the
//! multiplicative [`Scale`](super::Scale) does not apply here. The affine
//! steps keep the reference evaluation order (multiply before dividing) so
//! round values such as 212 °F convert to exactly 100 °C.

use super::Unit;
use crate::domain::Dimension;

const FREEZING_POINT_F: f64 = 32.0;
const ABSOLUTE_ZERO_OFFSET_K: f64 = 273.15;

/// Supported temperature units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    /// Degrees Celsius, the base unit.
    Celsius,
    /// Degrees Fahrenheit.
    Fahrenheit,
    /// Kelvin.
    Kelvin,
}

impl Unit for TemperatureUnit {
    const DIMENSION: Dimension = Dimension::Temperature;

    const ALL: &'static [Self] = &[Self::Celsius, Self::Fahrenheit, Self::Kelvin];

    fn name(self) -> &'static str {
        match self {
            Self::Celsius => "Celsius",
            Self::Fahrenheit => "Fahrenheit",
            Self::Kelvin => "Kelvin",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => (value - FREEZING_POINT_F) * 5.0 / 9.0,
            Self::Kelvin => value - ABSOLUTE_ZERO_OFFSET_K,
        }
    }

    fn from_base(self, celsius: f64) -> f64 {
        match self {
            Self::Celsius => celsius,
            Self::Fahrenheit => (celsius * 9.0 / 5.0) + FREEZING_POINT_F,
            Self::Kelvin => celsius + ABSOLUTE_ZERO_OFFSET_K,
        }
    }
}
