//! Measurement dimensions and the dispatcher that routes conversions to them.

use std::fmt;
use std::str::FromStr;

use super::ConversionError;
use super::units::{LengthUnit, TemperatureUnit, Unit, WeightUnit, convert_named};

/// An independent measurement category with its own closed unit set.
///
/// Parsing is case-insensitive so `length`, `Length` and `LENGTH` all name
/// [`Dimension::Length`].
///
/// # Examples
/// ```
/// use unit_converter::domain::Dimension;
///
/// let dimension: Dimension = "Temperature".parse().expect("known dimension");
/// assert_eq!(dimension, Dimension::Temperature);
/// assert_eq!(dimension.slug(), "temperature");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Distances, normalised to metres.
    Length,
    /// Masses, normalised to grams.
    Weight,
    /// Temperatures, normalised to degrees Celsius.
    Temperature,
}

impl Dimension {
    /// Every supported dimension, in the order they are advertised.
    pub const ALL: [Self; 3] = [Self::Length, Self::Weight, Self::Temperature];

    /// Display name, e.g. `"Length"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Length => "Length",
            Self::Weight => "Weight",
            Self::Temperature => "Temperature",
        }
    }

    /// Lower-case path segment, e.g. `"length"`.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Weight => "weight",
            Self::Temperature => "temperature",
        }
    }

    /// Canonical unit names of this dimension, in declared order.
    #[must_use]
    pub fn unit_names(self) -> Vec<&'static str> {
        match self {
            Self::Length => LengthUnit::names(),
            Self::Weight => WeightUnit::names(),
            Self::Temperature => TemperatureUnit::names(),
        }
    }

    /// Convert `value` between two unit names of this dimension.
    ///
    /// # Errors
    /// Returns [`ConversionError::UnknownUnit`] when either name does not
    /// belong to this dimension.
    pub fn convert(self, value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
        match self {
            Self::Length => convert_named::<LengthUnit>(value, from, to),
            Self::Weight => convert_named::<WeightUnit>(value, from, to),
            Self::Temperature => convert_named::<TemperatureUnit>(value, from, to),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Dimension {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|dimension| dimension.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConversionError::unknown_domain(s))
    }
}
