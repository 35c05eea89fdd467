//! Closed unit catalogues and the base-unit normalisation they share.
//!
//! Every dimension funnels conversions through a single base unit: the source
//! value is normalised into the base unit and then denormalised into the
//! target. That keeps the catalogue at one mapping per unit instead of one per
//! unit pair.
//!
//! Length and weight map onto their base unit with a [`Scale`]. Temperature
//! needs an offset as well as a factor, so it implements [`Unit`] directly.

mod length;
mod temperature;
mod weight;

pub use length::LengthUnit;
pub use temperature::TemperatureUnit;
pub use weight::WeightUnit;

use super::{ConversionError, Dimension};

/// Multiplicative step between a unit and its dimension's base unit.
///
/// The variant records which operation the reference tables use so that
/// normalising and denormalising reproduce the same floating-point results:
/// a unit normalised by division is denormalised by multiplication and the
/// other way round.
///
/// # Examples
/// ```
/// use unit_converter::domain::units::Scale;
///
/// let millimetre = Scale::Divide(1000.0);
/// assert_eq!(millimetre.normalise(2500.0), 2.5);
/// assert_eq!(millimetre.denormalise(2.5), 2500.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scale {
    /// `base = value * factor`.
    Multiply(f64),
    /// `base = value / divisor`.
    Divide(f64),
}

impl Scale {
    /// The base unit itself.
    pub const IDENTITY: Self = Self::Multiply(1.0);

    /// Express `value` in the base unit.
    #[must_use]
    pub fn normalise(self, value: f64) -> f64 {
        match self {
            Self::Multiply(factor) => value * factor,
            Self::Divide(divisor) => value / divisor,
        }
    }

    /// Express a base-unit quantity in this unit.
    #[must_use]
    pub fn denormalise(self, base: f64) -> f64 {
        match self {
            Self::Multiply(factor) => base / factor,
            Self::Divide(divisor) => base * divisor,
        }
    }
}

/// A unit belonging to exactly one [`Dimension`].
///
/// Implementors are closed enums; [`Unit::ALL`] lists the variants in their
/// declared order, which is also the order exposed by the unit listing
/// endpoint.
pub trait Unit: Copy + Eq + std::fmt::Debug + 'static {
    /// Dimension this unit measures.
    const DIMENSION: Dimension;

    /// Every unit of the dimension, in declared order.
    const ALL: &'static [Self];

    /// Canonical name, e.g. `"Kilometer"`.
    fn name(self) -> &'static str;

    /// Convert a value in this unit into the dimension's base unit.
    fn to_base(self, value: f64) -> f64;

    /// Convert a base-unit value into this unit.
    fn from_base(self, base: f64) -> f64;

    /// Resolve a unit by name, ignoring ASCII case.
    ///
    /// Matching is exact after case folding: abbreviations (`"m"`), numeric
    /// codes (`"0"`) and padded names (`" meter"`) are all rejected.
    ///
    /// # Errors
    /// Returns [`ConversionError::UnknownUnit`] when no unit of this dimension
    /// carries the given name.
    ///
    /// # Examples
    /// ```
    /// use unit_converter::domain::units::{LengthUnit, Unit};
    ///
    /// assert_eq!(LengthUnit::resolve("kilometer"), Ok(LengthUnit::Kilometer));
    /// assert!(LengthUnit::resolve("km").is_err());
    /// ```
    fn resolve(name: &str) -> Result<Self, ConversionError> {
        Self::ALL
            .iter()
            .copied()
            .find(|unit| unit.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ConversionError::unknown_unit(Self::DIMENSION, name))
    }

    /// Canonical names of every unit, in declared order.
    fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|unit| unit.name()).collect()
    }

    /// Convert `value` from `self` into `target` through the base unit.
    #[must_use]
    fn convert_to(self, value: f64, target: Self) -> f64 {
        target.from_base(self.to_base(value))
    }
}

/// Resolve both unit names within `U`'s dimension and convert `value`.
///
/// # Errors
/// Returns [`ConversionError::UnknownUnit`] naming the first unit that does
/// not belong to the dimension.
pub fn convert_named<U: Unit>(value: f64, from: &str, to: &str) -> Result<f64, ConversionError> {
    let source = U::resolve(from)?;
    let target = U::resolve(to)?;
    Ok(source.convert_to(value, target))
}
