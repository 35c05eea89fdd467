//! Weight units, normalised to grams.
//!
//! The imperial factors are the rounded gram values clients already depend
//! on (an ounce is 28.3495 g rather than 28.349523125 g); keep them as-is so
//! results stay stable across releases.

use super::{Scale, Unit};
use crate::domain::Dimension;

/// Supported weight units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightUnit {
    /// Milligram (mg).
    Milligram,
    /// Gram (g), the base unit.
    Gram,
    /// Kilogram (kg).
    Kilogram,
    /// Metric tonne (t).
    MetricTon,
    /// Avoirdupois ounce (oz).
    Ounce,
    /// Avoirdupois pound (lb).
    Pound,
    /// Stone (st).
    Stone,
    /// US short ton.
    USTon,
}

impl WeightUnit {
    /// Step between this unit and grams.
    #[must_use]
    pub const fn scale(self) -> Scale {
        match self {
            Self::Milligram => Scale::Divide(1000.0),
            Self::Gram => Scale::IDENTITY,
            Self::Kilogram => Scale::Multiply(1000.0),
            Self::MetricTon => Scale::Multiply(1_000_000.0),
            Self::Ounce => Scale::Multiply(28.3495),
            Self::Pound => Scale::Multiply(453.592),
            Self::Stone => Scale::Multiply(6350.29),
            Self::USTon => Scale::Multiply(907_185.0),
        }
    }
}

impl Unit for WeightUnit {
    const DIMENSION: Dimension = Dimension::Weight;

    const ALL: &'static [Self] = &[
        Self::Milligram,
        Self::Gram,
        Self::Kilogram,
        Self::MetricTon,
        Self::Ounce,
        Self::Pound,
        Self::Stone,
        Self::USTon,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Milligram => "Milligram",
            Self::Gram => "Gram",
            Self::Kilogram => "Kilogram",
            Self::MetricTon => "MetricTon",
            Self::Ounce => "Ounce",
            Self::Pound => "Pound",
            Self::Stone => "Stone",
            Self::USTon => "USTon",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        self.scale().normalise(value)
    }

    fn from_base(self, base: f64) -> f64 {
        self.scale().denormalise(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(WeightUnit::Milligram, 0.001)]
    #[case(WeightUnit::Gram, 1.0)]
    #[case(WeightUnit::Kilogram, 1000.0)]
    #[case(WeightUnit::MetricTon, 1_000_000.0)]
    #[case(WeightUnit::Ounce, 28.3495)]
    #[case(WeightUnit::Pound, 453.592)]
    #[case(WeightUnit::Stone, 6350.29)]
    #[case(WeightUnit::USTon, 907_185.0)]
    fn one_unit_in_grams(#[case] unit: WeightUnit, #[case] grams: f64) {
        assert_eq!(unit.to_base(1.0), grams);
    }

    #[rstest]
    fn kilogram_to_pound_uses_rounded_factor() {
        let pounds = WeightUnit::Kilogram.convert_to(1.0, WeightUnit::Pound);
        assert_eq!(pounds, 1000.0 / 453.592);
    }

    #[rstest]
    #[case("metricton", WeightUnit::MetricTon)]
    #[case("uston", WeightUnit::USTon)]
    #[case("USTON", WeightUnit::USTon)]
    fn compound_names_resolve_without_separators(#[case] name: &str, #[case] unit: WeightUnit) {
        assert_eq!(WeightUnit::resolve(name), Ok(unit));
    }

    #[rstest]
    #[case("Metric Ton")]
    #[case("US_Ton")]
    #[case("Ton")]
    fn separated_or_partial_names_are_rejected(#[case] name: &str) {
        assert!(WeightUnit::resolve(name).is_err());
    }
}
