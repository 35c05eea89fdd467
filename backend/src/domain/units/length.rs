//! Length units, normalised to metres.

use super::{Scale, Unit};
use crate::domain::Dimension;

/// Supported length units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    /// Millimetre (mm).
    Millimeter,
    /// Centimetre (cm).
    Centimeter,
    /// Metre (m), the base unit.
    Meter,
    /// Kilometre (km).
    Kilometer,
    /// International inch (in).
    Inch,
    /// International foot (ft).
    Foot,
    /// International yard (yd).
    Yard,
    /// Statute mile (mi).
    Mile,
}

impl LengthUnit {
    /// Step between this unit and metres.
    #[must_use]
    pub const fn scale(self) -> Scale {
        match self {
            Self::Millimeter => Scale::Divide(1000.0),
            Self::Centimeter => Scale::Divide(100.0),
            Self::Meter => Scale::IDENTITY,
            Self::Kilometer => Scale::Multiply(1000.0),
            Self::Inch => Scale::Multiply(0.0254),
            Self::Foot => Scale::Multiply(0.3048),
            Self::Yard => Scale::Multiply(0.9144),
            Self::Mile => Scale::Multiply(1609.344),
        }
    }
}

impl Unit for LengthUnit {
    const DIMENSION: Dimension = Dimension::Length;

    const ALL: &'static [Self] = &[
        Self::Millimeter,
        Self::Centimeter,
        Self::Meter,
        Self::Kilometer,
        Self::Inch,
        Self::Foot,
        Self::Yard,
        Self::Mile,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::Millimeter => "Millimeter",
            Self::Centimeter => "Centimeter",
            Self::Meter => "Meter",
            Self::Kilometer => "Kilometer",
            Self::Inch => "Inch",
            Self::Foot => "Foot",
            Self::Yard => "Yard",
            Self::Mile => "Mile",
        }
    }

    fn to_base(self, value: f64) -> f64 {
        self.scale().normalise(value)
    }

    fn from_base(self, base: f64) -> f64 {
        self.scale().denormalise(base)
    }
}
