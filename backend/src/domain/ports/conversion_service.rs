//! Driving port for unit conversion use-cases.
//!
//! Inbound adapters call this port instead of the engine functions so HTTP
//! handler tests can substitute a double and assert on the exact request the
//! handler built.

use crate::domain::{ConversionError, ConversionRequest, Dimension, convert};

/// Domain use-case port for converting values and listing units.
#[cfg_attr(test, mockall::automock)]
pub trait ConversionService: Send + Sync {
    /// Convert the request's value, returning the value in the target unit.
    fn convert(&self, request: &ConversionRequest) -> Result<f64, ConversionError>;

    /// Canonical unit names of `dimension`, in declared order.
    fn available_units(&self, dimension: Dimension) -> Vec<&'static str>;
}

/// Production implementation backed by the in-process conversion tables.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnitConversionService;

impl ConversionService for UnitConversionService {
    fn convert(&self, request: &ConversionRequest) -> Result<f64, ConversionError> {
        convert(request)
    }

    fn available_units(&self, dimension: Dimension) -> Vec<&'static str> {
        dimension.unit_names()
    }
}
