//! The conversion engine: request type, error taxonomy and the entry point.
//!
//! Conversions are pure. A request either produces a finite result or fails
//! with a typed [`ConversionError`]; nothing is retained between calls.

use thiserror::Error;

use super::Dimension;

/// Reasons a conversion can be refused.
///
/// Every variant is local to one request. Adapters surface them as client
/// errors; none of them indicates a server fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The unit name does not belong to the requested dimension.
    #[error("Invalid {dimension} unit specified: '{unit}'")]
    UnknownUnit {
        /// Dimension the unit was resolved against.
        dimension: Dimension,
        /// Unit name exactly as supplied.
        unit: String,
    },
    /// The dimension name is not one of the supported measurement categories.
    #[error("Unsupported conversion type: '{domain}'")]
    UnknownDomain {
        /// Dimension name exactly as supplied.
        domain: String,
    },
    /// The input, or the value it converts to, is not a finite number.
    #[error("Invalid value: {reason}")]
    InvalidValue {
        /// Human-readable explanation.
        reason: String,
    },
}

impl ConversionError {
    /// Build an [`ConversionError::UnknownUnit`].
    pub fn unknown_unit(dimension: Dimension, unit: impl Into<String>) -> Self {
        Self::UnknownUnit {
            dimension,
            unit: unit.into(),
        }
    }

    /// Build an [`ConversionError::UnknownDomain`].
    pub fn unknown_domain(domain: impl Into<String>) -> Self {
        Self::UnknownDomain {
            domain: domain.into(),
        }
    }

    /// Build an [`ConversionError::InvalidValue`].
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }
}

/// A single conversion to perform.
///
/// Unit names are kept as supplied so adapters can echo them back verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    /// Dimension both units must belong to.
    pub dimension: Dimension,
    /// Quantity expressed in `from_unit`.
    pub value: f64,
    /// Source unit name, matched case-insensitively.
    pub from_unit: String,
    /// Target unit name, matched case-insensitively.
    pub to_unit: String,
}

impl ConversionRequest {
    /// Assemble a request.
    pub fn new(
        dimension: Dimension,
        value: f64,
        from_unit: impl Into<String>,
        to_unit: impl Into<String>,
    ) -> Self {
        Self {
            dimension,
            value,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
        }
    }
}

/// Convert the request's value from its source unit to its target unit.
///
/// # Errors
/// - [`ConversionError::InvalidValue`] when the input is NaN or infinite, or
///   when the conversion overflows.
/// - [`ConversionError::UnknownUnit`] when either unit name is not part of the
///   request's dimension.
///
/// # Examples
/// ```
/// use unit_converter::domain::{ConversionRequest, Dimension, convert};
///
/// let request = ConversionRequest::new(Dimension::Length, 1.0, "Kilometer", "Meter");
/// assert_eq!(convert(&request), Ok(1000.0));
/// ```
pub fn convert(request: &ConversionRequest) -> Result<f64, ConversionError> {
    if !request.value.is_finite() {
        return Err(ConversionError::invalid_value(format!(
            "{} is not a finite number",
            request.value
        )));
    }

    let result = request
        .dimension
        .convert(request.value, &request.from_unit, &request.to_unit)?;

    if result.is_finite() {
        Ok(result)
    } else {
        Err(ConversionError::invalid_value(format!(
            "converting {} {} to {} exceeds the representable range",
            request.value, request.from_unit, request.to_unit
        )))
    }
}
