//! Domain ports and supporting types for the hexagonal boundary.

mod conversion_service;

#[cfg(test)]
pub use conversion_service::MockConversionService;
pub use conversion_service::{ConversionService, UnitConversionService};
