//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without the real tables.

use std::sync::Arc;

use crate::domain::ports::{ConversionService, UnitConversionService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Conversion use-cases.
    pub conversions: Arc<dyn ConversionService>,
}

impl HttpState {
    /// Construct state from an explicit port implementation.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use unit_converter::domain::ports::UnitConversionService;
    /// use unit_converter::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(UnitConversionService));
    /// let _ = state.conversions.clone();
    /// ```
    pub fn new(conversions: Arc<dyn ConversionService>) -> Self {
        Self { conversions }
    }
}

impl Default for HttpState {
    fn default() -> Self {
        Self::new(Arc::new(UnitConversionService))
    }
}
