//! HTTP inbound adapter exposing the conversion REST endpoints.

pub mod conversions;
pub mod docs;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;

use actix_web::web;

pub use error::ApiResult;

/// Register the conversion routes and the JSON extractor policy.
///
/// Callers still provide [`state::HttpState`] as app data.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use unit_converter::inbound::http::{configure, state::HttpState};
///
/// let _app = App::new()
///     .app_data(web::Data::new(HttpState::default()))
///     .configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(conversions::discover)
        .service(conversions::list_units)
        .service(conversions::convert);
}
