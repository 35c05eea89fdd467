//! Conversion endpoints.
//!
//! ```text
//! GET  /convert
//! GET  /convert/{domain}/units
//! POST /convert/{domain}
//! ```
//!
//! One pipeline serves every dimension: resolve the path segment to a
//! [`Dimension`], call the [`ConversionService`](crate::domain::ports::ConversionService)
//! port and shape the outcome. Engine rejections are answered with a
//! `success: false` body rather than the generic error envelope so clients can
//! render them inline. Both bodies carry the request's `traceId`.

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use utoipa::ToSchema;

use crate::domain::{ConversionError, ConversionRequest, Dimension, TraceId};
use crate::inbound::http::state::HttpState;

/// Request body for `POST /convert/{domain}`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequestBody {
    /// Quantity expressed in `fromUnit`.
    #[schema(example = 1.0)]
    pub value: f64,
    /// Source unit name, case-insensitive.
    #[schema(example = "Kilometer")]
    pub from_unit: String,
    /// Target unit name, case-insensitive.
    #[schema(example = "Meter")]
    pub to_unit: String,
}

/// Machine-readable reason a conversion was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ConversionErrorKind {
    /// A unit name is not part of the requested dimension.
    UnknownUnit,
    /// The dimension in the path is not supported.
    UnknownDomain,
    /// The value, or its converted form, is not a finite number.
    InvalidValue,
}

impl From<&ConversionError> for ConversionErrorKind {
    fn from(error: &ConversionError) -> Self {
        match error {
            ConversionError::UnknownUnit { .. } => Self::UnknownUnit,
            ConversionError::UnknownDomain { .. } => Self::UnknownDomain,
            ConversionError::InvalidValue { .. } => Self::InvalidValue,
        }
    }
}

/// Outcome of a conversion, echoing the caller's input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResponse {
    /// Value as supplied.
    #[schema(example = 1.0)]
    pub value: f64,
    /// Source unit as supplied.
    #[schema(example = "Kilometer")]
    pub from_unit: String,
    /// Target unit as supplied.
    #[schema(example = "Meter")]
    pub to_unit: String,
    /// Converted value; absent when the conversion failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 1000.0)]
    pub result: Option<f64>,
    /// Whether the conversion succeeded.
    pub success: bool,
    /// Failure category; absent on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ConversionErrorKind>,
    /// Human-readable failure description; absent on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Invalid length unit specified: 'Kilogram'")]
    pub error_message: Option<String>,
    /// Identifier echoed in the `trace-id` header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub trace_id: Option<String>,
}

fn current_trace_id() -> Option<String> {
    TraceId::current().map(|id| id.to_string())
}

impl ConversionResponse {
    fn succeeded(body: ConvertRequestBody, result: f64) -> Self {
        Self {
            value: body.value,
            from_unit: body.from_unit,
            to_unit: body.to_unit,
            result: Some(result),
            success: true,
            error_kind: None,
            error_message: None,
            trace_id: current_trace_id(),
        }
    }

    fn failed(body: ConvertRequestBody, error: &ConversionError) -> Self {
        Self {
            value: body.value,
            from_unit: body.from_unit,
            to_unit: body.to_unit,
            result: None,
            success: false,
            error_kind: Some(error.into()),
            error_message: Some(error.to_string()),
            trace_id: current_trace_id(),
        }
    }
}

/// Rejection body for requests that carry no conversion input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConversionFailure {
    /// Always `false`.
    pub success: bool,
    /// Failure category.
    pub error_kind: ConversionErrorKind,
    /// Human-readable failure description.
    #[schema(example = "Unsupported conversion type: 'volume'")]
    pub error_message: String,
    /// Identifier echoed in the `trace-id` header.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub trace_id: Option<String>,
}

impl From<&ConversionError> for ConversionFailure {
    fn from(error: &ConversionError) -> Self {
        Self {
            success: false,
            error_kind: error.into(),
            error_message: error.to_string(),
            trace_id: current_trace_id(),
        }
    }
}

/// One selectable unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnitEntry {
    /// Canonical unit name.
    #[schema(example = "Kilometer")]
    pub name: String,
    /// Value to send back as `fromUnit` or `toUnit`.
    #[schema(example = "Kilometer")]
    pub value: String,
}

/// Units of one dimension, in declared order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnitsResponse {
    /// Canonical dimension name.
    #[schema(example = "Length")]
    pub unit_type: String,
    /// Units accepted by `POST /convert/{domain}`.
    pub available_units: Vec<UnitEntry>,
}

/// Entry of the discovery document describing one dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConversionEndpoint {
    /// Canonical dimension name.
    #[serde(rename = "type")]
    #[schema(example = "Length")]
    pub kind: String,
    /// Conversion endpoint.
    #[schema(example = "/convert/length")]
    pub endpoint: String,
    /// Unit listing endpoint.
    #[schema(example = "/convert/length/units")]
    pub units_endpoint: String,
}

/// Usage hints included in the discovery document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UsageHints {
    /// How to list units.
    pub get_units: String,
    /// How to request a conversion.
    pub convert: String,
}

/// Discovery document served at `GET /convert`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveryResponse {
    /// Supported dimensions and their endpoints.
    pub available_conversions: Vec<ConversionEndpoint>,
    /// Usage hints.
    pub usage: UsageHints,
}

impl DiscoveryResponse {
    fn build() -> Self {
        let available_conversions = Dimension::ALL
            .into_iter()
            .map(|dimension| ConversionEndpoint {
                kind: dimension.name().to_owned(),
                endpoint: format!("/convert/{}", dimension.slug()),
                units_endpoint: format!("/convert/{}/units", dimension.slug()),
            })
            .collect();
        Self {
            available_conversions,
            usage: UsageHints {
                get_units: "GET /convert/{type}/units".to_owned(),
                convert: "POST /convert/{type} with JSON body: { 'value': number, 'fromUnit': string, 'toUnit': string }"
                    .to_owned(),
            },
        }
    }
}

/// List the supported dimensions and how to call them.
#[utoipa::path(
    get,
    path = "/convert",
    description = "Return the supported conversion types with their endpoints and usage hints.",
    responses(
        (status = 200, description = "Discovery document", body = DiscoveryResponse),
    ),
    tags = ["conversions"],
    operation_id = "getAvailableConversions"
)]
#[get("/convert")]
pub async fn discover() -> HttpResponse {
    HttpResponse::Ok().json(DiscoveryResponse::build())
}

/// List the units of a dimension in declared order.
#[utoipa::path(
    get,
    path = "/convert/{domain}/units",
    description = "Return every unit of the dimension. The dimension is matched case-insensitively.",
    params(("domain" = String, Path, description = "Dimension: length, weight or temperature")),
    responses(
        (status = 200, description = "Units of the dimension", body = UnitsResponse),
        (status = 400, description = "Unsupported dimension", body = ConversionFailure),
    ),
    tags = ["conversions"],
    operation_id = "getAvailableUnits"
)]
#[get("/convert/{domain}/units")]
pub async fn list_units(state: web::Data<HttpState>, domain: web::Path<String>) -> HttpResponse {
    let dimension = match domain.parse::<Dimension>() {
        Ok(dimension) => dimension,
        Err(error) => {
            warn!(
                trace_id = current_trace_id().as_deref(),
                domain = %domain,
                %error,
                "unit listing rejected"
            );
            return HttpResponse::BadRequest().json(ConversionFailure::from(&error));
        }
    };

    let available_units = state
        .conversions
        .available_units(dimension)
        .into_iter()
        .map(|name| UnitEntry {
            name: name.to_owned(),
            value: name.to_owned(),
        })
        .collect();

    HttpResponse::Ok().json(UnitsResponse {
        unit_type: dimension.name().to_owned(),
        available_units,
    })
}

/// Convert a value between two units of a dimension.
#[utoipa::path(
    post,
    path = "/convert/{domain}",
    description = "Convert `value` from `fromUnit` to `toUnit`. Dimension and unit names are matched case-insensitively.",
    params(("domain" = String, Path, description = "Dimension: length, weight or temperature")),
    request_body = ConvertRequestBody,
    responses(
        (status = 200, description = "Conversion result", body = ConversionResponse),
        (
            status = 400,
            description = "Conversion refused, or request body unreadable",
            body = ConversionResponse
        ),
    ),
    tags = ["conversions"],
    operation_id = "convert"
)]
#[post("/convert/{domain}")]
pub async fn convert(
    state: web::Data<HttpState>,
    domain: web::Path<String>,
    payload: web::Json<ConvertRequestBody>,
) -> HttpResponse {
    let body = payload.into_inner();
    let outcome = domain.parse::<Dimension>().and_then(|dimension| {
        let request =
            ConversionRequest::new(dimension, body.value, &body.from_unit, &body.to_unit);
        state.conversions.convert(&request)
    });

    match outcome {
        Ok(result) => {
            debug!(
                trace_id = current_trace_id().as_deref(),
                dimension = %domain,
                from_unit = %body.from_unit,
                to_unit = %body.to_unit,
                value = body.value,
                result,
                "converted value"
            );
            HttpResponse::Ok().json(ConversionResponse::succeeded(body, result))
        }
        Err(error) => {
            warn!(
                trace_id = current_trace_id().as_deref(),
                dimension = %domain,
                from_unit = %body.from_unit,
                to_unit = %body.to_unit,
                %error,
                "conversion rejected"
            );
            HttpResponse::BadRequest().json(ConversionResponse::failed(body, &error))
        }
    }
}
