//! HTTP adapter mapping for domain errors.
//!
//! Keeps the domain error type HTTP-agnostic while letting Actix handlers,
//! the JSON extractor and the fallback service turn failures into the same
//! JSON envelope.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde_json::{Value, json};
use serde_json::error::Category;
use tracing::warn;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(self)
    }
}

/// Reason codes placed in `details.code` for unreadable request bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyErrorCode {
    MissingField,
    InvalidField,
    MalformedJson,
    UnsupportedContentType,
    UnreadableBody,
}

impl BodyErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidField => "invalid_field",
            Self::MalformedJson => "malformed_json",
            Self::UnsupportedContentType => "unsupported_content_type",
            Self::UnreadableBody => "unreadable_body",
        }
    }
}

/// Field named by serde's "missing field `name`" message.
fn missing_field(err: &serde_json::Error) -> Option<String> {
    let message = err.to_string();
    let rest = message.strip_prefix("missing field `")?;
    rest.split_once('`').map(|(field, _)| field.to_owned())
}

fn located(code: BodyErrorCode, err: &serde_json::Error) -> Value {
    json!({
        "code": code.as_str(),
        "line": err.line(),
        "column": err.column(),
    })
}

fn body_error(err: &JsonPayloadError) -> Error {
    match err {
        JsonPayloadError::Deserialize(inner) => match inner.classify() {
            Category::Data => match missing_field(inner) {
                Some(field) => Error::invalid_request(format!("missing required field: {field}"))
                    .with_details(json!({
                        "field": field,
                        "code": BodyErrorCode::MissingField.as_str(),
                    })),
                None => Error::invalid_request(format!("Invalid JSON body: {inner}"))
                    .with_details(located(BodyErrorCode::InvalidField, inner)),
            },
            Category::Syntax | Category::Eof => {
                Error::invalid_request(format!("Invalid JSON body: {inner}"))
                    .with_details(located(BodyErrorCode::MalformedJson, inner))
            }
            Category::Io => Error::invalid_request(format!("Invalid JSON body: {inner}"))
                .with_details(json!({ "code": BodyErrorCode::UnreadableBody.as_str() })),
        },
        JsonPayloadError::ContentType => Error::invalid_request("Expected a JSON request body")
            .with_details(json!({
                "code": BodyErrorCode::UnsupportedContentType.as_str(),
            })),
        other => Error::invalid_request(format!("Invalid JSON body: {other}"))
            .with_details(json!({ "code": BodyErrorCode::UnreadableBody.as_str() })),
    }
}

/// Turn JSON extractor failures into an `invalid_request` envelope.
///
/// `details.code` names the failure; missing fields are reported by name and
/// parse failures by line and column. Registered through
/// `web::JsonConfig::error_handler`.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let error = body_error(&err);
    warn!(
        path = %req.path(),
        error = %err,
        details = ?error.details(),
        "rejected unreadable JSON body"
    );
    error.into()
}

/// Fallback for unmatched routes.
pub async fn not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    Err(Error::not_found(format!(
        "No route for {} {}",
        req.method(),
        req.path()
    )))
}
