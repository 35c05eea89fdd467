//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the conversion and health endpoints plus the schema
//! wrappers for domain types ([`ErrorSchema`], [`ErrorCodeSchema`]) so the
//! domain never depends on utoipa.
//!
//! The document backs the Swagger UI and is exported by
//! `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::conversions::{
    ConversionEndpoint, ConversionErrorKind, ConversionFailure, ConversionResponse,
    ConvertRequestBody, DiscoveryResponse, UnitEntry, UnitsResponse, UsageHints,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::openapi::schema::{OneOfBuilder, Ref, Schema};
use utoipa::openapi::{ContentBuilder, RefOr, ResponseBuilder};
use utoipa::{Modify, OpenApi, ToSchema};

/// Document both bodies `POST /convert/{domain}` can answer 400 with.
///
/// Engine refusals return [`ConversionResponse`]; bodies the JSON extractor
/// cannot read return the error envelope.
struct ConvertRejectionAddon;

impl Modify for ConvertRejectionAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let Some(operation) = openapi
            .paths
            .paths
            .get_mut("/convert/{domain}")
            .and_then(|item| item.post.as_mut())
        else {
            return;
        };

        let either = OneOfBuilder::new()
            .item(Ref::from_schema_name(ConversionResponse::name()))
            .item(Ref::from_schema_name(ErrorSchema::name()))
            .build();
        let response = ResponseBuilder::new()
            .description(
                "Conversion refused (`success: false`), or request body unreadable \
                 (error envelope with `code: invalid_request`)",
            )
            .content(
                "application/json",
                ContentBuilder::new()
                    .schema(Some(Schema::OneOf(either)))
                    .build(),
            )
            .build();
        operation
            .responses
            .responses
            .insert("400".to_owned(), RefOr::T(response));
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&ConvertRejectionAddon),
    info(
        title = "Unit converter API",
        description = "Convert values between length, weight and temperature units."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::conversions::discover,
        crate::inbound::http::conversions::list_units,
        crate::inbound::http::conversions::convert,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ConvertRequestBody,
        ConversionResponse,
        ConversionErrorKind,
        ConversionFailure,
        UnitEntry,
        UnitsResponse,
        ConversionEndpoint,
        UsageHints,
        DiscoveryResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "conversions", description = "Unit conversion operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the registered paths and schema shapes.

    use super::*;
    use rstest::rstest;

    // Note: utoipa replaces :: with . in schema names
    const ERROR_SCHEMA_NAME: &str = "crate.domain.Error";

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/convert")]
    #[case("/convert/{domain}")]
    #[case("/convert/{domain}/units")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn documents_every_route(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    fn error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get(ERROR_SCHEMA_NAME).expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
    }

    #[rstest]
    fn conversion_response_uses_camel_case() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let response = schemas
            .get("ConversionResponse")
            .expect("ConversionResponse schema");

        for field in ["value", "fromUnit", "toUnit", "result", "success", "errorKind"] {
            assert_object_schema_has_field(response, field);
        }
    }

    #[rstest]
    fn convert_operation_documents_both_outcomes() {
        let doc = ApiDoc::openapi();
        let item = doc.paths.paths.get("/convert/{domain}").expect("convert path");
        let operation = item.post.as_ref().expect("POST operation");
        assert!(operation.responses.responses.contains_key("200"));
        assert!(operation.responses.responses.contains_key("400"));
        assert!(!operation.responses.responses.contains_key("500"));
    }

    #[rstest]
    fn convert_bad_request_offers_both_bodies() {
        let doc = serde_json::to_value(ApiDoc::openapi()).expect("document serialises");
        let one_of = doc
            .pointer("/paths/~1convert~1{domain}/post/responses/400/content/application~1json/schema/oneOf")
            .and_then(serde_json::Value::as_array)
            .expect("400 body is a oneOf");
        let refs: Vec<&str> = one_of
            .iter()
            .filter_map(|item| item.get("$ref").and_then(serde_json::Value::as_str))
            .collect();

        let envelope = format!("#/components/schemas/{ERROR_SCHEMA_NAME}");
        assert_eq!(
            refs,
            vec!["#/components/schemas/ConversionResponse", envelope.as_str()]
        );
    }
}
