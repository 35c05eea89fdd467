//! Interactive documentation routes.
//!
//! The Swagger UI itself is mounted by the server; this module owns its
//! location and the root redirect that points browsers at it.

use actix_web::{HttpResponse, http::header};

/// Mount point of the Swagger UI.
pub const SWAGGER_UI_PATH: &str = "/swagger/";

/// Route serving the generated OpenAPI document.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Send browsers hitting `/` to the Swagger UI.
pub async fn redirect_to_swagger() -> HttpResponse {
    HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, SWAGGER_UI_PATH))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};

    #[actix_web::test]
    async fn root_redirects_to_swagger_ui() {
        let app =
            test::init_service(App::new().route("/", web::get().to(redirect_to_swagger))).await;
        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            res.headers()
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok()),
            Some(SWAGGER_UI_PATH)
        );
    }
}
