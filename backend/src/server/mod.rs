//! Server construction and middleware wiring.

mod config;

pub use config::{ServerConfig, ServerSettings};

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use unit_converter::Trace;
use unit_converter::doc::ApiDoc;
use unit_converter::inbound::http::docs::{OPENAPI_JSON_PATH, redirect_to_swagger};
use unit_converter::inbound::http::error::not_found;
use unit_converter::inbound::http::health::{HealthState, live, ready};
use unit_converter::inbound::http::state::HttpState;

#[derive(Clone)]
pub(crate) struct AppDependencies {
    pub(crate) health_state: web::Data<HealthState>,
    pub(crate) http_state: web::Data<HttpState>,
    pub(crate) swagger_ui: bool,
}

pub(crate) fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
        swagger_ui,
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(unit_converter::inbound::http::configure)
        .service(ready)
        .service(live)
        .default_service(web::to(not_found));

    app.configure(|cfg| {
        if swagger_ui {
            cfg.route("/", web::get().to(redirect_to_swagger)).service(
                SwaggerUi::new("/swagger/{_:.*}").url(OPENAPI_JSON_PATH, ApiDoc::openapi()),
            );
        }
    })
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(HttpState::default());
    let ServerConfig {
        bind_addr,
        swagger_ui,
    } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
            swagger_ui,
        })
    })
    .bind(&bind_addr)?;

    for addr in server.addrs() {
        info!(%addr, swagger_ui, "listening");
    }

    let server = server.run();
    health_state.mark_ready();
    Ok(server)
}
