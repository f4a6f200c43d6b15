//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
pub(crate) mod metrics;
mod state_builders;

pub use config::ServerConfig;
pub(crate) use state_builders::build_registry;

#[cfg(feature = "metrics")]
use metrics::MetricsLayer;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use user_registry::Trace;
#[cfg(debug_assertions)]
use user_registry::doc::ApiDoc;
use user_registry::domain::UserRegistry;
use user_registry::inbound::http::api_scope;
use user_registry::inbound::http::health::{HealthState, live, ready};
use user_registry::inbound::http::state::HttpState;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
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
    } = deps;

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api_scope())
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server serving `registry`.
///
/// # Parameters
/// - `health_state`: shared readiness state, marked ready once the listener
///   is bound.
/// - `config`: binding and optional metrics settings.
/// - `registry`: the loaded user collection shared by every worker.
///
/// # Returns
/// A [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
    registry: Arc<UserRegistry>,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(HttpState::from_registry(registry));

    #[cfg(feature = "metrics")]
    let metrics_layer = MetricsLayer::from_option(config.prometheus);

    let server = HttpServer::new(move || {
        let app = build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        });

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics_layer.clone());

        app
    })
    .bind(config.bind_addr)?;

    for addr in server.addrs() {
        info!(%addr, "listening");
    }
    let server = server.run();

    health_state.mark_ready();
    Ok(server)
}
