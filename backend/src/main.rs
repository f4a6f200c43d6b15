//! Service entry-point: loads configuration and the user collection, then
//! serves the REST API, health probes, and OpenAPI docs.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, build_registry, create_server};
use user_registry::config::AppSettings;
use user_registry::inbound::http::health::HealthState;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load configuration: {e}")))?;
    let config = ServerConfig::from_settings(&settings);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(server::metrics::default_metrics());

    info!(
        data_file = %config.data_file().display(),
        bind_addr = %config.bind_addr(),
        "starting user registry"
    );
    let registry = build_registry(&config).await?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config, registry)?;
    server.await
}
