//! Task service entry-point: loads settings, prepares the task store, and
//! serves the REST API.

mod server;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use server::{ServerConfig, ServerSettings, build_db_pool, create_server};

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().wrap_err("failed to load server settings")?;
    let mut config = ServerConfig::new(settings.bind_addr());
    if let Some(pool) = build_db_pool(&settings)
        .await
        .wrap_err("failed to prepare the task database")?
    {
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)
        .wrap_err_with(|| format!("failed to bind {}", settings.bind_addr()))?;
    info!(bind_addr = %settings.bind_addr(), "task service listening");

    let result = server.await;
    health_state.mark_unhealthy();
    result.wrap_err("server terminated with an error")
}
