//! Builders for the task store and HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};

use backend::domain::TaskServiceImpl;
use backend::domain::ports::TaskService;
use backend::inbound::http::state::HttpState;
use backend::outbound::in_memory::InMemoryTaskRepository;
use backend::outbound::persistence::{
    DbPool, DieselTaskRepository, MigrationError, PoolError, run_migrations,
};

use super::ServerSettings;

/// Failures while preparing the task store.
#[derive(Debug, thiserror::Error)]
pub enum StoreSetupError {
    #[error(transparent)]
    Migration(#[from] MigrationError),
    #[error(transparent)]
    Pool(#[from] PoolError),
    #[error("migration task panicked: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Apply migrations and open a pool when a database is configured.
///
/// Returns `Ok(None)` when no database URL is set.
pub async fn build_db_pool(settings: &ServerSettings) -> Result<Option<DbPool>, StoreSetupError> {
    let Some(config) = settings.pool_config() else {
        warn!("no database configured; tasks are kept in memory and lost on restart");
        return Ok(None);
    };

    let url = config.database_url().to_owned();
    let reset = settings.reset_schema;
    tokio::task::spawn_blocking(move || run_migrations(&url, reset)).await??;

    let pool = DbPool::new(config).await?;
    info!("database pool ready");
    Ok(Some(pool))
}

/// Build the HTTP state over PostgreSQL when a pool exists, else in memory.
pub fn build_http_state(db_pool: Option<&DbPool>) -> web::Data<HttpState> {
    let tasks: Arc<dyn TaskService> = match db_pool {
        Some(pool) => Arc::new(TaskServiceImpl::new(Arc::new(DieselTaskRepository::new(
            pool.clone(),
        )))),
        None => Arc::new(TaskServiceImpl::new(Arc::new(InMemoryTaskRepository::new()))),
    };
    web::Data::new(HttpState::new(tasks))
}
