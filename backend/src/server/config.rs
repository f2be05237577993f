//! Server settings loaded via OrthoConfig and the runtime server configuration.

use std::net::SocketAddr;
use std::time::Duration;

use backend::outbound::persistence::{DbPool, PoolConfig};
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: ([u8; 4], u16) = ([0, 0, 0, 0], 8080);

/// Settings read from CLI flags, `TASKS_*` environment variables, and
/// configuration files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TASKS")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<SocketAddr>,
    /// PostgreSQL connection string. Tasks are kept in memory when absent.
    pub database_url: Option<String>,
    /// Upper bound on pooled connections.
    pub db_max_connections: Option<u32>,
    /// Idle connections kept warm by the pool.
    pub db_min_idle: Option<u32>,
    /// Seconds to wait when checking out a connection.
    pub db_connect_timeout_secs: Option<u64>,
    /// Revert and re-apply migrations at startup. Drops all stored tasks.
    #[ortho_config(default = false)]
    pub reset_schema: bool,
}

impl ServerSettings {
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
            .unwrap_or_else(|| SocketAddr::from(DEFAULT_BIND_ADDR))
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Pool configuration derived from the settings, if a database is set.
    pub fn pool_config(&self) -> Option<PoolConfig> {
        let url = self.database_url()?;
        let mut config = PoolConfig::new(url);
        if let Some(max) = self.db_max_connections {
            config = config.with_max_size(max);
        }
        if let Some(min) = self.db_min_idle {
            config = config.with_min_idle(Some(min));
        }
        if let Some(secs) = self.db_connect_timeout_secs {
            config = config.with_connection_timeout(Duration::from_secs(secs));
        }
        Some(config)
    }
}

/// Configuration consumed by [`super::create_server`].
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
        }
    }

    /// Attach a database pool; tasks are then persisted in PostgreSQL.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
