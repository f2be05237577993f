//! Embedded schema migrations applied at startup.
//!
//! `diesel_migrations` drives a synchronous `PgConnection`, so callers on an
//! async runtime should run these functions on a blocking thread.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// Migrations compiled from the `backend/migrations` directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while applying schema migrations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    /// The migration connection could not be opened.
    #[error("failed to connect for migrations: {message}")]
    Connection {
        /// Driver message.
        message: String,
    },
    /// A migration failed to apply or revert.
    #[error("failed to run migrations: {message}")]
    Apply {
        /// Harness message.
        message: String,
    },
}

/// Apply every pending migration.
///
/// When `reset` is set, all applied migrations are reverted first so the
/// schema is rebuilt from scratch. Existing rows are lost.
///
/// # Errors
///
/// Returns [`MigrationError`] when the connection cannot be established or a
/// migration fails.
pub fn run_migrations(database_url: &str, reset: bool) -> Result<(), MigrationError> {
    let mut conn =
        PgConnection::establish(database_url).map_err(|err| MigrationError::Connection {
            message: err.to_string(),
        })?;

    if reset {
        let reverted = conn
            .revert_all_migrations(MIGRATIONS)
            .map_err(|err| MigrationError::Apply {
                message: err.to_string(),
            })?;
        info!(count = reverted.len(), "reverted schema migrations");
    }

    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply {
            message: err.to_string(),
        })?;
    info!(count = applied.len(), "applied schema migrations");
    Ok(())
}

#[cfg(test)]
mod tests {
    //! Checks on the embedded migration set.

    use diesel::migration::MigrationSource;
    use diesel::pg::Pg;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn tasks_migration_is_embedded() {
        let migrations =
            MigrationSource::<Pg>::migrations(&MIGRATIONS).expect("embedded migrations load");
        let names: Vec<String> = migrations
            .iter()
            .map(|migration| migration.name().to_string())
            .collect();

        assert!(
            names.iter().any(|name| name.contains("create_tasks")),
            "expected a create_tasks migration, found {names:?}"
        );
    }

    #[rstest]
    fn unreachable_database_reports_connection_error() {
        let result = run_migrations("postgres://invalid host/tasks", false);
        assert!(matches!(result, Err(MigrationError::Connection { .. })));
    }
}
