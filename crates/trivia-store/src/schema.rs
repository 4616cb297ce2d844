//! Database schema migrations.

use sqlx::PgPool;
use sqlx::migrate::{MigrateError, Migrator};

/// Migrations for the `quizzes` and `tips` tables, embedded at build time.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Brings the database schema up to date.
///
/// # Errors
///
/// Returns `MigrateError` if a migration fails to apply.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    tracing::info!("database schema is up to date");
    Ok(())
}

/// Maps a driver error onto the domain's infrastructure error.
pub(crate) fn infrastructure(err: sqlx::Error) -> trivia_core::error::DomainError {
    tracing::warn!(error = %err, "database operation failed");
    trivia_core::error::DomainError::Infrastructure(format!("database error: {err}"))
}

/// Converts an unsigned paging value to the `BIGINT` Postgres expects.
pub(crate) fn to_bigint(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
