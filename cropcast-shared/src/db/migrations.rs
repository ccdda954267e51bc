/// Database migration runner
///
/// Migrations are embedded at compile time from this crate's `migrations/`
/// directory and applied with sqlx's migrator. The server runs them on
/// startup; re-running is a no-op for already-applied versions.
///
/// # Example
///
/// ```no_run
/// use cropcast_shared::db::{migrations::run_migrations, pool::{create_pool, DatabaseConfig}};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
/// run_migrations(&pool).await?;
/// # Ok(())
/// # }
/// ```

use sqlx::postgres::PgPool;
use tracing::{info, warn};

/// Runs all pending database migrations.
///
/// # Errors
///
/// Returns an error if a migration fails to execute or the connection is
/// lost mid-run. Failed migrations are rolled back where the statements
/// allow it.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Starting database migrations");

    let migrations = sqlx::migrate!("./migrations");

    match migrations.run(pool).await {
        Ok(()) => {
            info!("All database migrations completed successfully");
            Ok(())
        }
        Err(e) => {
            warn!("Migration failed: {}", e);
            Err(e)
        }
    }
}
