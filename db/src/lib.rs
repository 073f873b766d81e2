pub mod models;
pub mod preload;
pub mod repositories;
pub mod repository;
pub mod test_utils;

pub use repository::{Gateway, SoftDeletable};

use migration::Migrator;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

/// Opens the connection pool.
///
/// Connection strings are normalized by `util::config::database_dsn`: URLs pass
/// through, and a bare path becomes a SQLite file created on first use.
pub async fn connect(path_or_url: &str) -> Result<DatabaseConnection, DbErr> {
    let url = util::config::database_dsn(path_or_url)
        .map_err(|e| DbErr::Custom(format!("Failed to prepare database path: {e}")))?;

    let mut options = ConnectOptions::new(url);
    options.sqlx_logging(false);
    Database::connect(options).await
}

/// Applies every pending migration.
pub async fn sync_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let pending = Migrator::get_pending_migrations(db).await?;
    if !pending.is_empty() {
        info!(count = pending.len(), "Applying pending migrations");
    }
    Migrator::up(db, None).await
}
