use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::db::{db_url, DbProfile};
use crate::error::AppError;

/// Connect to the database for the given profile.
/// This function does NOT run any migrations.
pub async fn connect_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let database_url = db_url(profile)?;

    let mut opts = ConnectOptions::new(database_url);
    if profile == DbProfile::Test {
        // In-memory SQLite lives and dies with its connection; a pool of
        // one keeps every query on the same database.
        opts.max_connections(1).min_connections(1);
    }

    let conn = Database::connect(opts).await?;
    Ok(conn)
}

/// Single entrypoint used by main and tests: connect, then bring the
/// schema up to date.
pub async fn bootstrap_db(profile: DbProfile) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(profile).await?;

    info!("running pending migrations");
    migration::migrate(&conn, migration::MigrationCommand::Up)
        .await
        .map_err(AppError::from)?;

    Ok(conn)
}
