use anyhow::Context;
use question_service_migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::ServerConfig;

pub async fn init_pool_and_migrate(config: &ServerConfig) -> anyhow::Result<DatabaseConnection> {
    connect_and_migrate(config.database_url()?, config.max_connections).await
}

pub async fn connect_and_migrate(
    database_url: &str,
    max_connections: u32,
) -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url.to_string());
    options.max_connections(max_connections).sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .context("failed to connect to database")?;
    info!(max_connections, "database connected");

    Migrator::up(&db, None)
        .await
        .context("failed to run database migrations")?;
    info!("database migrations applied");

    Ok(db)
}
