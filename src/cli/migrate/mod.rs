//! Migrate command - applies or reverts the PostgreSQL schema

use clap::Args;
use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::logging::init_logging;
use crate::infrastructure::storage::{
    connect_pool, revert_last_migration, run_migrations, PostgresConfig, PostgresMigrator,
    StorageType,
};

#[derive(Args, Debug, Clone, Default)]
pub struct MigrateArgs {
    /// Revert the most recently applied migration instead
    #[arg(long)]
    pub revert: bool,
}

pub async fn run(args: MigrateArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_logging(&config.logging);

    let pg_config = postgres_config(&config)?;
    let pool = connect_pool(&pg_config).await?;

    if args.revert {
        match revert_last_migration(&pool).await? {
            Some(version) => info!(version, "Reverted migration"),
            None => info!("No migrations to revert"),
        }
    } else {
        let applied = run_migrations(&pool).await?;
        info!(applied, "Migrations applied");
    }

    let version = PostgresMigrator::new(pool).current_version().await?;
    info!(version = ?version, "Current schema version");

    Ok(())
}

fn postgres_config(config: &AppConfig) -> anyhow::Result<PostgresConfig> {
    if StorageType::from_str(&config.storage.backend) != Some(StorageType::Postgres) {
        anyhow::bail!(
            "migrate requires storage.backend = \"postgres\", got \"{}\"",
            config.storage.backend
        );
    }

    PostgresConfig::from_storage_config(&config.storage)
        .ok_or_else(|| anyhow::anyhow!("storage.database_url or DATABASE_URL is required"))
}
