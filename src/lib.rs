//! Expense Tracker API
//!
//! User account management over HTTP: each account carries a username, a
//! budget and a monthly salary, stored in memory or in PostgreSQL.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::storage::{connect_pool, run_migrations, PostgresConfig, StorageType};
use infrastructure::user_account::{
    InMemoryUserAccountRepository, PostgresUserAccountRepository,
};
use tracing::{info, warn};

/// Create the application state with default configuration (in-memory storage)
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let storage_backend = StorageType::from_str(&config.storage.backend).unwrap_or_else(|| {
        warn!(
            backend = %config.storage.backend,
            "Unknown storage backend, falling back to in-memory"
        );
        StorageType::InMemory
    });

    info!("Storage backend: {:?}", storage_backend);

    match storage_backend {
        StorageType::Postgres => {
            let pg_config = PostgresConfig::from_storage_config(&config.storage).ok_or_else(
                || anyhow::anyhow!("storage.database_url or DATABASE_URL is required for postgres"),
            )?;
            let pool = connect_pool(&pg_config).await?;

            if config.storage.run_migrations {
                let applied = run_migrations(&pool).await?;
                info!(applied, "Database migrations complete");
            }

            Ok(AppState::with_repository(Arc::new(
                PostgresUserAccountRepository::new(pool),
            )))
        }
        StorageType::InMemory => Ok(AppState::with_repository(Arc::new(
            InMemoryUserAccountRepository::new(),
        ))),
    }
}
