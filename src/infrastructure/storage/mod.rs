//! Storage infrastructure - backend selection, pooling and migrations

mod backend;
pub mod migrations;
mod pool;

pub use backend::StorageType;
pub use migrations::{
    revert_last_migration, run_migrations, schema_migrations, Migration, PostgresMigrator,
};
pub use pool::{connect_pool, PostgresConfig};
