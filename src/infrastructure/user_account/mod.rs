//! User account infrastructure module
//!
//! Repository implementations (in-memory and PostgreSQL) and the service
//! that applies the account rules on top of them.

mod in_memory;
mod postgres_repository;
mod service;

pub use in_memory::InMemoryUserAccountRepository;
pub use postgres_repository::PostgresUserAccountRepository;
pub use service::{CreateUserAccountRequest, UpdateUserAccountRequest, UserAccountService};
