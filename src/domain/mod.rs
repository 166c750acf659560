//! Domain layer - Core business rules and entities

pub mod error;
pub mod user_account;

pub use error::DomainError;
pub use user_account::{UserAccount, UserAccountId, UserAccountRepository};
