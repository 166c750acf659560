//! User account repository trait

use async_trait::async_trait;

use super::entity::UserAccount;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Repository for user account persistence
///
/// Accounts are keyed by id with a secondary lookup by username. The
/// repository performs no validation of its own; business rules live in the
/// service layer.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserAccountRepository: Send + Sync {
    /// List all accounts in storage order
    async fn find_all(&self) -> Result<Vec<UserAccount>, DomainError>;

    /// Find an account by its exact username
    async fn find_by_username(&self, username: &str) -> Result<Option<UserAccount>, DomainError>;

    /// Insert a new account, failing with `Conflict` when the id or the
    /// username is already stored. The check and the write are atomic.
    async fn insert(&self, account: UserAccount) -> Result<UserAccount, DomainError>;

    /// Insert or replace an account keyed by its id, failing with `Conflict`
    /// when another id already holds the username
    async fn save(&self, account: UserAccount) -> Result<UserAccount, DomainError>;

    /// Remove the account with this username, if any
    async fn delete_by_username(&self, username: &str) -> Result<(), DomainError>;

    /// Check that storage is reachable without reading any records
    async fn ping(&self) -> Result<(), DomainError>;
}
