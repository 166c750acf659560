//! In-memory user account repository implementation

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user_account::{UserAccount, UserAccountRepository};
use crate::domain::DomainError;

/// In-memory implementation of UserAccountRepository
///
/// Records are kept in insertion order so listing matches the order in which
/// accounts were created.
#[derive(Debug, Default)]
pub struct InMemoryUserAccountRepository {
    accounts: Arc<RwLock<Vec<UserAccount>>>,
}

impl InMemoryUserAccountRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository with initial accounts
    pub fn with_accounts(accounts: Vec<UserAccount>) -> Self {
        Self {
            accounts: Arc::new(RwLock::new(accounts)),
        }
    }
}

#[async_trait]
impl UserAccountRepository for InMemoryUserAccountRepository {
    async fn find_all(&self) -> Result<Vec<UserAccount>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.clone())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserAccount>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|a| a.username() == username).cloned())
    }

    async fn insert(&self, account: UserAccount) -> Result<UserAccount, DomainError> {
        let mut accounts = self.accounts.write().await;

        if accounts.iter().any(|a| a.id() == account.id()) {
            return Err(DomainError::conflict(format!(
                "User account with ID '{}' already exists",
                account.id()
            )));
        }

        if accounts.iter().any(|a| a.username() == account.username()) {
            return Err(DomainError::conflict(format!(
                "Username '{}' already exists",
                account.username()
            )));
        }

        accounts.push(account.clone());

        Ok(account)
    }

    async fn save(&self, account: UserAccount) -> Result<UserAccount, DomainError> {
        let mut accounts = self.accounts.write().await;

        if accounts
            .iter()
            .any(|a| a.username() == account.username() && a.id() != account.id())
        {
            return Err(DomainError::conflict(format!(
                "Username '{}' already exists",
                account.username()
            )));
        }

        match accounts.iter_mut().find(|a| a.id() == account.id()) {
            Some(existing) => *existing = account.clone(),
            None => accounts.push(account.clone()),
        }

        Ok(account)
    }

    async fn delete_by_username(&self, username: &str) -> Result<(), DomainError> {
        let mut accounts = self.accounts.write().await;
        accounts.retain(|a| a.username() != username);
        Ok(())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
