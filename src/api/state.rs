//! Application state for shared services

use std::sync::Arc;

use crate::domain::user_account::UserAccountRepository;
use crate::domain::{DomainError, UserAccount};
use crate::infrastructure::user_account::{
    CreateUserAccountRequest, UpdateUserAccountRequest, UserAccountService,
};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_account_service: Arc<dyn UserAccountServiceTrait>,
}

/// Trait for user account service operations
#[async_trait::async_trait]
pub trait UserAccountServiceTrait: Send + Sync {
    async fn ping(&self) -> Result<(), DomainError>;
    async fn list(&self) -> Result<Vec<UserAccount>, DomainError>;
    async fn get_by_username(&self, username: &str) -> Result<UserAccount, DomainError>;
    async fn create(&self, request: CreateUserAccountRequest) -> Result<UserAccount, DomainError>;
    async fn update(
        &self,
        username: &str,
        request: UpdateUserAccountRequest,
    ) -> Result<UserAccount, DomainError>;
    async fn delete(&self, username: &str) -> Result<(), DomainError>;
}

#[async_trait::async_trait]
impl<R: UserAccountRepository + 'static> UserAccountServiceTrait for UserAccountService<R> {
    async fn ping(&self) -> Result<(), DomainError> {
        UserAccountService::ping(self).await
    }

    async fn list(&self) -> Result<Vec<UserAccount>, DomainError> {
        UserAccountService::list(self).await
    }

    async fn get_by_username(&self, username: &str) -> Result<UserAccount, DomainError> {
        UserAccountService::get_by_username(self, username).await
    }

    async fn create(&self, request: CreateUserAccountRequest) -> Result<UserAccount, DomainError> {
        UserAccountService::create(self, request).await
    }

    async fn update(
        &self,
        username: &str,
        request: UpdateUserAccountRequest,
    ) -> Result<UserAccount, DomainError> {
        UserAccountService::update(self, username, request).await
    }

    async fn delete(&self, username: &str) -> Result<(), DomainError> {
        UserAccountService::delete(self, username).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(user_account_service: Arc<dyn UserAccountServiceTrait>) -> Self {
        Self {
            user_account_service,
        }
    }

    /// State backed by the given repository
    pub fn with_repository<R: UserAccountRepository + 'static>(repository: Arc<R>) -> Self {
        Self::new(Arc::new(UserAccountService::new(repository)))
    }
}
