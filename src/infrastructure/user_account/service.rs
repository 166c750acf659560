//! User account service enforcing uniqueness and existence rules

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::user_account::{UserAccount, UserAccountId, UserAccountRepository};
use crate::domain::DomainError;

/// Request for creating a new user account
#[derive(Debug, Clone)]
pub struct CreateUserAccountRequest {
    pub username: String,
    pub budget: f64,
    pub monthly_salary: f64,
}

/// Request for updating a user account
///
/// The username is not part of the update: the account is addressed by the
/// username it already has, which never changes.
#[derive(Debug, Clone)]
pub struct UpdateUserAccountRequest {
    pub budget: f64,
    pub monthly_salary: f64,
}

/// User account service
#[derive(Debug)]
pub struct UserAccountService<R: UserAccountRepository> {
    repository: Arc<R>,
}

impl<R: UserAccountRepository> UserAccountService<R> {
    /// Create a new user account service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Check that the underlying storage is reachable
    pub async fn ping(&self) -> Result<(), DomainError> {
        self.repository.ping().await
    }

    /// List all user accounts
    pub async fn list(&self) -> Result<Vec<UserAccount>, DomainError> {
        self.repository.find_all().await
    }

    /// Get a user account by username
    pub async fn get_by_username(&self, username: &str) -> Result<UserAccount, DomainError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(format!(
                    "User '{}' couldn't be found in database.",
                    username
                ))
            })
    }

    /// Create a new user account with a freshly generated id
    pub async fn create(&self, request: CreateUserAccountRequest) -> Result<UserAccount, DomainError> {
        info!(username = %request.username, "Creating user account");

        let taken = || {
            DomainError::conflict(format!(
                "Addition failed. Username '{}' is already taken.",
                request.username
            ))
        };

        if self
            .repository
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(taken());
        }

        let account = UserAccount::new(
            UserAccountId::generate(),
            &request.username,
            request.budget,
            request.monthly_salary,
        )
        .map_err(|e| DomainError::validation(e.to_string()))?;

        // A concurrent create may have claimed the username since the check
        let account = self.repository.insert(account).await.map_err(|e| match e {
            DomainError::Conflict { .. } => taken(),
            other => other,
        })?;

        debug!(id = %account.id(), username = %account.username(), "User account created");

        Ok(account)
    }

    /// Replace the budget and monthly salary of an existing user account
    pub async fn update(
        &self,
        username: &str,
        request: UpdateUserAccountRequest,
    ) -> Result<UserAccount, DomainError> {
        info!(username = %username, "Updating user account");

        let existing = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| {
                DomainError::not_found(format!(
                    "Update failed. User '{}' couldn't be found in database.",
                    username
                ))
            })?;

        let account = existing
            .with_amounts(request.budget, request.monthly_salary)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        self.repository.save(account).await
    }

    /// Delete a user account by username
    pub async fn delete(&self, username: &str) -> Result<(), DomainError> {
        info!(username = %username, "Deleting user account");

        if self.repository.find_by_username(username).await?.is_none() {
            return Err(DomainError::not_found(format!(
                "Deletion failed. User '{}' couldn't be found in database.",
                username
            )));
        }

        self.repository.delete_by_username(username).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user_account::MockUserAccountRepository;
    use crate::infrastructure::user_account::in_memory::InMemoryUserAccountRepository;
    use std::collections::HashSet;

    fn create_service() -> UserAccountService<InMemoryUserAccountRepository> {
        UserAccountService::new(Arc::new(InMemoryUserAccountRepository::new()))
    }

    fn make_request(username: &str, budget: f64, monthly_salary: f64) -> CreateUserAccountRequest {
        CreateUserAccountRequest {
            username: username.to_string(),
            budget,
            monthly_salary,
        }
    }

    #[tokio::test]
    async fn test_create_user_account() {
        let service = create_service();

        let account = service
            .create(make_request("user1", 500.0, 1000.0))
            .await
            .unwrap();

        assert_eq!(account.username(), "user1");
        assert_eq!(account.budget(), 500.0);
        assert_eq!(account.monthly_salary(), 1000.0);
    }

    #[tokio::test]
    async fn test_list_contains_created_accounts_with_distinct_ids() {
        let service = create_service();

        for username in ["user1", "user2", "user3"] {
            service
                .create(make_request(username, 100.0, 200.0))
                .await
                .unwrap();
        }

        let all = service.list().await.unwrap();
        assert_eq!(all.len(), 3);

        let usernames: Vec<&str> = all.iter().map(|a| a.username()).collect();
        assert_eq!(usernames, vec!["user1", "user2", "user3"]);

        let ids: HashSet<UserAccountId> = all.iter().map(|a| *a.id()).collect();
        assert_eq!(ids.len(), 3);
    }

    #[tokio::test]
    async fn test_create_duplicate_username() {
        let service = create_service();

        service
            .create(make_request("user1", 500.0, 1000.0))
            .await
            .unwrap();

        let err = service
            .create(make_request("user1", 600.0, 1200.0))
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Conflict { .. }));
        assert_eq!(
            err.message(),
            "Addition failed. Username 'user1' is already taken."
        );
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_conflict_from_insert_is_reported_as_taken() {
        let mut repository = MockUserAccountRepository::new();

        repository.expect_find_by_username().returning(|_| Ok(None));
        repository
            .expect_insert()
            .returning(|_| Err(DomainError::conflict("Username 'user1' already exists")));

        let service = UserAccountService::new(Arc::new(repository));
        let err = service
            .create(make_request("user1", 500.0, 1000.0))
            .await
            .unwrap_err();

        assert_eq!(
            err.message(),
            "Addition failed. Username 'user1' is already taken."
        );
    }

    #[tokio::test]
    async fn test_create_invalid_fields() {
        let service = create_service();

        let err = service
            .create(make_request("abc", 500.0, 1000.0))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));

        let err = service
            .create(make_request("user1", -1.0, 1000.0))
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Budget can't be negative.");

        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_by_username_round_trip() {
        let service = create_service();

        let created = service
            .create(make_request("user1", 500.0, 1000.0))
            .await
            .unwrap();

        let fetched = service.get_by_username("user1").await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_get_by_username_not_found() {
        let service = create_service();

        let err = service.get_by_username("ghost").await.unwrap_err();

        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(err.message(), "User 'ghost' couldn't be found in database.");
    }

    #[tokio::test]
    async fn test_update_preserves_identity() {
        let service = create_service();

        let created = service
            .create(make_request("user1", 500.0, 1000.0))
            .await
            .unwrap();

        let updated = service
            .update(
                "user1",
                UpdateUserAccountRequest {
                    budget: 1000.0,
                    monthly_salary: 2000.0,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id(), created.id());
        assert_eq!(updated.username(), "user1");
        assert_eq!(updated.budget(), 1000.0);
        assert_eq!(updated.monthly_salary(), 2000.0);

        let fetched = service.get_by_username("user1").await.unwrap();
        assert_eq!(fetched, updated);
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_not_found_leaves_store_unchanged() {
        let service = create_service();

        let created = service
            .create(make_request("user1", 500.0, 1000.0))
            .await
            .unwrap();

        let err = service
            .update(
                "user2",
                UpdateUserAccountRequest {
                    budget: 1.0,
                    monthly_salary: 2.0,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(
            err.message(),
            "Update failed. User 'user2' couldn't be found in database."
        );
        assert_eq!(service.list().await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn test_delete() {
        let service = create_service();

        service
            .create(make_request("user1", 500.0, 1000.0))
            .await
            .unwrap();

        service.delete("user1").await.unwrap();

        let err = service.get_by_username("user1").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_not_found() {
        let service = create_service();

        let err = service.delete("user1").await.unwrap_err();

        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(
            err.message(),
            "Deletion failed. User 'user1' couldn't be found in database."
        );
    }

    #[tokio::test]
    async fn test_storage_errors_propagate() {
        let mut repository = MockUserAccountRepository::new();

        repository
            .expect_find_all()
            .returning(|| Err(DomainError::storage("connection refused")));
        repository
            .expect_find_by_username()
            .returning(|_| Err(DomainError::storage("connection refused")));

        let service = UserAccountService::new(Arc::new(repository));

        assert!(matches!(
            service.list().await,
            Err(DomainError::Storage { .. })
        ));
        assert!(matches!(
            service.get_by_username("user1").await,
            Err(DomainError::Storage { .. })
        ));
        assert!(matches!(
            service.delete("user1").await,
            Err(DomainError::Storage { .. })
        ));
    }
}
