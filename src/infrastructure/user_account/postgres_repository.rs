//! PostgreSQL user account repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::user_account::{UserAccount, UserAccountId, UserAccountRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of UserAccountRepository
///
/// Username uniqueness is enforced by the `UNIQUE` constraint on
/// `user_account.username`, so concurrent inserts of the same username can
/// never both succeed.
#[derive(Debug, Clone)]
pub struct PostgresUserAccountRepository {
    pool: PgPool,
}

impl PostgresUserAccountRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserAccountRepository for PostgresUserAccountRepository {
    async fn find_all(&self) -> Result<Vec<UserAccount>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, username, budget, monthly_salary
            FROM user_account
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list user accounts: {}", e)))?;

        let mut accounts = Vec::with_capacity(rows.len());

        for row in rows {
            accounts.push(row_to_account(&row)?);
        }

        Ok(accounts)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserAccount>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, budget, monthly_salary
            FROM user_account
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::storage(format!("Failed to get user account by username: {}", e))
        })?;

        match row {
            Some(row) => Ok(Some(row_to_account(&row)?)),
            None => Ok(None),
        }
    }

    async fn insert(&self, account: UserAccount) -> Result<UserAccount, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO user_account (id, username, budget, monthly_salary)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(account.id().as_uuid())
        .bind(account.username())
        .bind(account.budget())
        .bind(account.monthly_salary())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::conflict(format!(
                    "Username '{}' already exists",
                    account.username()
                ))
            } else {
                DomainError::storage(format!("Failed to create user account: {}", e))
            }
        })?;

        Ok(account)
    }

    async fn save(&self, account: UserAccount) -> Result<UserAccount, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO user_account (id, username, budget, monthly_salary)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET username = EXCLUDED.username,
                budget = EXCLUDED.budget,
                monthly_salary = EXCLUDED.monthly_salary
            "#,
        )
        .bind(account.id().as_uuid())
        .bind(account.username())
        .bind(account.budget())
        .bind(account.monthly_salary())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::conflict(format!(
                    "Username '{}' already exists",
                    account.username()
                ))
            } else {
                DomainError::storage(format!("Failed to save user account: {}", e))
            }
        })?;

        Ok(account)
    }

    async fn delete_by_username(&self, username: &str) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM user_account WHERE username = $1")
            .bind(username)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete user account: {}", e)))?;

        Ok(())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Database is unreachable: {}", e)))?;

        Ok(())
    }
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .is_some_and(|db_error| db_error.is_unique_violation())
}

fn row_to_account(row: &sqlx::postgres::PgRow) -> Result<UserAccount, DomainError> {
    let id: Uuid = row
        .try_get("id")
        .map_err(|e| DomainError::storage(format!("Failed to read id column: {}", e)))?;
    let username: String = row
        .try_get("username")
        .map_err(|e| DomainError::storage(format!("Failed to read username column: {}", e)))?;
    let budget: f64 = row
        .try_get("budget")
        .map_err(|e| DomainError::storage(format!("Failed to read budget column: {}", e)))?;
    let monthly_salary: f64 = row.try_get("monthly_salary").map_err(|e| {
        DomainError::storage(format!("Failed to read monthly_salary column: {}", e))
    })?;

    account_from_columns(id, username, budget, monthly_salary)
}

fn account_from_columns(
    id: Uuid,
    username: String,
    budget: f64,
    monthly_salary: f64,
) -> Result<UserAccount, DomainError> {
    UserAccount::new(UserAccountId::from_uuid(id), username, budget, monthly_salary).map_err(
        |e| DomainError::storage(format!("Invalid user account '{}' in database: {}", id, e)),
    )
}
