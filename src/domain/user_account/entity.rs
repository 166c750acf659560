//! User account entity and identifier

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{
    validate_budget, validate_monthly_salary, validate_username, UserAccountValidationError,
};

/// Opaque user account identifier, generated once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserAccountId(Uuid);

impl UserAccountId {
    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl std::fmt::Display for UserAccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user account holding a budget and a monthly salary
///
/// Construction always goes through [`UserAccount::new`], so a value of this
/// type never carries an out-of-range username or a negative amount.
#[derive(Debug, Clone, PartialEq)]
pub struct UserAccount {
    id: UserAccountId,
    username: String,
    budget: f64,
    monthly_salary: f64,
}

impl UserAccount {
    /// Create a user account after validating its fields
    pub fn new(
        id: UserAccountId,
        username: impl Into<String>,
        budget: f64,
        monthly_salary: f64,
    ) -> Result<Self, UserAccountValidationError> {
        let username = username.into();

        validate_username(&username)?;
        validate_budget(budget)?;
        validate_monthly_salary(monthly_salary)?;

        Ok(Self {
            id,
            username,
            budget,
            monthly_salary,
        })
    }

    /// Replacement record with new amounts; id and username are kept
    pub fn with_amounts(
        &self,
        budget: f64,
        monthly_salary: f64,
    ) -> Result<Self, UserAccountValidationError> {
        validate_budget(budget)?;
        validate_monthly_salary(monthly_salary)?;

        Ok(Self {
            id: self.id,
            username: self.username.clone(),
            budget,
            monthly_salary,
        })
    }

    // Getters

    pub fn id(&self) -> &UserAccountId {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }

    pub fn monthly_salary(&self) -> f64 {
        self.monthly_salary
    }
}
