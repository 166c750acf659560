//! User account domain
//!
//! Entity, validation rules and the persistence contract for user accounts.

mod entity;
mod repository;
mod validation;

pub use entity::{UserAccount, UserAccountId};
pub use repository::UserAccountRepository;
pub use validation::{
    validate_budget, validate_monthly_salary, validate_username, UserAccountValidationError,
    MAX_USERNAME_LENGTH, MIN_USERNAME_LENGTH,
};

#[cfg(test)]
pub use repository::MockUserAccountRepository;
