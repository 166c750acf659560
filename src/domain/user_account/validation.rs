//! User account validation utilities

use thiserror::Error;

/// Errors that can occur during user account validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserAccountValidationError {
    #[error("Username should contain at least {0} characters.")]
    UsernameTooShort(usize),

    #[error("Username can't be longer than {0} characters.")]
    UsernameTooLong(usize),

    #[error("Budget can't be negative.")]
    NegativeBudget,

    #[error("Monthly salary can't be negative.")]
    NegativeMonthlySalary,
}

pub const MIN_USERNAME_LENGTH: usize = 4;
pub const MAX_USERNAME_LENGTH: usize = 20;

/// Validate a username
///
/// Rules:
/// - Minimum 4 characters
/// - Maximum 20 characters
///
/// Length is counted in characters, not bytes.
pub fn validate_username(username: &str) -> Result<(), UserAccountValidationError> {
    let length = username.chars().count();

    if length < MIN_USERNAME_LENGTH {
        return Err(UserAccountValidationError::UsernameTooShort(
            MIN_USERNAME_LENGTH,
        ));
    }

    if length > MAX_USERNAME_LENGTH {
        return Err(UserAccountValidationError::UsernameTooLong(
            MAX_USERNAME_LENGTH,
        ));
    }

    Ok(())
}

pub fn validate_budget(budget: f64) -> Result<(), UserAccountValidationError> {
    if budget < 0.0 || budget.is_nan() {
        return Err(UserAccountValidationError::NegativeBudget);
    }

    Ok(())
}

pub fn validate_monthly_salary(monthly_salary: f64) -> Result<(), UserAccountValidationError> {
    if monthly_salary < 0.0 || monthly_salary.is_nan() {
        return Err(UserAccountValidationError::NegativeMonthlySalary);
    }

    Ok(())
}
