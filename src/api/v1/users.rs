//! User account endpoint handlers

use std::borrow::Cow;

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::{Validate, ValidationError};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, ValidatedJson};
use crate::domain::user_account::validate_username;
use crate::domain::{UserAccount, UserAccountId};
use crate::infrastructure::user_account::{CreateUserAccountRequest, UpdateUserAccountRequest};

/// Body of `POST /v1/users`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserAccountApiRequest {
    #[validate(custom(function = "validate_username_field"))]
    pub username: String,
    #[validate(range(min = 0.0, message = "Budget can't be negative."))]
    pub budget: f64,
    #[validate(range(min = 0.0, message = "Monthly salary can't be negative."))]
    pub monthly_salary: f64,
}

/// Body of `PUT /v1/users/{username}`; the path names the account
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserAccountApiRequest {
    #[validate(range(min = 0.0, message = "Budget can't be negative."))]
    pub budget: f64,
    #[validate(range(min = 0.0, message = "Monthly salary can't be negative."))]
    pub monthly_salary: f64,
}

#[allow(clippy::ptr_arg)]
fn validate_username_field(username: &String) -> Result<(), ValidationError> {
    validate_username(username).map_err(|e| {
        ValidationError::new("username_length").with_message(Cow::Owned(e.to_string()))
    })
}

impl From<CreateUserAccountApiRequest> for CreateUserAccountRequest {
    fn from(request: CreateUserAccountApiRequest) -> Self {
        Self {
            username: request.username,
            budget: request.budget,
            monthly_salary: request.monthly_salary,
        }
    }
}

impl From<UpdateUserAccountApiRequest> for UpdateUserAccountRequest {
    fn from(request: UpdateUserAccountApiRequest) -> Self {
        Self {
            budget: request.budget,
            monthly_salary: request.monthly_salary,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserAccountResponse {
    pub id: UserAccountId,
    pub username: String,
    pub budget: f64,
    pub monthly_salary: f64,
}

impl From<&UserAccount> for UserAccountResponse {
    fn from(account: &UserAccount) -> Self {
        Self {
            id: *account.id(),
            username: account.username().to_string(),
            budget: account.budget(),
            monthly_salary: account.monthly_salary(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccountsCollectionResponse {
    pub user_accounts: Vec<UserAccountResponse>,
}

/// GET /v1/users
pub async fn list_user_accounts(
    State(state): State<AppState>,
) -> Result<Json<UserAccountsCollectionResponse>, ApiError> {
    debug!("Listing user accounts");

    let accounts = state.user_account_service.list().await?;

    Ok(Json(UserAccountsCollectionResponse {
        user_accounts: accounts.iter().map(UserAccountResponse::from).collect(),
    }))
}

/// GET /v1/users/{username}
pub async fn get_user_account(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserAccountResponse>, ApiError> {
    debug!(username = %username, "Getting user account");

    let account = state
        .user_account_service
        .get_by_username(&username)
        .await?;

    Ok(Json(UserAccountResponse::from(&account)))
}

/// POST /v1/users
pub async fn create_user_account(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateUserAccountApiRequest>,
) -> Result<(StatusCode, Json<UserAccountResponse>), ApiError> {
    debug!(username = %request.username, "Creating user account");

    let account = state.user_account_service.create(request.into()).await?;

    Ok((StatusCode::CREATED, Json(UserAccountResponse::from(&account))))
}

/// PUT /v1/users/{username}
pub async fn update_user_account(
    State(state): State<AppState>,
    Path(username): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateUserAccountApiRequest>,
) -> Result<Json<UserAccountResponse>, ApiError> {
    debug!(username = %username, "Updating user account");

    let account = state
        .user_account_service
        .update(&username, request.into())
        .await?;

    Ok(Json(UserAccountResponse::from(&account)))
}

/// DELETE /v1/users/{username}
pub async fn delete_user_account(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<StatusCode, ApiError> {
    debug!(username = %username, "Deleting user account");

    state.user_account_service.delete(&username).await?;

    Ok(StatusCode::OK)
}
