//! v1 API endpoints

pub mod users;

use axum::{routing::get, Router};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(users::list_user_accounts).post(users::create_user_account),
        )
        .route(
            "/users/{username}",
            get(users::get_user_account)
                .put(users::update_user_account)
                .delete(users::delete_user_account),
        )
}
