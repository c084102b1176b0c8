//! Handlers for the `/users` resource.

use axum::extract::State;
use axum::http::StatusCode;
use waypost_core::error::CoreError;
use waypost_db::models::user::UserResponse;
use waypost_db::repositories::{SessionRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/users/me
///
/// Return the authenticated user's profile (never the password hash).
pub async fn me(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<UserResponse>> {
    let user = UserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }))?;

    Ok(ApiResponse::ok(
        "Profile retrieved successfully",
        user.into(),
    ))
}

/// DELETE /api/v1/users/me
///
/// Soft-delete the authenticated user's account and revoke all sessions.
/// The row is kept with `is_deleted = true`; there is no hard delete.
pub async fn delete_me(auth: AuthUser, State(state): State<AppState>) -> AppResult<StatusCode> {
    let deleted = UserRepo::soft_delete(&state.pool, auth.user_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: auth.user_id,
        }));
    }

    SessionRepo::revoke_all_for_user(&state.pool, auth.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
