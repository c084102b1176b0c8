//! Handlers for the `/notifications` resource.
//!
//! All endpoints require authentication via [`AuthUser`]. List-returning
//! endpoints respond 200 with an empty list rather than 404; the bulk
//! mutations (`read-all`, delete-all) respond 404 when the caller has
//! nothing to mutate.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use validator::Validate;
use waypost_core::error::CoreError;
use waypost_core::types::DbId;
use waypost_db::models::notification::{CreateNotification, Notification, UpdateReadState};
use waypost_db::repositories::{NotificationRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /notifications`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateNotificationRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub message: String,
    /// Initial read-state. Defaults to unread.
    pub is_read: Option<bool>,
    /// Target user. Defaults to the authenticated caller.
    pub user_id: Option<DbId>,
}

/// Response payload for `DELETE /notifications`.
#[derive(Debug, Serialize)]
pub struct DeleteAllData {
    pub deleted_count: u64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/notifications/{user_id}
///
/// List a user's notifications, newest first. 404 when the user does not
/// exist (or is soft-deleted); an existing user with no notifications
/// gets 200 with an empty list.
pub async fn list_for_user(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<ApiResponse<Vec<Notification>>> {
    if !UserRepo::exists(&state.pool, user_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }));
    }

    let notifications = NotificationRepo::list_for_user(&state.pool, user_id, false).await?;

    Ok(ApiResponse::ok(
        "Notifications retrieved successfully",
        notifications,
    ))
}

/// POST /api/v1/notifications
///
/// Create a notification. The target user comes from the body and
/// defaults to the caller; 404 when the target does not exist.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateNotificationRequest>,
) -> AppResult<ApiResponse<Notification>> {
    input.validate()?;

    let target_user_id = input.user_id.unwrap_or(auth.user_id);
    if !UserRepo::exists(&state.pool, target_user_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: target_user_id,
        }));
    }

    let notification = NotificationRepo::create(
        &state.pool,
        &CreateNotification {
            user_id: target_user_id,
            message: input.message,
            is_read: input.is_read.unwrap_or(false),
        },
    )
    .await?;

    Ok(ApiResponse::created(
        "Notification created successfully",
        notification,
    ))
}

/// PATCH /api/v1/notifications/{notification_id}/read
///
/// Set a single notification's read-state. The lookup is filtered on both
/// the notification id and the caller's user id, so marking another
/// user's notification by id guessing yields 404. The flag may move in
/// either direction.
pub async fn mark_read(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(notification_id): Path<DbId>,
    Json(input): Json<UpdateReadState>,
) -> AppResult<ApiResponse<Notification>> {
    let notification =
        NotificationRepo::set_read_state(&state.pool, notification_id, auth.user_id, input.is_read)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Notification",
                id: notification_id,
            }))?;

    Ok(ApiResponse::ok(
        "Notification updated successfully",
        notification,
    ))
}

/// PATCH /api/v1/notifications/read-all
///
/// Mark every notification of the caller as read in one transaction and
/// return the full list. 404 when the caller has no notifications at all.
pub async fn mark_all_read(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<Notification>>> {
    let notifications = NotificationRepo::mark_all_read(&state.pool, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Notifications for user",
            id: auth.user_id,
        }))?;

    Ok(ApiResponse::ok(
        "All notifications marked as read",
        notifications,
    ))
}

/// GET /api/v1/notifications/unread
///
/// List the caller's unread notifications, newest first. An empty unread
/// list is 200, not 404.
pub async fn list_unread(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<Vec<Notification>>> {
    let notifications = NotificationRepo::list_for_user(&state.pool, auth.user_id, true).await?;

    Ok(ApiResponse::ok(
        "Unread notifications retrieved successfully",
        notifications,
    ))
}

/// DELETE /api/v1/notifications
///
/// Delete every notification of the caller in one transaction. 404 when
/// there is nothing to delete; irreversible otherwise.
pub async fn delete_all(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<ApiResponse<DeleteAllData>> {
    let deleted_count = NotificationRepo::delete_all_for_user(&state.pool, auth.user_id).await?;

    if deleted_count == 0 {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Notifications for user",
            id: auth.user_id,
        }));
    }

    Ok(ApiResponse::ok(
        "All notifications deleted",
        DeleteAllData { deleted_count },
    ))
}
