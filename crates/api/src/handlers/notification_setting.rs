//! Handlers for the `/notification-setting/{user_id}` resource.
//!
//! Settings are strictly private: both endpoints reject callers whose id
//! differs from the path `user_id`. PATCH auto-creates the row on first
//! write by merging the supplied toggles over the product defaults; GET
//! returns 404 until that first write happens.

use axum::extract::{Path, State};
use axum::Json;
use waypost_core::authz::ensure_owner;
use waypost_core::error::CoreError;
use waypost_core::types::DbId;
use waypost_db::models::notification_setting::{NotificationSetting, UpdateNotificationSetting};
use waypost_db::repositories::notification_setting_repo::UNIQUE_USER_CONSTRAINT;
use waypost_db::repositories::NotificationSettingRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// GET /api/v1/notification-setting/{user_id}
///
/// Return the caller's settings row with every toggle. 403 when the path
/// user id is not the caller, 404 when no row exists yet.
pub async fn get_settings(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<ApiResponse<NotificationSetting>> {
    ensure_owner(user_id, auth.user_id).map_err(AppError::Core)?;

    let settings = NotificationSettingRepo::find_by_user(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Notification settings",
            id: user_id,
        }))?;

    Ok(ApiResponse::ok(
        "Notification settings retrieved successfully",
        settings,
    ))
}

/// PATCH /api/v1/notification-setting/{user_id}
///
/// Partial update: only toggles present in the body are written. When no
/// row exists the supplied toggles are merged over the defaults and a row
/// is created. A concurrent first write that loses the insert race on the
/// unique user-id constraint is retried as an update, so exactly one row
/// is ever written per call.
pub async fn update_settings(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
    Json(patch): Json<UpdateNotificationSetting>,
) -> AppResult<ApiResponse<NotificationSetting>> {
    ensure_owner(user_id, auth.user_id).map_err(AppError::Core)?;

    if patch.is_empty() {
        return Err(AppError::BadRequest(
            "At least one notification toggle must be provided".into(),
        ));
    }

    let settings = match NotificationSettingRepo::update(&state.pool, user_id, &patch).await? {
        Some(settings) => settings,
        None => match NotificationSettingRepo::create(&state.pool, user_id, &patch).await {
            Ok(settings) => settings,
            Err(err) if waypost_db::is_unique_violation(&err, UNIQUE_USER_CONSTRAINT) => {
                // Lost the create race; the row exists now, apply the
                // patch to it instead.
                tracing::debug!(user_id, "settings insert raced, retrying as update");
                NotificationSettingRepo::update(&state.pool, user_id, &patch)
                    .await?
                    .ok_or_else(|| {
                        AppError::InternalError(
                            "Settings row vanished after unique violation".into(),
                        )
                    })?
            }
            Err(err) => return Err(err.into()),
        },
    };

    Ok(ApiResponse::ok(
        "Notification settings updated successfully",
        settings,
    ))
}
