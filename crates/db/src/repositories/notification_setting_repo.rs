//! Repository for the `notification_settings` table.
//!
//! At most one row exists per user (`uq_notification_settings_user_id`).
//! The write path is update-first: [`NotificationSettingRepo::update`]
//! when a row exists, [`NotificationSettingRepo::create`] merging the
//! patch over the product defaults when it does not. The caller handles
//! the concurrent-first-write race by retrying a lost insert as an update
//! (see `waypost_db::is_unique_violation`).

use sqlx::PgPool;
use waypost_core::types::DbId;

use crate::models::notification_setting::{NotificationSetting, UpdateNotificationSetting};

/// Column list for `notification_settings` queries.
const COLUMNS: &str = "id, user_id, mobile_notifications, \
    email_notifications_activity_workspace, email_notifications_always_send_email, \
    email_notifications_email_digests, email_notifications_announcement_and_update_emails, \
    slack_notifications_activity_workspace, slack_notifications_always_send_email, \
    slack_notifications_email_digests, slack_notifications_announcement_and_update_emails, \
    created_at, updated_at";

/// Name of the unique constraint on `user_id`.
pub const UNIQUE_USER_CONSTRAINT: &str = "uq_notification_settings_user_id";

/// Provides CRUD operations for per-user notification settings.
pub struct NotificationSettingRepo;

impl NotificationSettingRepo {
    /// Find the settings row for a user, if one exists.
    pub async fn find_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<NotificationSetting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notification_settings WHERE user_id = $1");
        sqlx::query_as::<_, NotificationSetting>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a settings row, merging the patch over the product defaults.
    ///
    /// Toggles absent from `patch` take their default value. Fails with a
    /// unique violation when a row for this user already exists.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        patch: &UpdateNotificationSetting,
    ) -> Result<NotificationSetting, sqlx::Error> {
        let query = format!(
            "INSERT INTO notification_settings (user_id,
                mobile_notifications,
                email_notifications_activity_workspace,
                email_notifications_always_send_email,
                email_notifications_email_digests,
                email_notifications_announcement_and_update_emails,
                slack_notifications_activity_workspace,
                slack_notifications_always_send_email,
                slack_notifications_email_digests,
                slack_notifications_announcement_and_update_emails)
             VALUES ($1,
                COALESCE($2, true),
                COALESCE($3, false),
                COALESCE($4, false),
                COALESCE($5, true),
                COALESCE($6, true),
                COALESCE($7, true),
                COALESCE($8, true),
                COALESCE($9, true),
                COALESCE($10, false))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NotificationSetting>(&query)
            .bind(user_id)
            .bind(patch.mobile_notifications)
            .bind(patch.email_notifications_activity_workspace)
            .bind(patch.email_notifications_always_send_email)
            .bind(patch.email_notifications_email_digests)
            .bind(patch.email_notifications_announcement_and_update_emails)
            .bind(patch.slack_notifications_activity_workspace)
            .bind(patch.slack_notifications_always_send_email)
            .bind(patch.slack_notifications_email_digests)
            .bind(patch.slack_notifications_announcement_and_update_emails)
            .fetch_one(pool)
            .await
    }

    /// Apply a partial update to an existing settings row.
    ///
    /// Only non-`None` toggles in `patch` are written; the rest keep their
    /// stored values. Returns `None` when no row exists for this user.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        patch: &UpdateNotificationSetting,
    ) -> Result<Option<NotificationSetting>, sqlx::Error> {
        let query = format!(
            "UPDATE notification_settings SET
                mobile_notifications = COALESCE($2, mobile_notifications),
                email_notifications_activity_workspace =
                    COALESCE($3, email_notifications_activity_workspace),
                email_notifications_always_send_email =
                    COALESCE($4, email_notifications_always_send_email),
                email_notifications_email_digests =
                    COALESCE($5, email_notifications_email_digests),
                email_notifications_announcement_and_update_emails =
                    COALESCE($6, email_notifications_announcement_and_update_emails),
                slack_notifications_activity_workspace =
                    COALESCE($7, slack_notifications_activity_workspace),
                slack_notifications_always_send_email =
                    COALESCE($8, slack_notifications_always_send_email),
                slack_notifications_email_digests =
                    COALESCE($9, slack_notifications_email_digests),
                slack_notifications_announcement_and_update_emails =
                    COALESCE($10, slack_notifications_announcement_and_update_emails),
                updated_at = NOW()
             WHERE user_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, NotificationSetting>(&query)
            .bind(user_id)
            .bind(patch.mobile_notifications)
            .bind(patch.email_notifications_activity_workspace)
            .bind(patch.email_notifications_always_send_email)
            .bind(patch.email_notifications_email_digests)
            .bind(patch.email_notifications_announcement_and_update_emails)
            .bind(patch.slack_notifications_activity_workspace)
            .bind(patch.slack_notifications_always_send_email)
            .bind(patch.slack_notifications_email_digests)
            .bind(patch.slack_notifications_announcement_and_update_emails)
            .fetch_optional(pool)
            .await
    }
}
