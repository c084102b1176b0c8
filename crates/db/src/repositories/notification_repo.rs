//! Repository for the `notifications` table.
//!
//! Every query is scoped by `user_id`; a notification is only ever
//! visible to, and mutable by, its owning user. The bulk mutations
//! (`mark_all_read`, `delete_all_for_user`) run inside a transaction so a
//! crash mid-batch cannot leave partial state.

use sqlx::PgPool;
use waypost_core::types::DbId;

use crate::models::notification::{CreateNotification, Notification};

/// Column list for `notifications` queries.
const COLUMNS: &str = "id, user_id, message, is_read, created_at, updated_at";

/// Provides CRUD operations for notifications.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Insert a notification, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateNotification,
    ) -> Result<Notification, sqlx::Error> {
        let query = format!(
            "INSERT INTO notifications (user_id, message, is_read)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(input.user_id)
            .bind(&input.message)
            .bind(input.is_read)
            .fetch_one(pool)
            .await
    }

    /// List a user's notifications, newest first.
    ///
    /// When `unread_only` is `true`, only notifications with
    /// `is_read = false` are returned.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        unread_only: bool,
    ) -> Result<Vec<Notification>, sqlx::Error> {
        let filter = if unread_only {
            "AND is_read = false"
        } else {
            ""
        };
        let query = format!(
            "SELECT {COLUMNS} FROM notifications
             WHERE user_id = $1 {filter}
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Set the read-state of a single notification.
    ///
    /// The lookup is filtered on both `id` and `user_id` so a caller
    /// cannot flip another user's notification by id guessing. Returns
    /// `None` when no such row exists for this user.
    pub async fn set_read_state(
        pool: &PgPool,
        notification_id: DbId,
        user_id: DbId,
        is_read: bool,
    ) -> Result<Option<Notification>, sqlx::Error> {
        let query = format!(
            "UPDATE notifications
             SET is_read = $3, updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(notification_id)
            .bind(user_id)
            .bind(is_read)
            .fetch_optional(pool)
            .await
    }

    /// Mark every notification for a user as read, atomically.
    ///
    /// Returns `None` when the user has no notifications at all, otherwise
    /// the full (now all-read) list, newest first.
    pub async fn mark_all_read(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<Vec<Notification>>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM notifications WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&mut *tx)
                .await?;
        if total == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        sqlx::query(
            "UPDATE notifications SET is_read = true, updated_at = NOW()
             WHERE user_id = $1 AND is_read = false",
        )
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        let query = format!(
            "SELECT {COLUMNS} FROM notifications
             WHERE user_id = $1
             ORDER BY created_at DESC"
        );
        let notifications = sqlx::query_as::<_, Notification>(&query)
            .bind(user_id)
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(notifications))
    }

    /// Delete every notification for a user, atomically.
    ///
    /// Returns the number of rows removed; `0` means there was nothing to
    /// delete.
    pub async fn delete_all_for_user(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query("DELETE FROM notifications WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }
}
