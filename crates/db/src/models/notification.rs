//! Notification feed entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use waypost_core::types::{DbId, Timestamp};

/// A row from the `notifications` table.
///
/// The owning `user_id` is immutable after creation; no update path
/// touches it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub user_id: DbId,
    pub message: String,
    pub is_read: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a notification.
pub struct CreateNotification {
    pub user_id: DbId,
    pub message: String,
    pub is_read: bool,
}

/// DTO for flipping a notification's read-state.
///
/// `is_read` may move in either direction; marking a read notification
/// unread again is allowed.
#[derive(Debug, Deserialize)]
pub struct UpdateReadState {
    pub is_read: bool,
}
