//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Handlers receive the pool
//! through shared state; nothing here holds a connection of its own.

pub mod notification_repo;
pub mod notification_setting_repo;
pub mod session_repo;
pub mod user_repo;

pub use notification_repo::NotificationRepo;
pub use notification_setting_repo::NotificationSettingRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
