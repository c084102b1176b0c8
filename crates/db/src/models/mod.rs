//! Domain model structs and DTOs.
//!
//! Each submodule carries a `FromRow` entity struct matching the database
//! row, plus the DTOs its repository needs: a plain create struct for
//! inserts and, where a patch path exists, a `Deserialize` update DTO
//! with all-`Option` fields.

pub mod notification;
pub mod notification_setting;
pub mod session;
pub mod user;
