//! Shared response envelope for API handlers.
//!
//! All success responses use the
//! `{ "status": "success", "message", "status_code", "data" }` envelope.
//! Use [`ApiResponse`] instead of ad-hoc `serde_json::json!` blocks to get
//! compile-time type safety and consistent serialization; errors produce
//! the matching `{ "status": "error", ... }` shape via `AppError`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Standard success envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: &'static str,
    pub message: String,
    pub status_code: u16,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 OK envelope.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success",
            message: message.into(),
            status_code: StatusCode::OK.as_u16(),
            data,
        }
    }

    /// 201 Created envelope.
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success",
            message: message.into(),
            status_code: StatusCode::CREATED.as_u16(),
            data,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::OK);
        (status, Json(self)).into_response()
    }
}
