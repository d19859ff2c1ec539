pub mod auth;
pub mod health;
pub mod helpers;
pub mod profile;
pub mod registration;

use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::error::{ErrorDetails, ErrorResponse};

/// Fallback for unmatched routes
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: ErrorDetails {
                code: "NOT_FOUND".to_string(),
                message: "Page not found".to_string(),
            },
        }),
    )
}
