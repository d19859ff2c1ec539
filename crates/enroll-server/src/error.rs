use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use enroll_flow::Notice;
use serde::Serialize;

/// API error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetails,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

/// Body of a redirect-with-notice response
#[derive(Debug, Serialize)]
pub struct RedirectBody {
    pub redirect_to: String,
    pub notice: Notice,
}

/// Application error type
///
/// Flow failures are always rendered as a redirect plus a short notice,
/// never a raw error payload; `Internal` is the only 5xx surface.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Redirecting to {to}")]
    Redirect { to: String, notice: Notice },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Redirect { to, notice } => see_other(&to, notice),
            ApiError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: ErrorDetails {
                        code: "NOT_FOUND".to_string(),
                        message,
                    },
                }),
            )
                .into_response(),
            ApiError::Internal(err) => {
                tracing::error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: ErrorDetails {
                            code: "INTERNAL_ERROR".to_string(),
                            message: "An internal error occurred".to_string(),
                        },
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// 303 See Other carrying the notice in the body
pub fn see_other(to: &str, notice: Notice) -> Response {
    let body = Json(RedirectBody {
        redirect_to: to.to_string(),
        notice,
    });

    match header::HeaderValue::from_str(to) {
        Ok(location) => (
            StatusCode::SEE_OTHER,
            [(header::LOCATION, location)],
            body,
        )
            .into_response(),
        Err(_) => (StatusCode::SEE_OTHER, body).into_response(),
    }
}
