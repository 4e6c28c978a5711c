use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::modules::chat::use_cases::send_chat_message::handler::ChatError;
use crate::modules::content_records::application::errors::ApplicationError;

/// Error type for the JSON endpoints. Renders `{ "error": ... }`, plus
/// `details` when an upstream service had something to say.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Records(#[from] ApplicationError),

    #[error(transparent)]
    Chat(#[from] ChatError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

fn body(status: StatusCode, error: impl Into<String>, details: Option<String>) -> Response {
    let payload = match details {
        Some(details) => json!({ "error": error.into(), "details": details }),
        None => json!({ "error": error.into() }),
    };
    (status, Json(payload)).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => body(StatusCode::BAD_REQUEST, message, None),

            ApiError::Records(err) => match err {
                ApplicationError::Validation(message) => {
                    body(StatusCode::BAD_REQUEST, message, None)
                }
                ApplicationError::NotFound(message) => body(StatusCode::NOT_FOUND, message, None),
                ApplicationError::Backend(backend) => {
                    tracing::error!(error = %backend, "content record backend failure");
                    body(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Failed to access content records",
                        Some(backend.to_string()),
                    )
                }
            },

            ApiError::Chat(err) => match err {
                ChatError::MissingMessage => body(StatusCode::BAD_REQUEST, err.to_string(), None),
                ChatError::Disabled | ChatError::NotConfigured => {
                    body(StatusCode::SERVICE_UNAVAILABLE, err.to_string(), None)
                }
                ChatError::PortfolioUnavailable => {
                    tracing::error!("portfolio data missing or empty");
                    body(StatusCode::INTERNAL_SERVER_ERROR, err.to_string(), None)
                }
                ChatError::PortfolioLoad(ref source) => {
                    tracing::error!(error = %source, "portfolio data could not be loaded");
                    body(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        err.to_string(),
                        Some(format!("{source:#}")),
                    )
                }
                ChatError::Upstream(ref upstream) => body(
                    StatusCode::BAD_GATEWAY,
                    err.to_string(),
                    Some(upstream.to_string()),
                ),
            },
        }
    }
}
