use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::contact::use_cases::send_contact_message::command::SendContactMessage;
use crate::modules::contact::use_cases::send_contact_message::handler::ContactError;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ContactResponse {
    pub message: String,
}

fn reply(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        Json(ContactResponse {
            message: message.into(),
        }),
    )
        .into_response()
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SendContactMessage>, JsonRejection>,
) -> impl IntoResponse {
    let Json(command) = match body {
        Ok(b) => b,
        Err(_) => return reply(StatusCode::BAD_REQUEST, "Invalid request body"),
    };

    match state.send_contact.handle(command).await {
        Ok(()) => reply(StatusCode::OK, "Message sent successfully"),
        Err(err @ ContactError::MissingFields) => reply(StatusCode::BAD_REQUEST, err.to_string()),
        Err(err @ ContactError::NotConfigured) => {
            reply(StatusCode::SERVICE_UNAVAILABLE, err.to_string())
        }
        Err(err @ ContactError::Delivery(_)) => {
            reply(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}
