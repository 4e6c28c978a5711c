use axum::{Json, extract::State, extract::rejection::JsonRejection, response::IntoResponse};

use crate::modules::content_records::use_cases::create_content_record::command::CreateContentRecord;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateContentRecord>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(command) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let record = state.create_record.handle(command).await?;
    Ok(Json(record))
}
