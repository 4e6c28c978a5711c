use axum::{Json, extract::State, extract::rejection::JsonRejection, response::IntoResponse};

use crate::modules::content_records::use_cases::update_content_record::command::UpdateContentRecord;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<UpdateContentRecord>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(command) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let record = state.update_record.handle(command).await?;
    Ok(Json(record))
}
