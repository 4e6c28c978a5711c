use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::error::ApiError;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DeleteContentRecordParams {
    pub id: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<DeleteContentRecordParams>,
) -> Result<impl IntoResponse, ApiError> {
    let acknowledgement = state.delete_record.handle(params.id.as_deref()).await?;
    Ok(Json(acknowledgement))
}
