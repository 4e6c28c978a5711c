use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
    http::header::{CACHE_CONTROL, EXPIRES, PRAGMA},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::error::ApiError;
use crate::shell::state::AppState;

const NO_STORE: &str = "no-store, no-cache, must-revalidate, proxy-revalidate";

#[derive(Deserialize)]
pub struct ListContentRecordsParams {
    pub status: Option<bool>,
}

pub async fn handle(
    State(state): State<AppState>,
    query: Result<Query<ListContentRecordsParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let records = state.list_records.handle(params.status).await?;
    Ok((
        [(CACHE_CONTROL, NO_STORE), (PRAGMA, "no-cache"), (EXPIRES, "0")],
        Json(records),
    ))
}

#[cfg(test)]
mod list_content_records_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header::CACHE_CONTROL},
        routing::get,
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::content_records::adapters::outbound::tabular_in_memory::InMemoryTable;
    use crate::modules::content_records::core::sheet_layout::{SheetLayout, header_cells};
    use crate::shell::state::AppState;
    use crate::test_support::fixtures::data_row;

    use super::handle;

    fn make_test_state(table: InMemoryTable) -> AppState {
        AppState::new(Arc::new(table), SheetLayout::default())
    }

    fn app(state: AppState) -> Router {
        Router::new().route("/records", get(handle)).with_state(state)
    }

    fn seeded() -> InMemoryTable {
        InMemoryTable::with_rows(vec![
            header_cells(),
            data_row("Visible", "true"),
            data_row("Gone", "false"),
        ])
    }

    async fn get_json(state: AppState, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app(state)
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or_default())
    }

    #[tokio::test]
    async fn it_should_return_active_records_with_no_cache_headers() {
        let response = app(make_test_state(seeded()))
            .oneshot(Request::get("/records").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[CACHE_CONTROL],
            "no-store, no-cache, must-revalidate, proxy-revalidate"
        );
        assert_eq!(response.headers()["pragma"], "no-cache");
        assert_eq!(response.headers()["expires"], "0");
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 1);
        assert_eq!(json[0]["id"], "2");
        assert_eq!(json[0]["contentName"], "Visible");
        assert_eq!(json[0]["status"], true);
    }

    #[tokio::test]
    async fn it_should_list_soft_deleted_records_on_request() {
        let (status, json) = get_json(make_test_state(seeded()), "/records?status=false").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json[0]["contentName"], "Gone");
        assert_eq!(json[0]["id"], "3");
    }

    #[tokio::test]
    async fn it_should_return_an_empty_list_for_an_empty_sheet() {
        let (status, json) = get_json(make_test_state(InMemoryTable::new()), "/records").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!([]));
    }

    #[tokio::test]
    async fn it_should_return_400_for_a_non_boolean_status() {
        let response = app(make_test_state(seeded()))
            .oneshot(Request::get("/records?status=maybe").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()["content-type"], "application/json");
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(json["error"].as_str().unwrap().contains("status"));
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_sheet_is_offline() {
        let mut table = seeded();
        table.toggle_offline();
        let (status, json) = get_json(make_test_state(table), "/records").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json.get("details").is_some());
    }
}
