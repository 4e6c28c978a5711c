use axum::{Json, extract::State, extract::rejection::JsonRejection, response::IntoResponse};

use crate::modules::chat::use_cases::send_chat_message::command::SendChatMessage;
use crate::shell::error::ApiError;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<SendChatMessage>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(command) = body.map_err(|rejection| {
        tracing::warn!(error = %rejection, "unreadable chat request");
        ApiError::BadRequest("Invalid JSON in request body".into())
    })?;
    let reply = state.send_chat.handle(command).await?;
    Ok(Json(reply))
}

#[cfg(test)]
mod send_chat_message_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::chat::adapters::outbound::chat_in_memory::ScriptedChat;
    use crate::modules::chat::core::ports::GenerativeChat;
    use crate::modules::chat::use_cases::send_chat_message::handler::ChatSettings;
    use crate::modules::content_records::adapters::outbound::tabular_in_memory::InMemoryTable;
    use crate::modules::content_records::core::sheet_layout::{SheetLayout, header_cells};
    use crate::shell::state::AppState;
    use crate::test_support::fixtures::data_row;

    use super::handle;

    fn make_test_state(chat: Option<ScriptedChat>, settings: ChatSettings) -> AppState {
        let table = InMemoryTable::with_rows(vec![header_cells(), data_row("Rust", "true")]);
        AppState::new(Arc::new(table), SheetLayout::default()).with_chat(
            chat.map(|chat| Arc::new(chat) as Arc<dyn GenerativeChat>),
            settings,
        )
    }

    fn app(state: AppState) -> Router {
        Router::new().route("/chat", post(handle)).with_state(state)
    }

    async fn post_json(state: AppState, body: &'static str) -> (StatusCode, serde_json::Value) {
        let response = app(state)
            .oneshot(
                Request::post("/chat")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or_default())
    }

    #[tokio::test]
    async fn it_should_return_the_model_reply_and_session() {
        let state = make_test_state(Some(ScriptedChat::replying("Rust, mostly.")), ChatSettings::default());

        let (status, json) = post_json(state, r#"{"message":"Skills?","sessionId":"session-7"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, serde_json::json!({"message": "Rust, mostly.", "sessionId": "session-7"}));
    }

    #[tokio::test]
    async fn it_should_return_400_without_a_message() {
        let state = make_test_state(Some(ScriptedChat::replying("x")), ChatSettings::default());
        let (status, json) = post_json(state, r#"{"history":[]}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Message is required");
    }

    #[tokio::test]
    async fn it_should_return_400_on_invalid_json() {
        let state = make_test_state(None, ChatSettings::default());
        let (status, json) = post_json(state, "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "Invalid JSON in request body");
    }

    #[tokio::test]
    async fn it_should_return_503_when_disabled_or_unconfigured() {
        let disabled = ChatSettings {
            disabled: true,
            ..ChatSettings::default()
        };
        let (status, json) = post_json(
            make_test_state(Some(ScriptedChat::replying("x")), disabled),
            r#"{"message":"Hi"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(json["error"], "AI assistant is temporarily disabled");

        let (status, _) = post_json(make_test_state(None, ChatSettings::default()), r#"{"message":"Hi"}"#).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn it_should_return_502_with_details_when_the_model_rejects() {
        let state = make_test_state(
            Some(ScriptedChat::rejecting(500, "model overloaded")),
            ChatSettings::default(),
        );
        let (status, json) = post_json(state, r#"{"message":"Hi"}"#).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(json["details"].as_str().unwrap().contains("model overloaded"));
    }
}
