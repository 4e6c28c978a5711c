use axum::{
    Extension, Json, Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::chat::use_cases::report_chat_status::inbound::http as chat_status_http;
use crate::modules::chat::use_cases::send_chat_message::inbound::http as send_chat_http;
use crate::modules::contact::use_cases::send_contact_message::inbound::http as contact_http;
use crate::modules::content_records::use_cases::create_content_record::inbound::http as create_http;
use crate::modules::content_records::use_cases::delete_content_record::inbound::http as delete_http;
use crate::modules::content_records::use_cases::list_content_records::inbound::http as list_http;
use crate::modules::content_records::use_cases::update_content_record::inbound::http as update_http;
use crate::shell::config::ServerConfig;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());
    Router::new()
        .route(
            "/records",
            get(list_http::handle)
                .post(create_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .route(
            "/chat",
            get(chat_status_http::handle).post(send_chat_http::handle),
        )
        .route("/contact", post(contact_http::handle))
        .route("/health", get(health))
        .route("/gql", get(graphiql).post(graphql))
        .with_state(state)
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
}

/// `*` allows any origin; otherwise only the listed ones. Unparseable entries are skipped.
pub fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any);
    if server.allows_any_origin() {
        return layer.allow_origin(Any);
    }
    let origins: Vec<HeaderValue> = server
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}
