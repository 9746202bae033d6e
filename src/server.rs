use axum::{
    Form, Json, Router,
    extract::{Path, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tracing::info;

use crate::AppState;
use crate::config::AppConfig;
use crate::error::ServerError;
use crate::model::Message;
use crate::session::ChatStore;
use crate::stream::StreamEvent;
use crate::ui::app::{render_chat_body, render_message_area, render_page};

/// HTMX response header naming client-side events to fire.
const HX_TRIGGER: HeaderName = HeaderName::from_static("hx-trigger");

/// HTMX event fired after a chat turn is accepted.
const SUBMITTED_TRIGGER: &str = "chat-submitted";

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let static_dir = state.config.server.static_dir.clone();

    Router::new()
        // HTML
        .route("/", get(index_handler))
        .route("/fragments/messages", get(messages_fragment))
        // API
        .route("/api/messages", get(api_messages))
        .route("/api/draft", post(api_draft))
        .route("/api/chat", post(api_chat))
        .route("/api/messages/{id}/events", post(api_message_events))
        .route("/health", get(health_check))
        // Static assets
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let state = AppState {
        store: ChatStore::new(),
        config: Arc::clone(&config),
    };

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!(
        name: "server.started",
        address = %format!("http://{address}"),
        "Server started"
    );

    axum::serve(listener, router(state)).await?;
    Ok(())
}

/// Form body carrying the input field value.
#[derive(Debug, Deserialize)]
struct MessageForm {
    #[serde(default)]
    message: String,
}

/// GET / - Full chat page.
async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.store.snapshot().await;
    Html(render_page(
        &state.config.ui.title,
        snapshot,
        state.config.ui.poll_interval_ms,
    ))
}

/// GET /fragments/messages - Message area only.
async fn messages_fragment(State(state): State<AppState>) -> impl IntoResponse {
    Html(render_message_area(state.store.snapshot().await))
}

/// GET /api/messages - Message snapshot as JSON.
async fn api_messages(State(state): State<AppState>) -> Json<Vec<Message>> {
    Json(state.store.snapshot().await.messages)
}

/// POST /api/draft - One keystroke from the input bar.
async fn api_draft(State(state): State<AppState>, Form(form): Form<MessageForm>) -> StatusCode {
    state.store.set_current_message(form.message).await;
    StatusCode::NO_CONTENT
}

/// POST /api/chat - Input bar submit.
///
/// The submitted field value is authoritative, so a submit that races the
/// last keystroke still sends what the user saw.
async fn api_chat(
    State(state): State<AppState>,
    Form(form): Form<MessageForm>,
) -> impl IntoResponse {
    state.store.set_current_message(form.message).await;

    let mut headers = HeaderMap::new();
    if let Some(reply_id) = state.store.submit().await {
        info!(name: "chat.reply.pending", message_id = reply_id, "Awaiting reply events");
        headers.insert(HX_TRIGGER, HeaderValue::from_static(SUBMITTED_TRIGGER));
    }

    let body = render_chat_body(
        state.store.snapshot().await,
        state.config.ui.poll_interval_ms,
    );
    (headers, Html(body))
}

/// POST /api/messages/{id}/events - Apply reply progress.
///
/// Accepts a single JSON event or an SSE transcript of `data:` lines.
async fn api_message_events(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    body: String,
) -> Result<StatusCode, ServerError> {
    let events = StreamEvent::parse_batch(&body)?;
    for event in events {
        state.store.apply(id, event).await?;
    }
    Ok(StatusCode::NO_CONTENT)
}

/// GET /health - Liveness probe.
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "message": "Chat UI service is running"
    }))
}
