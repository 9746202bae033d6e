use axum_test::TestServer;
use kora_chat::AppState;
use kora_chat::config::AppConfig;
use kora_chat::model::{Message, Stage};
use kora_chat::server::router;
use kora_chat::session::{ChatStore, GREETING};
use kora_chat::ui::chat::{ERROR_FALLBACK, WAITING_PLACEHOLDER};
use std::sync::Arc;

fn setup() -> (TestServer, ChatStore) {
    let config = AppConfig::load_from_args(["kora-chat"]).expect("default config");
    let store = ChatStore::new();
    let state = AppState {
        store: store.clone(),
        config: Arc::new(config),
    };
    let server = TestServer::new(router(state)).expect("test server");
    (server, store)
}

#[tokio::test]
async fn test_index_renders_greeting() {
    let (server, _) = setup();

    let response = server.get("/").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains(GREETING));
    assert!(html.contains("Kora 2.0"));
    assert!(html.contains(r#"hx-post="/api/chat""#));
}

#[tokio::test]
async fn test_health_check() {
    let (server, _) = setup();

    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_draft_updates_controlled_value() {
    let (server, store) = setup();

    server
        .post("/api/draft")
        .form(&[("message", "h")])
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);
    server.post("/api/draft").form(&[("message", "hi")]).await;

    assert_eq!(store.snapshot().await.current_message, "hi");
    assert!(server.get("/").await.text().contains(r#"value="hi""#));
}

#[tokio::test]
async fn test_submit_adds_turn_and_clears_field() {
    let (server, store) = setup();

    let response = server
        .post("/api/chat")
        .form(&[("message", "what are cats?")])
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.headers().get("hx-trigger").unwrap(),
        "chat-submitted"
    );

    let html = response.text();
    assert!(html.contains("what are cats?"));
    assert!(html.contains("data-typing-dot"));
    assert!(html.contains(r#"value="""#));

    let snapshot = store.snapshot().await;
    assert_eq!(snapshot.messages.len(), 3);
    assert_eq!(snapshot.current_message, "");
}

#[tokio::test]
async fn test_blank_submit_is_ignored() {
    let (server, store) = setup();

    let response = server.post("/api/chat").form(&[("message", "  ")]).await;
    response.assert_status_ok();
    assert!(response.headers().get("hx-trigger").is_none());
    assert_eq!(store.snapshot().await.messages.len(), 1);
}

#[tokio::test]
async fn test_reply_events_drive_search_stages() {
    let (server, _) = setup();
    server
        .post("/api/chat")
        .form(&[("message", "cats")])
        .await
        .assert_status_ok();

    let transcript = concat!(
        "data: {\"type\": \"search_start\", \"query\": \"cats\"}\n\n",
        "data: {\"type\": \"search_results\", \"urls\": [\"a.com\", \"b.com\"]}\n\n",
    );
    server
        .post("/api/messages/3/events")
        .text(transcript)
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);

    let html = server.get("/fragments/messages").await.text();
    assert!(html.contains(r#"data-stage="searching""#));
    assert!(html.contains(r#"data-stage="reading""#));
    assert!(html.contains("data-connector"));
    assert!(html.find("a.com").unwrap() < html.find("b.com").unwrap());
    // Search progress arrived, so the bubble no longer animates.
    assert!(html.contains(WAITING_PLACEHOLDER));

    server
        .post("/api/messages/3/events")
        .text(r#"{"type": "end"}"#)
        .await;
    let messages: Vec<Message> = server.get("/api/messages").await.json();
    let stages = &messages[2].search_info.as_ref().unwrap().stages;
    assert_eq!(stages.last(), Some(&Stage::Writing));
}

#[tokio::test]
async fn test_search_error_without_text_uses_fallback() {
    let (server, _) = setup();
    server.post("/api/chat").form(&[("message", "cats")]).await;

    server
        .post("/api/messages/3/events")
        .text(r#"{"type": "search_error"}"#)
        .await;

    let html = server.get("/fragments/messages").await.text();
    assert!(html.contains(ERROR_FALLBACK));
}

#[tokio::test]
async fn test_events_for_unknown_message_return_404() {
    let (server, _) = setup();

    server
        .post("/api/messages/42/events")
        .text(r#"{"type": "end"}"#)
        .expect_failure()
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_malformed_event_returns_400() {
    let (server, _) = setup();

    server
        .post("/api/messages/1/events")
        .text("data: not json")
        .expect_failure()
        .await
        .assert_status_bad_request();
}
