//! Page shell and the server-hosted chat body.

use leptos::prelude::*;

use crate::session::ChatSnapshot;
use crate::ui::chat::{Header, InputBar, MESSAGE_AREA_ID, MessageArea, SubmitEvent};
use crate::ui::render_html;

/// DOM id of the chat body, swapped after each submit.
pub const CHAT_BODY_ID: &str = "chat-body";

/// Chat body: the message area plus the input bar.
///
/// Input is forwarded to the server via HTMX, so the Leptos callbacks are
/// no-ops here. The message area polls for fresh snapshots every
/// `poll_interval_ms`.
#[component]
pub fn ChatBody(
    /// State to render.
    snapshot: ChatSnapshot,
    /// Message-area refresh interval.
    #[prop(default = 1000)]
    poll_interval_ms: u64,
) -> impl IntoView {
    let ChatSnapshot {
        messages,
        current_message,
    } = snapshot;

    view! {
        <div id=CHAT_BODY_ID class="flex flex-col flex-grow" style="min-height: 0">
            <div
                class="flex flex-col flex-grow"
                style="min-height: 0"
                hx-get="/fragments/messages"
                hx-trigger={format!("every {poll_interval_ms}ms")}
                hx-target={format!("#{MESSAGE_AREA_ID}")}
                hx-swap="outerHTML"
            >
                <MessageArea messages=messages />
            </div>
            <InputBar
                current_message=current_message
                set_current_message=Callback::new(|_: String| {})
                on_submit=Callback::new(|_: SubmitEvent| {})
                submit_url="/api/chat"
                submit_target="#chat-body"
                draft_url="/api/draft"
            />
        </div>
    }
}

/// Render the complete HTML document.
pub fn render_page(title: &str, snapshot: ChatSnapshot, poll_interval_ms: u64) -> String {
    let body = render_html(move || {
        view! {
            <div class="flex flex-col h-screen">
                <Header />
                <ChatBody snapshot=snapshot poll_interval_ms=poll_interval_ms />
            </div>
        }
    });
    html_shell(title, &body)
}

/// Render only the chat body (submit responses).
pub fn render_chat_body(snapshot: ChatSnapshot, poll_interval_ms: u64) -> String {
    render_html(move || view! { <ChatBody snapshot=snapshot poll_interval_ms=poll_interval_ms /> })
}

/// Render only the message area (poll responses).
pub fn render_message_area(snapshot: ChatSnapshot) -> String {
    render_html(move || view! { <MessageArea messages=snapshot.messages /> })
}

fn html_shell(title: &str, content: &str) -> String {
    let title = escape_text(title);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>

    <!-- HTMX (local) -->
    <script src="/static/vendor/htmx-2.0.8.min.js"></script>
    <link rel="stylesheet" href="/static/app.css">
</head>
<body class="min-h-screen antialiased">
    {content}
</body>
</html>"#
    )
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
