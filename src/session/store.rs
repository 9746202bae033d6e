//! Parent-owned chat state.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::model::{Message, SearchInfo, Stage};
use crate::stream::StreamEvent;

/// Greeting shown before the first user turn.
pub const GREETING: &str = "Hi there, how can I help you?";

/// Content shown when the backend reports a failed reply.
pub const REPLY_FAILED: &str = "Sorry, there was an error processing your request.";

/// Immutable copy of the chat state handed to the view layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSnapshot {
    /// Messages in chronological order.
    pub messages: Vec<Message>,
    /// Controlled value of the input field.
    pub current_message: String,
}

/// Thread-safe store that owns every piece of mutable chat state.
///
/// Views never mutate messages; they receive a [`ChatSnapshot`] per render and
/// report input through callbacks that end up here.
#[derive(Debug, Clone)]
pub struct ChatStore {
    inner: Arc<RwLock<ChatState>>,
}

#[derive(Debug, Default)]
struct ChatState {
    messages: Vec<Message>,
    current_message: String,
    checkpoint_id: Option<String>,
}

impl ChatState {
    fn next_id(&self) -> u64 {
        self.messages.iter().map(|m| m.id).max().unwrap_or(0) + 1
    }
}

fn assistant_mut(messages: &mut [Message], id: u64) -> Result<&mut Message, StoreError> {
    let message = messages
        .iter_mut()
        .find(|m| m.id == id)
        .ok_or(StoreError::UnknownMessage(id))?;

    if message.is_user {
        return Err(StoreError::NotAssistant(id));
    }
    Ok(message)
}

impl Default for ChatStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatStore {
    /// Create a store holding only the greeting message.
    #[must_use]
    pub fn new() -> Self {
        Self::with_messages(vec![Message::assistant(1, GREETING)])
    }

    /// Create a store seeded with `messages`.
    #[must_use]
    pub fn with_messages(messages: Vec<Message>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ChatState {
                messages,
                ..ChatState::default()
            })),
        }
    }

    /// Copy of the current state.
    pub async fn snapshot(&self) -> ChatSnapshot {
        let state = self.inner.read().await;
        ChatSnapshot {
            messages: state.messages.clone(),
            current_message: state.current_message.clone(),
        }
    }

    /// Replace the draft text. Called once per keystroke.
    pub async fn set_current_message(&self, text: impl Into<String>) {
        self.inner.write().await.current_message = text.into();
    }

    /// Checkpoint id assigned by the backend, if any.
    pub async fn checkpoint_id(&self) -> Option<String> {
        self.inner.read().await.checkpoint_id.clone()
    }

    /// Submit the current draft.
    ///
    /// Appends the user message and a loading assistant placeholder, then
    /// clears the draft. Returns the placeholder's id, or `None` when the draft
    /// is blank.
    pub async fn submit(&self) -> Option<u64> {
        let mut state = self.inner.write().await;
        let text = state.current_message.trim().to_string();
        if text.is_empty() {
            return None;
        }

        let user_id = state.next_id();
        state.messages.push(Message::user(user_id, text));

        let assistant_id = state.next_id();
        state.messages.push(Message::pending_assistant(assistant_id));
        state.current_message.clear();

        tracing::info!(
            name: "chat.submitted",
            user_message_id = user_id,
            assistant_message_id = assistant_id,
            "Chat turn submitted"
        );
        Some(assistant_id)
    }

    /// Apply a stream event to the assistant message `id`.
    pub async fn apply(&self, id: u64, event: StreamEvent) -> Result<(), StoreError> {
        let mut guard = self.inner.write().await;
        let state = &mut *guard;
        tracing::debug!(name: "chat.event.applied", message_id = id, kind = event.kind(), "Applying stream event");

        let message = assistant_mut(&mut state.messages, id)?;
        match event {
            StreamEvent::Checkpoint { checkpoint_id } => {
                state.checkpoint_id = Some(checkpoint_id);
            }
            StreamEvent::Content { content } => {
                message.content.push_str(&content);
                message.is_loading = false;
            }
            StreamEvent::SearchStart { query } => {
                message.search_info = Some(SearchInfo::new([Stage::Searching], query));
                message.is_loading = false;
            }
            StreamEvent::SearchResults { urls } => {
                let info = message.search_info.get_or_insert_with(SearchInfo::default);
                info.stages.push(Stage::Reading);
                info.urls = urls;
                message.is_loading = false;
            }
            StreamEvent::SearchError { error } => {
                let info = message.search_info.get_or_insert_with(SearchInfo::default);
                info.stages.push(Stage::Error);
                info.error = Some(error);
                info.urls.clear();
                message.is_loading = false;
            }
            StreamEvent::Error { message: reason } => {
                tracing::warn!(name: "chat.reply.failed", message_id = id, reason = %reason, "Backend reported a failed reply");
                message.content = REPLY_FAILED.to_string();
                message.is_loading = false;
            }
            StreamEvent::End => {
                if let Some(info) = message.search_info.as_mut() {
                    if !info.stages.is_empty() {
                        info.stages.push(Stage::Writing);
                    }
                }
                message.is_loading = false;
            }
        }
        Ok(())
    }
}
