//! Chat stream events.
//!
//! The answering backend reports progress as server-sent events whose JSON
//! payload carries a `type` tag:
//!
//! ```text
//! data: {"type": "checkpoint", "checkpoint_id": "..."}
//! data: {"type": "search_start", "query": "..."}
//! data: {"type": "search_results", "urls": ["..."]}
//! data: {"type": "content", "content": "..."}
//! data: {"type": "end"}
//! ```
//!
//! [`StreamEvent`] decodes those payloads; the chat store turns them into
//! message and search-progress updates.
//!
//! # Example
//!
//! ```rust
//! use kora_chat::stream::StreamEvent;
//!
//! let event = StreamEvent::parse_sse(r#"data: {"type": "content", "content": "Hi"}"#).unwrap();
//! assert_eq!(event, StreamEvent::Content { content: "Hi".to_string() });
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::StreamEventError;
use crate::model::urls_from_value;

/// SSE field prefix for event payloads.
const DATA_PREFIX: &str = "data:";

/// Progress event for one assistant reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    /// Conversation checkpoint assigned by the backend.
    Checkpoint {
        /// Identifier used to continue the conversation.
        checkpoint_id: String,
    },

    /// A fragment of answer text.
    Content {
        /// Text to append.
        content: String,
    },

    /// A web search was issued.
    SearchStart {
        /// Query text.
        #[serde(default)]
        query: String,
    },

    /// Search results arrived.
    SearchResults {
        /// Source URLs. Accepts an array or a JSON-encoded array string.
        #[serde(default, deserialize_with = "deserialize_result_urls")]
        urls: Vec<String>,
    },

    /// The search failed.
    SearchError {
        /// Error text shown to the user.
        #[serde(default)]
        error: String,
    },

    /// The whole reply failed.
    Error {
        /// Backend error message.
        #[serde(default)]
        message: String,
    },

    /// The reply is complete.
    End,
}

impl StreamEvent {
    /// Decode a single event from an SSE `data:` line or a bare JSON payload.
    pub fn parse_sse(line: &str) -> Result<Self, StreamEventError> {
        let line = line.trim();
        let payload = line
            .strip_prefix(DATA_PREFIX)
            .map_or(line, str::trim_start);

        if payload.is_empty() {
            return Err(StreamEventError::Empty);
        }

        Ok(serde_json::from_str(payload)?)
    }

    /// Decode every event in a request body.
    ///
    /// A body containing `data:` lines is treated as an SSE transcript and
    /// each data line is decoded in order; other lines are ignored. Any other
    /// body must be a single JSON event.
    pub fn parse_batch(body: &str) -> Result<Vec<Self>, StreamEventError> {
        let data_lines: Vec<&str> = body
            .lines()
            .map(str::trim)
            .filter(|line| line.starts_with(DATA_PREFIX))
            .collect();

        if data_lines.is_empty() {
            return Ok(vec![Self::parse_sse(body)?]);
        }

        data_lines.into_iter().map(Self::parse_sse).collect()
    }

    /// Event name for logging.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Checkpoint { .. } => "checkpoint",
            Self::Content { .. } => "content",
            Self::SearchStart { .. } => "search_start",
            Self::SearchResults { .. } => "search_results",
            Self::SearchError { .. } => "search_error",
            Self::Error { .. } => "error",
            Self::End => "end",
        }
    }
}

fn deserialize_result_urls<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Value::deserialize(deserializer)? {
        Value::String(encoded) => serde_json::from_str(&encoded).unwrap_or(Value::Null),
        other => other,
    };
    Ok(urls_from_value(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_data_line() {
        let event =
            StreamEvent::parse_sse(r#"data: {"type": "search_start", "query": "cats"}"#).unwrap();
        assert_eq!(
            event,
            StreamEvent::SearchStart {
                query: "cats".to_string()
            }
        );
    }

    #[test]
    fn test_parse_bare_json() {
        let event = StreamEvent::parse_sse(r#"{"type": "end"}"#).unwrap();
        assert_eq!(event, StreamEvent::End);
    }

    #[test]
    fn test_search_results_accepts_encoded_array() {
        let event = StreamEvent::parse_sse(
            r#"data: {"type": "search_results", "urls": "[\"a.com\", \"b.com\"]"}"#,
        )
        .unwrap();
        assert_eq!(
            event,
            StreamEvent::SearchResults {
                urls: vec!["a.com".to_string(), "b.com".to_string()]
            }
        );
    }

    #[test]
    fn test_search_results_with_garbage_urls() {
        let event =
            StreamEvent::parse_sse(r#"{"type": "search_results", "urls": "nope"}"#).unwrap();
        assert_eq!(event, StreamEvent::SearchResults { urls: Vec::new() });
    }

    #[test]
    fn test_empty_payload_is_rejected() {
        assert!(matches!(
            StreamEvent::parse_sse("data:   "),
            Err(StreamEventError::Empty)
        ));
    }

    #[test]
    fn test_unknown_type_is_malformed() {
        assert!(matches!(
            StreamEvent::parse_sse(r#"{"type": "telemetry"}"#),
            Err(StreamEventError::Malformed(_))
        ));
    }

    #[test]
    fn test_parse_batch_transcript() {
        let body = "data: {\"type\": \"checkpoint\", \"checkpoint_id\": \"abc\"}\n\n\
                    data: {\"type\": \"content\", \"content\": \"Hel\"}\n\n\
                    data: {\"type\": \"end\"}\n\n";
        let events = StreamEvent::parse_batch(body).unwrap();

        assert_eq!(events.len(), 3);
        assert_eq!(events[0].kind(), "checkpoint");
        assert_eq!(events[2], StreamEvent::End);
    }

    #[test]
    fn test_parse_batch_single_json_body() {
        let body = "{\n  \"type\": \"search_error\",\n  \"error\": \"timeout\"\n}";
        let events = StreamEvent::parse_batch(body).unwrap();
        assert_eq!(
            events,
            vec![StreamEvent::SearchError {
                error: "timeout".to_string()
            }]
        );
    }
}
