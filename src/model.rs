//! Chat message and search-progress data model.
//!
//! These are the immutable snapshots handed to the view layer. The JSON shape
//! mirrors what the browser client exchanges (`isUser`, `isLoading`,
//! `searchInfo`), so a snapshot can be round-tripped through the HTTP API
//! without translation.
//!
//! # Example
//!
//! ```rust
//! use kora_chat::model::{Message, SearchInfo, Stage};
//!
//! let info = SearchInfo::new([Stage::Searching, Stage::Reading], "cats")
//!     .with_urls(["a.com", "b.com"]);
//! let message = Message::assistant(2, "").with_search_info(info);
//!
//! let stages = message.search_info.as_ref().unwrap().stage_set();
//! assert!(stages.contains(Stage::Reading));
//! assert!(!stages.contains(Stage::Writing));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Message kind used for ordinary chat turns.
pub const DEFAULT_MESSAGE_TYPE: &str = "message";

/// One stage of the search-progress vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// A web search has been issued.
    Searching,
    /// Search results are being read.
    Reading,
    /// The answer is being written.
    Writing,
    /// The search failed.
    Error,
}

impl Stage {
    /// All stages, in display order.
    pub const ALL: [Stage; 4] = [
        Stage::Searching,
        Stage::Reading,
        Stage::Writing,
        Stage::Error,
    ];

    /// Wire name of this stage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Searching => "searching",
            Self::Reading => "reading",
            Self::Writing => "writing",
            Self::Error => "error",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Self::Searching => 1,
            Self::Reading => 1 << 1,
            Self::Writing => 1 << 2,
            Self::Error => 1 << 3,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not part of the stage vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search stage: {0}")]
pub struct UnknownStage(pub String);

impl FromStr for Stage {
    type Err = UnknownStage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|stage| stage.as_str() == s)
            .ok_or_else(|| UnknownStage(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for Stage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Membership set over [`Stage`].
///
/// The `stages` sequence carried by [`SearchInfo`] is a membership signal, not
/// a pipeline: order and duplicates in the sequence carry no meaning for
/// rendering. Iteration always yields stages in display order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StageSet(u8);

impl StageSet {
    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Whether `stage` is a member.
    #[must_use]
    pub fn contains(self, stage: Stage) -> bool {
        self.0 & stage.bit() != 0
    }

    /// Add `stage` to the set.
    pub fn insert(&mut self, stage: Stage) {
        self.0 |= stage.bit();
    }

    /// Whether no stage is present.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members in display order (searching, reading, writing, error).
    pub fn iter(self) -> impl Iterator<Item = Stage> {
        Stage::ALL.into_iter().filter(move |stage| self.contains(*stage))
    }
}

impl FromIterator<Stage> for StageSet {
    fn from_iter<I: IntoIterator<Item = Stage>>(iter: I) -> Self {
        let mut set = Self::empty();
        for stage in iter {
            set.insert(stage);
        }
        set
    }
}

/// Search progress attached to an assistant message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchInfo {
    /// Stages reached so far. Duplicates and omissions are both legal.
    #[serde(default, deserialize_with = "deserialize_stages")]
    pub stages: Vec<Stage>,
    /// Query text sent to the search backend.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub query: String,
    /// Source URLs being read, in the order the backend returned them.
    #[serde(default, deserialize_with = "deserialize_urls")]
    pub urls: Vec<String>,
    /// Error text reported by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchInfo {
    /// Create search info with the given stages and query.
    #[must_use]
    pub fn new(stages: impl IntoIterator<Item = Stage>, query: impl Into<String>) -> Self {
        Self {
            stages: stages.into_iter().collect(),
            query: query.into(),
            urls: Vec::new(),
            error: None,
        }
    }

    /// Replace the URL list.
    #[must_use]
    pub fn with_urls<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.urls = urls.into_iter().map(Into::into).collect();
        self
    }

    /// Set the error text.
    #[must_use]
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Stage membership, ignoring order and duplicates.
    #[must_use]
    pub fn stage_set(&self) -> StageSet {
        self.stages.iter().copied().collect()
    }
}

/// A single chat turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Stable identifier, unique within a conversation.
    pub id: u64,
    /// Message text. May still be streaming in.
    #[serde(default)]
    pub content: String,
    /// Whether the user authored this message.
    #[serde(default)]
    pub is_user: bool,
    /// Message kind.
    #[serde(rename = "type", default = "default_message_type")]
    pub kind: String,
    /// Whether the assistant is still producing this message.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_loading: bool,
    /// Search progress for this message, if a search is involved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_info: Option<SearchInfo>,
}

fn default_message_type() -> String {
    DEFAULT_MESSAGE_TYPE.to_string()
}

impl Message {
    /// A message authored by the user.
    #[must_use]
    pub fn user(id: u64, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            is_user: true,
            kind: default_message_type(),
            is_loading: false,
            search_info: None,
        }
    }

    /// A message authored by the assistant.
    #[must_use]
    pub fn assistant(id: u64, content: impl Into<String>) -> Self {
        Self {
            is_user: false,
            ..Self::user(id, content)
        }
    }

    /// An empty assistant message waiting for its first stream event.
    #[must_use]
    pub fn pending_assistant(id: u64) -> Self {
        Self::assistant(id, "")
            .loading(true)
            .with_search_info(SearchInfo::default())
    }

    /// Set the loading flag.
    #[must_use]
    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    /// Attach search progress.
    #[must_use]
    pub fn with_search_info(mut self, info: SearchInfo) -> Self {
        self.search_info = Some(info);
        self
    }
}

/// Extract string URLs from an arbitrary JSON value.
///
/// Anything other than an array yields no URLs; non-string elements are
/// skipped.
pub(crate) fn urls_from_value(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(url) => Some(url),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn deserialize_urls<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(urls_from_value(Value::deserialize(deserializer)?))
}

fn deserialize_stages<'de, D>(deserializer: D) -> Result<Vec<Stage>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };

    Ok(items
        .iter()
        .filter_map(Value::as_str)
        .filter_map(|raw| match raw.parse::<Stage>() {
            Ok(stage) => Some(stage),
            Err(err) => {
                tracing::debug!(name: "search_info.stage.ignored", error = %err, "Ignoring unknown stage");
                None
            }
        })
        .collect())
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stage_set_ignores_order_and_duplicates() {
        let info = SearchInfo::new(
            [Stage::Writing, Stage::Searching, Stage::Writing],
            "rust",
        );
        let set = info.stage_set();

        assert!(set.contains(Stage::Searching));
        assert!(set.contains(Stage::Writing));
        assert!(!set.contains(Stage::Reading));
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![Stage::Searching, Stage::Writing]
        );
    }

    #[test]
    fn test_message_uses_client_field_names() {
        let message = Message::pending_assistant(7);
        let json = serde_json::to_value(&message).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["isUser"], false);
        assert_eq!(json["isLoading"], true);
        assert_eq!(json["type"], "message");
        assert_eq!(json["searchInfo"]["stages"], json!([]));
    }

    #[test]
    fn test_message_deserializes_optional_fields() {
        let message: Message = serde_json::from_value(json!({
            "id": 3,
            "content": "hello",
            "isUser": true,
            "type": "message"
        }))
        .unwrap();

        assert!(message.is_user);
        assert!(!message.is_loading);
        assert!(message.search_info.is_none());
    }

    #[test]
    fn test_malformed_urls_become_empty() {
        let info: SearchInfo = serde_json::from_value(json!({
            "stages": ["reading"],
            "query": "q",
            "urls": "not-a-list"
        }))
        .unwrap();

        assert_eq!(info.stages, vec![Stage::Reading]);
        assert!(info.urls.is_empty());
    }

    #[test]
    fn test_non_string_urls_are_skipped() {
        let info: SearchInfo = serde_json::from_value(json!({
            "stages": ["reading"],
            "query": "q",
            "urls": ["a.com", 42, null, "a.com"]
        }))
        .unwrap();

        assert_eq!(info.urls, vec!["a.com", "a.com"]);
    }

    #[test]
    fn test_unknown_stages_are_dropped() {
        let info: SearchInfo = serde_json::from_value(json!({
            "stages": ["thinking", "searching"],
            "query": "q",
            "urls": []
        }))
        .unwrap();

        assert_eq!(info.stages, vec![Stage::Searching]);
    }

    #[test]
    fn test_missing_stages_default_to_empty() {
        let info: SearchInfo = serde_json::from_value(json!({ "query": "q" })).unwrap();
        assert!(info.stage_set().is_empty());
    }

    #[test]
    fn test_stage_from_str() {
        assert_eq!("error".parse::<Stage>().unwrap(), Stage::Error);
        assert!("Error".parse::<Stage>().is_err());
    }
}
