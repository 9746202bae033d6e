//! Kora chat UI
//!
//! Server-rendered chat client that shows assistant replies together with a
//! live search-progress timeline (searching, reading sources, writing, error).
//!
//! # Architecture
//!
//! - **Model**: Immutable message and search-progress snapshots
//! - **Session**: Parent-owned chat store fed by keystrokes, submits and
//!   reply stream events
//! - **UI**: Leptos SSR components (header, message area, input bar)
//! - **Server**: Axum + HTMX host that renders snapshots and forwards input
//!
//! # Modules
//!
//! - [`model`]: Messages, search info and stage sets
//! - [`stream`]: Reply progress events
//! - [`session`]: Chat state store
//! - [`ui`]: View components
//! - [`server`]: HTTP routes

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]

pub mod config;
pub mod error;
pub mod model;
pub mod server;
pub mod session;
pub mod stream;
pub mod telemetry;
pub mod ui;

use std::sync::Arc;

use crate::config::AppConfig;
use session::ChatStore;

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Chat state owned by the host.
    pub store: ChatStore,
    /// Global Configuration
    pub config: Arc<AppConfig>,
}
