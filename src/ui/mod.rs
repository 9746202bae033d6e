//! UI components and layouts.
//!
//! This module provides Leptos SSR components for the chat client. Every
//! component is a pure function of its props: state lives in the hosting
//! application and arrives as immutable snapshots, input leaves through
//! callbacks.
//!
//! # Structure
//!
//! - [`app`]: Page shell and the HTMX-wired chat body
//! - [`components`]: Reusable buttons and icons
//! - [`chat`]: Header, message area, search stages and input bar

pub mod app;
pub mod chat;
pub mod components;

use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render a view to an HTML string inside a fresh reactive owner.
pub fn render_html<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    Owner::new().with(|| view().into_view().to_html())
}
