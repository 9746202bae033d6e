//! Chat message list.

use leptos::prelude::*;

use super::{PremiumTypingAnimation, SearchStages};
use crate::model::Message;

/// Shown in an assistant bubble that is neither loading nor has content.
pub const WAITING_PLACEHOLDER: &str = "Waiting for response...";

/// DOM id of the message area, used as an HTMX swap target.
pub const MESSAGE_AREA_ID: &str = "message-area";

/// What goes inside a bubble.
///
/// Strict priority: loading beats content, content beats the placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BubbleBody {
    /// The typing animation.
    Typing,
    /// Message text.
    Content(String),
    /// [`WAITING_PLACEHOLDER`].
    Placeholder,
}

impl BubbleBody {
    #[must_use]
    pub fn for_message(message: &Message) -> Self {
        if message.is_loading {
            Self::Typing
        } else if message.content.is_empty() {
            Self::Placeholder
        } else {
            Self::Content(message.content.clone())
        }
    }
}

/// Scrollable list of chat bubbles, rendered in the given order.
#[component]
pub fn MessageArea(
    /// Messages in chronological order.
    messages: Vec<Message>,
) -> impl IntoView {
    let rows = messages
        .into_iter()
        .map(|message| view! { <MessageRow message=message /> })
        .collect::<Vec<_>>();

    view! {
        <div
            id=MESSAGE_AREA_ID
            class="flex-grow overflow-y-auto bg-gradient-to-br from-slate-50 via-blue-50 to-indigo-50 dark:from-slate-900 dark:via-slate-800 dark:to-slate-900 border-b border-slate-200 dark:border-slate-600"
            style="min-height: 0"
        >
            <div class="max-w-4xl mx-auto p-6">{rows}</div>
        </div>
    }
}

#[component]
fn MessageRow(message: Message) -> impl IntoView {
    let (alignment, bubble_class) = if message.is_user {
        (
            "flex justify-end mb-6 animate-slide-in",
            "rounded-2xl py-4 px-6 shadow-lg bg-gradient-to-br from-indigo-500 via-purple-500 to-pink-500 text-white rounded-br-md",
        )
    } else {
        (
            "flex justify-start mb-6 animate-slide-in",
            "rounded-2xl py-4 px-6 shadow-lg bg-white dark:bg-slate-700 text-slate-800 dark:text-slate-200 border border-slate-200 dark:border-slate-600 rounded-bl-md",
        )
    };

    let body = match BubbleBody::for_message(&message) {
        BubbleBody::Typing => view! { <PremiumTypingAnimation /> }.into_any(),
        BubbleBody::Content(text) => text.into_any(),
        BubbleBody::Placeholder => view! {
            <span class="text-slate-400 dark:text-slate-500 text-sm italic">{WAITING_PLACEHOLDER}</span>
        }
        .into_any(),
    };

    let stages = if message.is_user {
        None
    } else {
        message
            .search_info
            .map(|info| view! { <SearchStages search_info=info /> })
    };

    view! {
        <div class=alignment data-message-id={message.id.to_string()}>
            <div class="flex flex-col max-w-lg">
                {stages}
                <div class=bubble_class data-bubble="">{body}</div>
            </div>
        </div>
    }
}
