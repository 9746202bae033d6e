//! Search-progress indicator.
//!
//! [`SearchStagesPlan`] decides what to show from a [`SearchInfo`]; the
//! [`SearchStages`] component only renders the plan. Each stage is a
//! membership check against the stage set, so several stages can be visible
//! at once and they always appear in the order searching, reading, writing,
//! error.

use leptos::prelude::*;

use crate::model::{SearchInfo, Stage};
use crate::ui::components::SearchIcon;

/// Error text used when the backend did not supply one.
pub const ERROR_FALLBACK: &str = "An error occurred during search.";

/// The "searching" block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchingBlock {
    /// Query shown verbatim.
    pub query: String,
    /// Draw a connector down to the reading block.
    pub connects_to_reading: bool,
}

/// The "reading sources" block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadingBlock {
    /// URLs in input order, duplicates kept.
    pub urls: Vec<String>,
}

/// What a [`SearchStages`] view shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStagesPlan {
    pub searching: Option<SearchingBlock>,
    pub reading: Option<ReadingBlock>,
    pub writing: bool,
    /// Error text to display, already resolved against [`ERROR_FALLBACK`].
    pub error: Option<String>,
}

impl SearchStagesPlan {
    /// Build the plan, or `None` when nothing should render.
    #[must_use]
    pub fn from_info(info: Option<&SearchInfo>) -> Option<Self> {
        let info = info?;
        let stages = info.stage_set();
        if stages.is_empty() {
            return None;
        }

        let searching = stages.contains(Stage::Searching).then(|| SearchingBlock {
            query: info.query.clone(),
            connects_to_reading: stages.contains(Stage::Reading),
        });
        let reading = stages.contains(Stage::Reading).then(|| ReadingBlock {
            urls: info.urls.clone(),
        });
        let error = stages.contains(Stage::Error).then(|| {
            info.error
                .as_deref()
                .filter(|text| !text.is_empty())
                .unwrap_or(ERROR_FALLBACK)
                .to_string()
        });

        Some(Self {
            searching,
            reading,
            writing: stages.contains(Stage::Writing),
            error,
        })
    }
}

/// Vertical timeline of search stages shown above an assistant bubble.
#[component]
pub fn SearchStages(
    /// Search progress; nothing renders when absent.
    #[prop(optional)]
    search_info: Option<SearchInfo>,
) -> impl IntoView {
    SearchStagesPlan::from_info(search_info.as_ref()).map(|plan| {
        view! {
            <div class="mb-4 mt-2 relative pl-4">
                <div class="flex flex-col space-y-4 text-sm text-slate-700 dark:text-slate-300">
                    {plan.searching.map(|block| view! { <SearchingStage block=block /> })}
                    {plan.reading.map(|block| view! { <ReadingStage block=block /> })}
                    {plan.writing.then(|| view! { <WritingStage /> })}
                    {plan.error.map(|text| view! { <ErrorStage text=text /> })}
                </div>
            </div>
        }
    })
}

#[component]
fn SearchingStage(block: SearchingBlock) -> impl IntoView {
    let connector = block.connects_to_reading.then(|| {
        view! {
            <div
                data-connector="searching-reading"
                class="absolute -left-[6px] top-4 w-0.5 h-[calc(100%+1rem)] bg-gradient-to-b from-indigo-300 to-purple-300"
            ></div>
        }
    });

    view! {
        <div class="relative" data-stage="searching">
            <div class="absolute -left-3 top-1 w-3 h-3 bg-gradient-to-r from-indigo-400 to-purple-400 rounded-full z-10 shadow-lg animate-pulse"></div>
            {connector}
            <div class="flex flex-col">
                <span class="font-semibold mb-2 ml-2 text-indigo-600 dark:text-indigo-400">
                    "🔍 Searching the web"
                </span>
                <div class="flex flex-wrap gap-2 pl-2 mt-1">
                    <div class="bg-gradient-to-r from-indigo-50 to-purple-50 dark:from-indigo-900/30 dark:to-purple-900/30 text-xs px-4 py-2 rounded-xl border border-indigo-200 dark:border-indigo-700 inline-flex items-center shadow-sm">
                        <SearchIcon class="mr-2 text-indigo-500" />
                        <span data-query="">{block.query}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ReadingStage(block: ReadingBlock) -> impl IntoView {
    let sources = (!block.urls.is_empty()).then(|| {
        let chips = block
            .urls
            .into_iter()
            .map(|url| {
                view! {
                    <div
                        data-source=""
                        class="bg-gradient-to-r from-purple-50 to-pink-50 dark:from-purple-900/30 dark:to-pink-900/30 text-xs px-3 py-2 rounded-xl border border-purple-200 dark:border-purple-700 truncate max-w-[200px] transition-all duration-300 hover:scale-105 hover:shadow-md"
                    >
                        {url}
                    </div>
                }
            })
            .collect::<Vec<_>>();

        view! {
            <div class="pl-2 space-y-2">
                <div class="flex flex-wrap gap-2">{chips}</div>
            </div>
        }
    });

    view! {
        <div class="relative" data-stage="reading">
            <div class="absolute -left-3 top-1 w-3 h-3 bg-gradient-to-r from-purple-400 to-pink-400 rounded-full z-10 shadow-lg animate-pulse"></div>
            <div class="flex flex-col">
                <span class="font-semibold mb-2 ml-2 text-purple-600 dark:text-purple-400">
                    "📖 Reading sources"
                </span>
                {sources}
            </div>
        </div>
    }
}

#[component]
fn WritingStage() -> impl IntoView {
    view! {
        <div class="relative" data-stage="writing">
            <div class="absolute -left-3 top-1 w-3 h-3 bg-gradient-to-r from-pink-400 to-rose-400 rounded-full z-10 shadow-lg animate-pulse"></div>
            <span class="font-semibold pl-2 text-pink-600 dark:text-pink-400">"✍️ Writing answer"</span>
        </div>
    }
}

#[component]
fn ErrorStage(text: String) -> impl IntoView {
    view! {
        <div class="relative" data-stage="error">
            <div class="absolute -left-3 top-1 w-3 h-3 bg-gradient-to-r from-red-400 to-rose-400 rounded-full z-10 shadow-lg"></div>
            <span class="font-semibold text-red-600 dark:text-red-400">"❌ Search error"</span>
            <div class="pl-4 text-xs text-red-500 dark:text-red-400 mt-1">{text}</div>
        </div>
    }
}
