//! Chat input bar component.
//!
//! The text field is fully controlled: its value always comes from the
//! `current_message` prop, and every keystroke is reported through
//! `set_current_message` with the field's whole text. Submitting calls
//! `on_submit` and nothing else; clearing the field is up to the parent.

use std::fmt;

use leptos::prelude::*;

use crate::ui::components::{ButtonVariant, IconButton, PaperclipIcon, SendIcon, SmileIcon};

/// Placeholder text for the empty field.
pub const INPUT_PLACEHOLDER: &str = "Type your message here...";

/// Form submission reported to the parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitEvent {
    /// Field value at the time of submission.
    pub message: String,
}

/// Forwards input-bar events to the parent's callbacks.
///
/// The component's DOM handlers delegate here, which keeps the event contract
/// usable without a browser.
#[derive(Clone, Copy)]
pub struct InputBarDriver {
    set_current_message: Callback<String>,
    on_submit: Callback<SubmitEvent>,
}

impl fmt::Debug for InputBarDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputBarDriver").finish_non_exhaustive()
    }
}

impl InputBarDriver {
    #[must_use]
    pub fn new(set_current_message: Callback<String>, on_submit: Callback<SubmitEvent>) -> Self {
        Self {
            set_current_message,
            on_submit,
        }
    }

    /// Report the field's current text.
    pub fn input(&self, field_value: impl Into<String>) {
        self.set_current_message.run(field_value.into());
    }

    /// Type `typed` one character at a time into a field showing
    /// `current_message`, reporting the cumulative value after each keystroke.
    pub fn type_text(&self, current_message: &str, typed: &str) {
        let mut field = current_message.to_string();
        for ch in typed.chars() {
            field.push(ch);
            self.input(field.clone());
        }
    }

    /// Report a submission of `current_message`.
    pub fn submit(&self, current_message: &str) {
        self.on_submit.run(SubmitEvent {
            message: current_message.to_string(),
        });
    }
}

/// Controlled message input with emoji, attachment and send buttons.
///
/// When `submit_url` / `draft_url` are given the form and field also carry
/// HTMX attributes so a server-rendered page forwards the same events over
/// HTTP.
#[component]
pub fn InputBar(
    /// Controlled field value.
    #[prop(into)]
    current_message: String,
    /// Called with the full field text after each keystroke.
    set_current_message: Callback<String>,
    /// Called when the form is submitted.
    on_submit: Callback<SubmitEvent>,
    /// HTMX endpoint receiving the submitted form.
    #[prop(optional)]
    submit_url: Option<&'static str>,
    /// HTMX swap target for the submit response.
    #[prop(optional)]
    submit_target: Option<&'static str>,
    /// HTMX endpoint receiving each keystroke.
    #[prop(optional)]
    draft_url: Option<&'static str>,
) -> impl IntoView {
    let driver = InputBarDriver::new(set_current_message, on_submit);
    let submitted = current_message.clone();
    let keystroke_trigger = draft_url.map(|_| "input changed");

    view! {
        <form
            class="p-6 bg-gradient-to-r from-slate-50 to-blue-50 dark:from-slate-800 dark:to-slate-700 border-t border-slate-200 dark:border-slate-600"
            hx-post=submit_url
            hx-target=submit_target
            hx-swap={submit_target.map(|_| "outerHTML")}
            on:submit=move |ev| {
                ev.prevent_default();
                driver.submit(&submitted);
            }
        >
            <div class="flex items-center bg-white dark:bg-slate-700 rounded-2xl p-4 shadow-lg border border-slate-200 dark:border-slate-600 backdrop-blur-sm">
                <IconButton label="Insert emoji">
                    <SmileIcon />
                </IconButton>
                <input
                    type="text"
                    name="message"
                    autocomplete="off"
                    placeholder=INPUT_PLACEHOLDER
                    value=current_message
                    class="flex-grow px-4 py-3 bg-transparent focus:outline-none text-slate-700 dark:text-slate-200 placeholder-slate-400 dark:placeholder-slate-500 text-lg"
                    hx-post=draft_url
                    hx-trigger=keystroke_trigger
                    hx-swap={draft_url.map(|_| "none")}
                    on:input=move |ev| driver.input(event_target_value(&ev))
                />
                <IconButton variant=ButtonVariant::GhostAccent label="Attach file">
                    <PaperclipIcon />
                </IconButton>
                <IconButton variant=ButtonVariant::Gradient button_type="submit" label="Send message">
                    <SendIcon class="text-white transform rotate-45 group-hover:scale-110 transition-transform duration-300" />
                </IconButton>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_html;
    use std::sync::{Arc, Mutex};

    fn recorder<T: Clone + Send + Sync + 'static>() -> (Callback<T>, Arc<Mutex<Vec<T>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        let callback = Callback::new(move |value: T| sink.lock().unwrap().push(value));
        (callback, calls)
    }

    #[test]
    fn test_typing_reports_cumulative_value_per_keystroke() {
        let owner = Owner::new();
        owner.with(|| {
            let (set_current_message, changes) = recorder::<String>();
            let (on_submit, submits) = recorder::<SubmitEvent>();
            let driver = InputBarDriver::new(set_current_message, on_submit);

            driver.type_text("", "hi");

            assert_eq!(*changes.lock().unwrap(), vec!["h", "hi"]);
            assert!(submits.lock().unwrap().is_empty());
        });
    }

    #[test]
    fn test_typing_continues_from_controlled_value() {
        let owner = Owner::new();
        owner.with(|| {
            let (set_current_message, changes) = recorder::<String>();
            let (on_submit, _) = recorder::<SubmitEvent>();
            let driver = InputBarDriver::new(set_current_message, on_submit);

            driver.type_text("ok", "!");

            assert_eq!(*changes.lock().unwrap(), vec!["ok!"]);
        });
    }

    #[test]
    fn test_submit_only_notifies_parent() {
        let owner = Owner::new();
        owner.with(|| {
            let (set_current_message, changes) = recorder::<String>();
            let (on_submit, submits) = recorder::<SubmitEvent>();
            let driver = InputBarDriver::new(set_current_message, on_submit);

            driver.submit("hello");

            assert_eq!(
                *submits.lock().unwrap(),
                vec![SubmitEvent {
                    message: "hello".to_string()
                }]
            );
            // The field is never cleared from inside the component.
            assert!(changes.lock().unwrap().is_empty());
        });
    }

    #[test]
    fn test_renders_controlled_value() {
        let html = render_html(|| {
            view! {
                <InputBar
                    current_message="draft text"
                    set_current_message=Callback::new(|_: String| {})
                    on_submit=Callback::new(|_: SubmitEvent| {})
                />
            }
        });

        assert!(html.contains(r#"value="draft text""#));
        assert!(html.contains(INPUT_PLACEHOLDER));
        assert!(html.contains(r#"type="submit""#));
        assert!(!html.contains("hx-post"));
    }

    #[test]
    fn test_htmx_wiring_is_optional() {
        let html = render_html(|| {
            view! {
                <InputBar
                    current_message=""
                    set_current_message=Callback::new(|_: String| {})
                    on_submit=Callback::new(|_: SubmitEvent| {})
                    submit_url="/api/chat"
                    submit_target="#chat-body"
                    draft_url="/api/draft"
                />
            }
        });

        assert!(html.contains(r#"hx-post="/api/chat""#));
        assert!(html.contains(r#"hx-post="/api/draft""#));
        assert!(html.contains(r#"hx-trigger="input changed""#));
    }
}
