//! Icon button with visual variants.

use leptos::prelude::*;

/// Icon button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Muted button tinted indigo on hover.
    #[default]
    Ghost,
    /// Muted button tinted purple on hover.
    GhostAccent,
    /// Gradient call-to-action button.
    Gradient,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Ghost => {
                "p-3 rounded-xl text-slate-500 hover:text-indigo-600 hover:bg-indigo-50 \
                 dark:hover:bg-indigo-900/30 transition-all duration-300"
            }
            Self::GhostAccent => {
                "p-3 rounded-xl text-slate-500 hover:text-purple-600 hover:bg-purple-50 \
                 dark:hover:bg-purple-900/30 transition-all duration-300"
            }
            Self::Gradient => {
                "bg-gradient-to-r from-indigo-500 via-purple-500 to-pink-500 \
                 hover:from-indigo-600 hover:via-purple-600 hover:to-pink-600 rounded-xl p-3 ml-3 \
                 shadow-lg transition-all duration-300 group transform hover:scale-105"
            }
        }
    }
}

/// Button whose only content is an icon.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <IconButton variant=ButtonVariant::Gradient button_type="submit" label="Send">
///         <SendIcon class="text-white rotate-45" />
///     </IconButton>
/// }
/// ```
#[component]
pub fn IconButton(
    /// Button variant.
    #[prop(default = ButtonVariant::Ghost)]
    variant: ButtonVariant,
    /// Button type attribute.
    #[prop(default = "button")]
    button_type: &'static str,
    /// Accessible label.
    label: &'static str,
    /// Button content.
    children: Children,
) -> impl IntoView {
    view! {
        <button type=button_type class={variant.classes()} aria-label=label>
            {children()}
        </button>
    }
}
