//! Typing placeholder animation.

use leptos::prelude::*;

/// Dot colour and animation delay, left to right.
const DOTS: [(&str, &str); 3] = [
    ("bg-indigo-400/70", "0ms"),
    ("bg-purple-400/70", "300ms"),
    ("bg-pink-400/70", "600ms"),
];

/// Three pulsing dots shown while an assistant reply is loading.
#[component]
pub fn PremiumTypingAnimation() -> impl IntoView {
    let dots = DOTS
        .into_iter()
        .map(|(color, delay)| {
            view! {
                <div
                    data-typing-dot=""
                    class={format!("w-2 h-2 {color} rounded-full animate-pulse")}
                    style={format!("animation-duration: 1s; animation-delay: {delay}")}
                ></div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="flex items-center" aria-hidden="true">
            <div class="flex items-center space-x-1.5">{dots}</div>
        </div>
    }
}
