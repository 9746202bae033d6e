//! Chat header component.

use leptos::prelude::*;

/// Brand shown in the header.
pub const BRAND: &str = "Kora 2.0";

/// Navigation entries and whether each is the active page.
const NAV_LINKS: [(&str, bool); 4] = [
    ("HOME", false),
    ("CHAT", true),
    ("CONTACTS", false),
    ("SETTINGS", false),
];

/// Static navigation chrome.
#[component]
pub fn Header() -> impl IntoView {
    let links = NAV_LINKS
        .into_iter()
        .map(|(label, active)| {
            let class = if active {
                "text-white bg-white/15 text-sm px-4 py-2 font-medium hover:bg-white/20 rounded-xl \
                 transition-all duration-300 cursor-pointer backdrop-blur-sm shadow-lg"
            } else {
                "text-white/80 text-sm px-4 py-2 font-medium hover:text-white hover:bg-white/10 \
                 rounded-xl transition-all duration-300 cursor-pointer backdrop-blur-sm"
            };
            view! { <a class=class>{label}</a> }
        })
        .collect::<Vec<_>>();

    view! {
        <header class="relative flex items-center justify-between px-8 py-6 bg-gradient-to-r from-indigo-600 via-purple-600 to-pink-600 z-10">
            <div class="absolute inset-0 bg-gradient-to-r from-indigo-600/90 via-purple-600/90 to-pink-600/90"></div>
            <div class="absolute bottom-0 left-0 right-0 h-px bg-gradient-to-r from-transparent via-white/30 to-transparent"></div>

            <div class="flex items-center relative">
                <div class="absolute -left-3 top-1/2 transform -translate-y-1/2 w-2 h-8 bg-gradient-to-b from-cyan-400 to-blue-500 rounded-full opacity-90 shadow-lg animate-pulse"></div>
                <span class="font-bold text-white text-2xl tracking-tight">{BRAND}</span>
            </div>

            <nav class="flex items-center space-x-2">{links}</nav>
        </header>
    }
}
