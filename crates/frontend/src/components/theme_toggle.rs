//! Dark/light switch button

use crate::theme::{use_is_dark, use_theme_toggle};
use yew::prelude::*;

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let is_dark = use_is_dark();
    let on_toggle = use_theme_toggle();
    let onclick = on_toggle.reform(|_: MouseEvent| ());

    let label = if is_dark {
        "Switch to light mode"
    } else {
        "Switch to dark mode"
    };

    html! {
        <button
            type="button"
            {onclick}
            aria-label={label}
            title={label}
            class="p-2 rounded-lg text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors"
        >
            if is_dark {
                // Sun
                <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z"></path>
                </svg>
            } else {
                // Moon
                <svg class="w-5 h-5" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z"></path>
                </svg>
            }
        </button>
    }
}
