//! Transport controls bar

use yew::prelude::*;

const CONTROL_BUTTON: &str = "p-2 rounded-full text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-800 transition-colors";

#[function_component(PlayerControls)]
pub fn player_controls() -> Html {
    let playing = use_state(|| false);

    let on_play_pause = {
        let playing = playing.clone();
        Callback::from(move |_: MouseEvent| {
            playing.set(!*playing);
        })
    };

    html! {
        <footer class="flex items-center justify-center gap-4 h-20 px-4 bg-gray-50 dark:bg-gray-800 border-t border-gray-200 dark:border-gray-700">
            <button type="button" class={CONTROL_BUTTON} aria-label="Previous track">
                <svg class="w-5 h-5" fill="currentColor" viewBox="0 0 24 24">
                    <path d="M6 6h2v12H6zm3.5 6l8.5 6V6z"></path>
                </svg>
            </button>
            <button
                type="button"
                onclick={on_play_pause}
                class="p-3 rounded-full text-white bg-gradient-to-r from-blue-600 to-purple-600 hover:from-blue-700 hover:to-purple-700 transition-all"
                aria-label={if *playing { "Pause" } else { "Play" }}
            >
                if *playing {
                    <svg class="w-6 h-6" fill="currentColor" viewBox="0 0 24 24">
                        <path d="M6 19h4V5H6v14zm8-14v14h4V5h-4z"></path>
                    </svg>
                } else {
                    <svg class="w-6 h-6" fill="currentColor" viewBox="0 0 24 24">
                        <path d="M8 5v14l11-7z"></path>
                    </svg>
                }
            </button>
            <button type="button" class={CONTROL_BUTTON} aria-label="Next track">
                <svg class="w-5 h-5" fill="currentColor" viewBox="0 0 24 24">
                    <path d="M6 18l8.5-6L6 6v12zM16 6v12h2V6h-2z"></path>
                </svg>
            </button>
        </footer>
    }
}
