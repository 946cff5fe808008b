//! Theme management module

mod context;
mod provider;

pub use context::{BrowserThemeController, ThemeAction, ThemeContext};
pub use provider::{ThemeProvider, ThemeProviderProps};
pub use reproductor_core::Theme;

use yew::prelude::*;

/// Hook to access theme context
#[hook]
pub fn use_theme() -> UseReducerHandle<ThemeContext> {
    use_context::<UseReducerHandle<ThemeContext>>()
        .expect("Theme context not found. Make sure to wrap your app with ThemeProvider")
}

/// Hook to check whether the dark theme is active
#[hook]
pub fn use_is_dark() -> bool {
    let theme_ctx = use_theme();
    theme_ctx.is_dark()
}

/// Hook to get theme toggle callback
#[hook]
pub fn use_theme_toggle() -> Callback<()> {
    let theme_ctx = use_theme();
    Callback::from(move |()| {
        theme_ctx.dispatch(ThemeAction::Toggle);
    })
}
