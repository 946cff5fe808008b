//! Theme provider component

use super::context::ThemeContext;
use reproductor_core::ThemeSettings;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct ThemeProviderProps {
    /// Read once when the provider first renders; later changes are ignored.
    #[prop_or_default]
    pub settings: ThemeSettings,
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let settings = props.settings.clone();
    // Runs once, on first render
    let theme = use_reducer(move || ThemeContext::initialize(settings));

    html! {
        <ContextProvider<UseReducerHandle<ThemeContext>> context={theme}>
            { props.children.clone() }
        </ContextProvider<UseReducerHandle<ThemeContext>>>
    }
}
