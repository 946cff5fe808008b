//! Client-side routes

use crate::components::pages::{HomePage, LibraryPage, NotFoundPage, PlaylistsPage};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/library")]
    Library,
    #[at("/playlists")]
    Playlists,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Entries shown in the sidebar, in display order
    pub const NAVIGATION: [Self; 3] = [Self::Home, Self::Library, Self::Playlists];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Library => "Library",
            Self::Playlists => "Playlists",
            Self::NotFound => "Not Found",
        }
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Library => html! { <LibraryPage /> },
        Route::Playlists => html! { <PlaylistsPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
