//! Route pages

use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, Clone, PartialEq)]
struct PageProps {
    title: AttrValue,
    #[prop_or_default]
    children: Children,
}

#[function_component(Page)]
fn page(props: &PageProps) -> Html {
    html! {
        <section class="p-6">
            <h2 class="text-2xl font-bold text-gray-900 dark:text-white mb-4">{ props.title.clone() }</h2>
            <div class="text-gray-600 dark:text-gray-400">
                { props.children.clone() }
            </div>
        </section>
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <Page title="Home">
            <p>{"Pick something from your library to start listening."}</p>
        </Page>
    }
}

#[function_component(LibraryPage)]
pub fn library_page() -> Html {
    html! {
        <Page title="Library">
            <p>{"Your library is empty."}</p>
        </Page>
    }
}

#[function_component(PlaylistsPage)]
pub fn playlists_page() -> Html {
    html! {
        <Page title="Playlists">
            <p>{"No playlists yet."}</p>
        </Page>
    }
}

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <Page title="Page not found">
            <Link<Route> to={Route::Home} classes={classes!("text-blue-600", "dark:text-blue-400", "hover:underline")}>
                {"Back to Home"}
            </Link<Route>>
        </Page>
    }
}
