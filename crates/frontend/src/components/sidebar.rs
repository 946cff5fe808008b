//! Navigation sidebar

use crate::menu::use_mobile_menu_close;
use crate::routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

const LINK_BASE: &str = "flex items-center gap-3 px-4 py-2 rounded-lg text-sm font-medium transition-colors";
const LINK_ACTIVE: &str = "bg-blue-50 dark:bg-gray-800 text-blue-600 dark:text-blue-400";
const LINK_IDLE: &str = "text-gray-600 dark:text-gray-400 hover:bg-gray-100 dark:hover:bg-gray-800 hover:text-gray-900 dark:hover:text-gray-100";

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let current = use_route::<Route>();
    let close_menu = use_mobile_menu_close();

    html! {
        <nav class="h-full w-64 flex flex-col gap-1 p-4 bg-white dark:bg-gray-900 border-r border-gray-200 dark:border-gray-700">
            { for Route::NAVIGATION.into_iter().map(|route| {
                let active = current == Some(route);
                let onclick = close_menu.reform(|_: MouseEvent| ());
                html! {
                    // Following a link also dismisses the mobile drawer
                    <div {onclick}>
                        <Link<Route>
                            to={route}
                            classes={classes!(LINK_BASE, if active { LINK_ACTIVE } else { LINK_IDLE })}
                        >
                            { route.label() }
                        </Link<Route>>
                    </div>
                }
            }) }
        </nav>
    }
}
