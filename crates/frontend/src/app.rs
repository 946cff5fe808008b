use crate::components::{PlayerControls, Sidebar, ThemeToggle};
use crate::config::AppConfig;
use crate::menu::{MobileMenuProvider, use_mobile_menu, use_mobile_menu_close, use_mobile_menu_toggle};
use crate::routes::{Route, switch};
use crate::theme::ThemeProvider;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ThemeProvider>
            <MobileMenuProvider>
                <BrowserRouter>
                    <AppShell />
                </BrowserRouter>
            </MobileMenuProvider>
        </ThemeProvider>
    }
}

#[function_component(AppShell)]
fn app_shell() -> Html {
    let menu = use_mobile_menu();
    let on_menu_toggle = use_mobile_menu_toggle().reform(|_: MouseEvent| ());
    let on_menu_close = use_mobile_menu_close().reform(|_: MouseEvent| ());
    let menu_open = menu.is_open();

    html! {
        <div class="h-screen flex flex-col bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100">
            // Header
            <header class="flex justify-between items-center h-16 px-4 bg-gray-50 dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
                <div class="flex items-center gap-3">
                    <button
                        id="mobile-menu-button"
                        type="button"
                        onclick={on_menu_toggle}
                        class="md:hidden p-2 rounded-lg text-gray-600 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700"
                        aria-label={if menu_open { "Close menu" } else { "Open menu" }}
                        aria-expanded={menu_open.to_string()}
                    >
                        <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            if menu_open {
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"></path>
                            } else {
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"></path>
                            }
                        </svg>
                    </button>
                    <h1 class="text-xl font-bold bg-gradient-to-r from-blue-600 to-purple-600 bg-clip-text text-transparent">
                        { AppConfig::TITLE }
                    </h1>
                </div>
                <ThemeToggle />
            </header>

            <div class="flex flex-1 overflow-hidden">
                // Sidebar: always shown on wide screens, drawer on narrow ones
                <aside class="hidden md:block">
                    <Sidebar />
                </aside>
                if menu_open {
                    <div id="mobile-menu" class="md:hidden fixed inset-0 z-40 flex">
                        <div class="relative z-50">
                            <Sidebar />
                        </div>
                        <div id="mobile-menu-backdrop" class="flex-1 bg-black/50" onclick={on_menu_close}></div>
                    </div>
                }

                // Router outlet
                <main class="flex-1 overflow-y-auto">
                    <Switch<Route> render={switch} />
                </main>
            </div>

            <PlayerControls />
        </div>
    }
}
