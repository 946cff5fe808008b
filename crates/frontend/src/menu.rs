//! Mobile navigation menu context

use reproductor_core::MobileMenu;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuContext {
    menu: MobileMenu,
}

impl MenuContext {
    pub const fn is_open(&self) -> bool {
        self.menu.is_open()
    }
}

pub enum MenuAction {
    Toggle,
    Close,
}

impl Reducible for MenuContext {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut menu = self.menu;
        match action {
            MenuAction::Toggle => {
                menu.toggle();
                tracing::debug!(open = menu.is_open(), "Menu action: toggle");
            }
            MenuAction::Close => {
                // Skip the re-render when already closed
                if !menu.is_open() {
                    tracing::debug!("Menu action: close, already closed");
                    return self;
                }
                menu.close();
                tracing::debug!("Menu action: close");
            }
        }
        Rc::new(Self { menu })
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct MobileMenuProviderProps {
    pub children: Children,
}

#[function_component(MobileMenuProvider)]
pub fn mobile_menu_provider(props: &MobileMenuProviderProps) -> Html {
    let menu = use_reducer(MenuContext::default);

    html! {
        <ContextProvider<UseReducerHandle<MenuContext>> context={menu}>
            { props.children.clone() }
        </ContextProvider<UseReducerHandle<MenuContext>>>
    }
}

#[hook]
pub fn use_mobile_menu() -> UseReducerHandle<MenuContext> {
    use_context::<UseReducerHandle<MenuContext>>()
        .expect("Menu context not found. Make sure to wrap your app with MobileMenuProvider")
}

#[hook]
pub fn use_mobile_menu_toggle() -> Callback<()> {
    let menu = use_mobile_menu();
    Callback::from(move |()| menu.dispatch(MenuAction::Toggle))
}

#[hook]
pub fn use_mobile_menu_close() -> Callback<()> {
    let menu = use_mobile_menu();
    Callback::from(move |()| menu.dispatch(MenuAction::Close))
}
