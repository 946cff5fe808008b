//! Browser tests, run with `wasm-pack test --headless --firefox crates/frontend`
#![cfg(target_arch = "wasm32")]

use gloo::storage::{LocalStorage, Storage};
use gloo::timers::future::TimeoutFuture;
use reproductor_core::{PreferenceStore, StyleApplier, Theme, ThemeController, ThemeSettings};
use reproductor_frontend::theme::{ThemeAction, ThemeContext, ThemeProvider, ThemeProviderProps};
use reproductor_frontend::{App, DocumentClassApplier, LocalStorageStore};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};
use yew::AppHandle;
use yew::functional::Reducible;

wasm_bindgen_test_configure!(run_in_browser);

fn reset() {
    LocalStorage::delete("theme");
    let _ = gloo::utils::document_element().class_list().remove_1("dark");
}

fn root_has_dark() -> bool {
    gloo::utils::document_element().class_list().contains("dark")
}

fn stored_theme() -> Option<String> {
    LocalStorage::raw().get_item("theme").unwrap()
}

fn mount() -> (Element, AppHandle<App>) {
    let root = gloo::utils::document().create_element("div").unwrap();
    gloo::utils::body().append_child(&root).unwrap();
    let handle = yew::Renderer::<App>::with_root(root.clone()).render();
    (root, handle)
}

fn unmount(root: &Element, handle: AppHandle<App>) {
    handle.destroy();
    root.remove();
}

// Let the scheduler flush pending renders
async fn settle() {
    TimeoutFuture::new(0).await;
}

fn click(root: &Element, selector: &str) {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .dyn_into::<HtmlElement>()
        .unwrap()
        .click();
}

fn menu_open(root: &Element) -> bool {
    root.query_selector("#mobile-menu").unwrap().is_some()
}

#[wasm_bindgen_test]
fn test_local_storage_stores_raw_strings() {
    reset();
    let mut store = LocalStorageStore;
    store.save("theme", "light").unwrap();

    assert_eq!(store.load("theme").unwrap().as_deref(), Some("light"));
    // Not JSON-encoded
    assert_eq!(stored_theme().as_deref(), Some("light"));
    reset();
}

#[wasm_bindgen_test]
fn test_document_class_applier() {
    reset();
    let mut applier = DocumentClassApplier;
    applier.add_class("dark").unwrap();
    assert!(root_has_dark());

    applier.remove_class("dark").unwrap();
    assert!(!root_has_dark());
}

#[wasm_bindgen_test]
fn test_initialize_without_preference() {
    reset();
    let controller = ThemeController::initialize(
        LocalStorageStore,
        DocumentClassApplier,
        ThemeSettings::default(),
    );

    assert!(controller.is_dark());
    assert!(root_has_dark());
    assert_eq!(stored_theme(), None);
    reset();
}

#[wasm_bindgen_test]
fn test_toggle_updates_page_and_storage() {
    reset();
    LocalStorage::raw().set_item("theme", "light").unwrap();

    let mut controller = ThemeController::initialize(
        LocalStorageStore,
        DocumentClassApplier,
        ThemeSettings::default(),
    );
    assert_eq!(controller.theme(), Theme::Light);
    assert!(!root_has_dark());

    controller.toggle();
    assert!(root_has_dark());
    assert_eq!(stored_theme().as_deref(), Some("dark"));
    reset();
}

#[wasm_bindgen_test]
fn test_theme_reducer_toggle() {
    reset();
    let context = Rc::new(ThemeContext::initialize(ThemeSettings::default()));
    assert!(context.is_dark());
    assert!(root_has_dark());

    let context = context.reduce(ThemeAction::Toggle);
    assert_eq!(context.theme(), Theme::Light);
    assert!(!root_has_dark());
    assert_eq!(stored_theme().as_deref(), Some("light"));

    let context = context.reduce(ThemeAction::Toggle);
    assert_eq!(context.theme(), Theme::Dark);
    assert!(root_has_dark());
    assert_eq!(stored_theme().as_deref(), Some("dark"));
    reset();
}

#[wasm_bindgen_test]
async fn test_app_theme_toggle_button() {
    reset();
    let (root, handle) = mount();
    settle().await;
    assert!(root_has_dark());

    click(&root, r#"button[title="Switch to light mode"]"#);
    settle().await;
    assert!(!root_has_dark());
    assert_eq!(stored_theme().as_deref(), Some("light"));
    assert!(root.query_selector(r#"button[title="Switch to dark mode"]"#).unwrap().is_some());

    unmount(&root, handle);
    reset();
}

#[wasm_bindgen_test]
async fn test_backdrop_closes_menu() {
    reset();
    let (root, handle) = mount();
    settle().await;
    assert!(!menu_open(&root));

    click(&root, "#mobile-menu-button");
    settle().await;
    assert!(menu_open(&root));

    click(&root, "#mobile-menu-backdrop");
    settle().await;
    assert!(!menu_open(&root));

    unmount(&root, handle);
    reset();
}

#[wasm_bindgen_test]
async fn test_sidebar_link_closes_menu() {
    reset();
    let (root, handle) = mount();
    settle().await;

    click(&root, "#mobile-menu-button");
    settle().await;
    assert!(menu_open(&root));

    click(&root, r#"#mobile-menu a[href="/library"]"#);
    settle().await;
    assert!(!menu_open(&root));
    // The routed page followed the link
    assert!(root.text_content().unwrap_or_default().contains("Your library is empty."));

    unmount(&root, handle);
    reset();
}

#[wasm_bindgen_test]
async fn test_menu_button_toggles_twice() {
    reset();
    let (root, handle) = mount();
    settle().await;

    click(&root, "#mobile-menu-button");
    settle().await;
    click(&root, "#mobile-menu-button");
    settle().await;
    assert!(!menu_open(&root));

    unmount(&root, handle);
    reset();
}

#[wasm_bindgen_test]
async fn test_provider_applies_settings_on_first_render() {
    reset();
    LocalStorage::delete("player.theme");
    let settings = ThemeSettings {
        storage_key: "player.theme".to_string(),
        class_name: "theme-dark".to_string(),
        default_theme: Theme::Dark,
    };
    let props = ThemeProviderProps {
        settings,
        children: Default::default(),
    };

    let root = gloo::utils::document().create_element("div").unwrap();
    gloo::utils::body().append_child(&root).unwrap();
    let handle = yew::Renderer::<ThemeProvider>::with_root_and_props(root.clone(), props).render();
    settle().await;

    let classes = gloo::utils::document_element().class_list();
    assert!(classes.contains("theme-dark"));
    assert!(!classes.contains("dark"));
    // Initialization does not write the default back
    assert_eq!(LocalStorage::raw().get_item("player.theme").unwrap(), None);

    handle.destroy();
    root.remove();
    let _ = classes.remove_1("theme-dark");
    reset();
}
