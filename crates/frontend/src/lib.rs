//! Reproductor browser shell
//!
//! Root component of the music player: theme switching backed by
//! `localStorage`, the mobile navigation drawer, and the layout that
//! composes the sidebar, the routed page and the player controls.

pub mod app;
pub mod browser;
pub mod components;
pub mod config;
pub mod logging;
pub mod menu;
pub mod routes;
pub mod theme;

pub use app::App;
pub use browser::{DocumentClassApplier, LocalStorageStore};
pub use config::AppConfig;
pub use theme::{Theme, ThemeContext, ThemeProvider};
