//! Reproductor core: theme preference and navigation state
//!
//! Everything in this crate is independent of the browser. Access to the
//! page and to persistent storage goes through the [`PreferenceStore`] and
//! [`StyleApplier`] traits, which the frontend implements on top of
//! `web-sys`.

pub mod controller;
pub mod error;
pub mod menu;
pub mod preference;
pub mod settings;
pub mod style;
pub mod theme;

pub use controller::ThemeController;
pub use error::{Error, Result};
pub use menu::MobileMenu;
pub use preference::{MemoryPreferenceStore, PreferenceStore};
pub use settings::ThemeSettings;
pub use style::{ClassSet, StyleApplier};
pub use theme::Theme;
