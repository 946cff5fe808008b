//! Theme controller
//!
//! Owns the current [`Theme`] and keeps the persistent store and the page
//! root classes in step with it. Failures from either capability are logged
//! and otherwise ignored: the in-memory theme is always the source of truth
//! for the UI, and a broken store only means the choice is not remembered.

use crate::preference::PreferenceStore;
use crate::settings::ThemeSettings;
use crate::style::StyleApplier;
use crate::theme::Theme;
use tracing::{debug, warn};

#[derive(Clone, Debug)]
pub struct ThemeController<S, A> {
    store: S,
    applier: A,
    settings: ThemeSettings,
    theme: Theme,
}

impl<S, A> ThemeController<S, A>
where
    S: PreferenceStore,
    A: StyleApplier,
{
    /// Read the stored preference and apply it to the page.
    ///
    /// Only `"light"` selects the light theme under the default settings;
    /// a missing, unreadable or unrecognized value selects
    /// `settings.default_theme`. Nothing is written back to the store.
    pub fn initialize(store: S, applier: A, settings: ThemeSettings) -> Self {
        let stored = match store.load(&settings.storage_key) {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    key = %settings.storage_key,
                    error = %err,
                    "Failed to read theme preference, using default"
                );
                None
            }
        };

        let theme = Theme::from_stored(stored.as_deref(), settings.default_theme);
        let mut controller = Self {
            store,
            applier,
            settings,
            theme,
        };
        controller.apply_class();

        debug!(%theme, stored = ?stored, "Theme initialized");
        controller
    }

    pub const fn theme(&self) -> Theme {
        self.theme
    }

    pub const fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub const fn settings(&self) -> &ThemeSettings {
        &self.settings
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn applier(&self) -> &A {
        &self.applier
    }

    /// Switch to the other theme and return it
    pub fn toggle(&mut self) -> Theme {
        let next = self.theme.toggled();
        self.set(next);
        next
    }

    /// Switch to `theme`, update the page and persist the choice
    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        self.apply_class();
        self.persist();
        debug!(%theme, "Theme changed");
    }

    fn apply_class(&mut self) {
        let class = self.settings.class_name.as_str();
        let result = if self.theme.is_dark() {
            self.applier.add_class(class)
        } else {
            self.applier.remove_class(class)
        };

        if let Err(err) = result {
            warn!(%class, theme = %self.theme, error = %err, "Failed to update document class");
        }
    }

    fn persist(&mut self) {
        if let Err(err) = self
            .store
            .save(&self.settings.storage_key, self.theme.as_str())
        {
            warn!(
                key = %self.settings.storage_key,
                error = %err,
                "Failed to persist theme preference"
            );
        }
    }
}
