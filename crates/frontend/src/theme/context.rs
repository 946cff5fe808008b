//! Theme context definition

use crate::browser::{DocumentClassApplier, LocalStorageStore};
use reproductor_core::{Theme, ThemeController, ThemeSettings};
use std::rc::Rc;
use yew::prelude::*;

pub type BrowserThemeController = ThemeController<LocalStorageStore, DocumentClassApplier>;

#[derive(Clone, Debug)]
pub struct ThemeContext {
    controller: BrowserThemeController,
}

impl ThemeContext {
    /// Read the saved preference and apply it to the document root
    pub fn initialize(settings: ThemeSettings) -> Self {
        Self {
            controller: ThemeController::initialize(
                LocalStorageStore,
                DocumentClassApplier,
                settings,
            ),
        }
    }

    pub const fn theme(&self) -> Theme {
        self.controller.theme()
    }

    pub const fn is_dark(&self) -> bool {
        self.controller.is_dark()
    }
}

// Storage and document handles are stateless; only the theme matters.
impl PartialEq for ThemeContext {
    fn eq(&self, other: &Self) -> bool {
        self.theme() == other.theme() && self.controller.settings() == other.controller.settings()
    }
}

pub enum ThemeAction {
    Toggle,
}

impl Reducible for ThemeContext {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ThemeAction::Toggle => {
                let mut controller = self.controller.clone();
                let theme = controller.toggle();
                tracing::debug!(%theme, "Theme action: toggle");
                Rc::new(Self { controller })
            }
        }
    }
}
