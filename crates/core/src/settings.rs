//! Theme settings

use crate::theme::Theme;
use serde::{Deserialize, Serialize};

/// Where the theme preference lives and how it is shown on the page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    /// Key of the preference in the persistent store
    pub storage_key: String,
    /// Class toggled on the document root while the dark theme is active
    pub class_name: String,
    /// Theme used when nothing usable is stored
    pub default_theme: Theme,
}

impl ThemeSettings {
    pub const DEFAULT_STORAGE_KEY: &'static str = "theme";
    pub const DEFAULT_CLASS_NAME: &'static str = "dark";
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            storage_key: Self::DEFAULT_STORAGE_KEY.to_string(),
            class_name: Self::DEFAULT_CLASS_NAME.to_string(),
            default_theme: Theme::Dark,
        }
    }
}
