//! Frontend configuration

/// Application shell configuration
pub struct AppConfig;

impl AppConfig {
    /// Title shown in the header
    pub const TITLE: &'static str = "Music Player";

    /// Default log filter for the browser console
    pub const LOG_FILTER: &'static str = "info,reproductor_core=debug,reproductor_frontend=debug";
}
