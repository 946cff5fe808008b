mod player_controls;
mod sidebar;
mod theme_toggle;

pub mod pages;

pub use player_controls::PlayerControls;
pub use sidebar::Sidebar;
pub use theme_toggle::ThemeToggle;
