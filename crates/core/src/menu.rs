//! Mobile navigation menu state

/// Whether the navigation drawer is shown on narrow screens.
///
/// Starts closed and is never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    pub const fn new() -> Self {
        Self { open: false }
    }

    pub const fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        tracing::debug!(open = self.open, "Mobile menu toggled");
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
        tracing::debug!("Mobile menu closed");
    }
}
