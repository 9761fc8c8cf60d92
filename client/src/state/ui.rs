//! Local UI chrome state (modal dialogs).
//!
//! DESIGN
//! ======
//! Pages raise named modal events; unknown names are dropped so links can be
//! added to templates before the dialog they target exists.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Modal dialogs reachable through [`UiState::open_modal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalEvent {
    About,
}

impl ModalEvent {
    pub const ABOUT: &'static str = "about";

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            Self::ABOUT => Some(Self::About),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub about_open: bool,
}

impl UiState {
    /// Show the dialog named by `name`; unrecognized names are ignored.
    pub fn open_modal(&mut self, name: &str) {
        if let Some(ModalEvent::About) = ModalEvent::from_name(name) {
            self.about_open = true;
        }
    }

    pub fn close_about(&mut self) {
        self.about_open = false;
    }
}
