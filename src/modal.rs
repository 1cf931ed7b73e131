//! The two page modals and the fixed DOM hooks each one binds to.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::consts::{ABOUT_MODAL_ID, ABOUT_TRIGGER_SELECTOR, PROJECTS_MODAL_ID, PROJECTS_TRIGGER_SELECTOR};

/// Which modal an event or action refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    About,
    Projects,
}

impl ModalKind {
    pub const ALL: [Self; 2] = [Self::About, Self::Projects];

    /// Id of the modal's backdrop element.
    #[must_use]
    pub fn element_id(self) -> &'static str {
        match self {
            Self::About => ABOUT_MODAL_ID,
            Self::Projects => PROJECTS_MODAL_ID,
        }
    }

    /// Selector matching the anchors that open this modal.
    #[must_use]
    pub fn trigger_selector(self) -> &'static str {
        match self {
            Self::About => ABOUT_TRIGGER_SELECTOR,
            Self::Projects => PROJECTS_TRIGGER_SELECTOR,
        }
    }

    /// Whether the Escape key dismisses this modal.
    ///
    /// Only the about modal listens for Escape; the projects modal closes
    /// through its button or backdrop alone.
    #[must_use]
    pub fn closes_on_escape(self) -> bool {
        matches!(self, Self::About)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
        }
    }
}
