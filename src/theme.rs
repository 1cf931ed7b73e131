//! Light/dark theme model.
//!
//! The applied theme lives in the `data-theme` attribute on `<html>`; the
//! persisted preference lives in `localStorage`. This module holds only the
//! rules for choosing between them. Reading and writing the browser state is
//! done by [`crate::mount::Page`].
//!
//! TRADE-OFFS
//! ==========
//! A stored value that is not exactly `"light"` or `"dark"` is treated as
//! absent, so a corrupted preference falls back to the OS color scheme
//! instead of being written into the document attribute.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::{MOON_ICON_CLASS, SUN_ICON_CLASS};

/// Visual mode applied to the whole page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Attribute and storage value for this theme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse an exact, case-sensitive theme name.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon class for the toggle button.
    ///
    /// The icon shows the action a click performs, not the current state:
    /// light shows a moon, dark shows a sun.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => MOON_ICON_CLASS,
            Self::Dark => SUN_ICON_CLASS,
        }
    }
}

/// Pick the theme to apply at page load.
///
/// A valid stored preference wins. Otherwise the OS dark color-scheme
/// preference selects dark, and everything else lands on light.
#[must_use]
pub fn resolve_initial(stored: Option<&str>, prefers_dark: bool) -> Theme {
    if let Some(theme) = stored.and_then(Theme::parse) {
        return theme;
    }
    if prefers_dark { Theme::Dark } else { Theme::Light }
}

/// Theme to switch to given the currently applied document attribute.
///
/// Only an attribute of exactly `"light"` flips to dark; anything else,
/// including a missing attribute, flips to light.
#[must_use]
pub fn toggled_from_attribute(applied: Option<&str>) -> Theme {
    if applied == Some(Theme::Light.as_str()) { Theme::Dark } else { Theme::Light }
}
