//! DOM contract strings and fixed values shared across the crate.
//!
//! The host page must provide the ids, classes and attributes named here.
//! Nothing in this crate creates these elements; it only looks them up.

// ── Theme ───────────────────────────────────────────────────────

/// `localStorage` key holding the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Attribute set on the `<html>` element to the active theme name.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Media query reporting an OS-level dark color-scheme preference.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Id of the theme toggle button.
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

/// Icon element nested inside the theme toggle.
pub const THEME_ICON_SELECTOR: &str = "i";

/// Icon shown while the light theme is active (offers switching to dark).
pub const MOON_ICON_CLASS: &str = "fas fa-moon";

/// Icon shown while the dark theme is active (offers switching to light).
pub const SUN_ICON_CLASS: &str = "fas fa-sun";

// ── Navigation ──────────────────────────────────────────────────

/// Every in-page anchor gets smooth-scroll handling.
pub const IN_PAGE_ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Links that take part in active-section highlighting.
pub const NAV_LINK_SELECTOR: &str = ".nav-links a";

/// Page sections whose ids pair with nav link fragments.
pub const SECTION_SELECTOR: &str = "section";

/// A section counts as current once scrolled to within this many pixels of its top.
pub const SECTION_SCROLL_OFFSET_PX: f64 = 60.0;

/// Marker class for the highlighted nav link and filter button.
pub const ACTIVE_CLASS: &str = "active";

// ── Modals ──────────────────────────────────────────────────────

pub const ABOUT_MODAL_ID: &str = "aboutModal";
pub const PROJECTS_MODAL_ID: &str = "projectsModal";
pub const ABOUT_TRIGGER_SELECTOR: &str = "a[href=\"#about\"]";
pub const PROJECTS_TRIGGER_SELECTOR: &str = "a[href=\"#projects\"]";

/// Close button nested inside each modal.
pub const CLOSE_MODAL_SELECTOR: &str = ".close-modal";

/// Keyboard key that dismisses the about modal.
pub const ESCAPE_KEY: &str = "Escape";

// ── Projects ────────────────────────────────────────────────────

/// Container whose contents are replaced on every render.
pub const PROJECTS_GRID_SELECTOR: &str = ".projects-grid";

/// Filter buttons; each carries a [`FILTER_ATTRIBUTE`].
pub const FILTER_BUTTON_SELECTOR: &str = ".filter-btn";

pub const FILTER_ATTRIBUTE: &str = "data-filter";

/// Filter value that selects the whole catalog.
pub const FILTER_ALL: &str = "all";
