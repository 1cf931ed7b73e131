//! Page state machine: every user interaction as a pure state transition.
//!
//! [`PageCore`] owns the behavior of the whole page (theme, smooth scroll,
//! section highlighting, both modals, project filtering) without touching
//! the DOM. Each handler returns the [`Action`]s the browser layer must apply,
//! in order. [`crate::view::PageView`] applies them; [`crate::mount`] wires
//! DOM events to the handlers.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::fmt;

use crate::catalog::{CATALOG, FilterTag, ProjectRecord, filter_projects};
use crate::consts::{
    ABOUT_MODAL_ID, CLOSE_MODAL_SELECTOR, ESCAPE_KEY, FILTER_BUTTON_SELECTOR, IN_PAGE_ANCHOR_SELECTOR,
    NAV_LINK_SELECTOR, PROJECTS_GRID_SELECTOR, PROJECTS_MODAL_ID, SECTION_SCROLL_OFFSET_PX, SECTION_SELECTOR,
    THEME_TOGGLE_ID,
};
use crate::dom::DomError;
use crate::modal::ModalKind;
use crate::nav::{SectionOffset, active_section, fragment};
use crate::theme::{Theme, resolve_initial, toggled_from_attribute};

/// DOM mutations requested by a handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Set `data-theme` on `<html>` and swap the toggle icon.
    ApplyTheme(Theme),
    /// Write the theme name to `localStorage`.
    PersistTheme(Theme),
    /// Add the visibility class to a modal.
    ShowModal(ModalKind),
    /// Remove the visibility class from a modal.
    HideModal(ModalKind),
    /// Set `overflow: hidden` on `<body>`.
    LockScroll,
    /// Restore the default `<body>` overflow.
    UnlockScroll,
    /// Replace the projects grid contents with these cards.
    RenderProjects(Vec<&'static ProjectRecord>),
    /// Move the active marker to the filter button at this index.
    MarkFilter(usize),
    /// Move the active marker to the nav links targeting this section.
    HighlightNav(Option<String>),
    /// Smooth-scroll the element with this id to the viewport top.
    ScrollIntoView(String),
}

/// Behavior state for the page. Separate from the DOM so it can be tested natively.
#[derive(Debug, Clone)]
pub struct PageCore {
    pub theme: Theme,
    /// Tag of the highlighted filter button. Not reset when the modal reopens.
    pub filter: FilterTag,
    pub active_section: Option<String>,
    about_open: bool,
    projects_open: bool,
    scroll_offset_px: f64,
    catalog: &'static [ProjectRecord],
}

impl Default for PageCore {
    fn default() -> Self {
        Self::new(CATALOG, SECTION_SCROLL_OFFSET_PX)
    }
}

impl PageCore {
    #[must_use]
    pub fn new(catalog: &'static [ProjectRecord], scroll_offset_px: f64) -> Self {
        Self {
            theme: Theme::default(),
            filter: FilterTag::All,
            active_section: None,
            about_open: false,
            projects_open: false,
            scroll_offset_px,
            catalog,
        }
    }

    #[must_use]
    pub fn is_open(&self, kind: ModalKind) -> bool {
        match kind {
            ModalKind::About => self.about_open,
            ModalKind::Projects => self.projects_open,
        }
    }

    fn set_open(&mut self, kind: ModalKind, open: bool) {
        match kind {
            ModalKind::About => self.about_open = open,
            ModalKind::Projects => self.projects_open = open,
        }
    }

    // --- Theme ---

    /// Apply the initial theme from the stored preference or OS setting.
    pub fn load_theme(&mut self, stored: Option<&str>, prefers_dark: bool) -> Vec<Action> {
        self.theme = resolve_initial(stored, prefers_dark);
        vec![Action::ApplyTheme(self.theme)]
    }

    /// Flip the theme currently applied to the document and persist it.
    ///
    /// `applied` is the live `data-theme` attribute, which is authoritative
    /// over both storage and [`PageCore::theme`].
    pub fn toggle_theme(&mut self, applied: Option<&str>) -> Vec<Action> {
        self.theme = toggled_from_attribute(applied);
        vec![Action::ApplyTheme(self.theme), Action::PersistTheme(self.theme)]
    }

    // --- Navigation ---

    /// Smooth-scroll to an in-page anchor's target if it exists.
    ///
    /// The browser's default jump is suppressed by the caller either way.
    #[must_use]
    pub fn follow_anchor(&self, href: &str, target_exists: bool) -> Vec<Action> {
        match fragment(href) {
            Some(id) if target_exists && !id.is_empty() => vec![Action::ScrollIntoView(id.to_owned())],
            _ => Vec::new(),
        }
    }

    /// Recompute the active section for the new scroll position.
    pub fn on_scroll(&mut self, scroll_y: f64, sections: &[SectionOffset]) -> Vec<Action> {
        self.active_section = active_section(sections, scroll_y, self.scroll_offset_px).map(str::to_owned);
        vec![Action::HighlightNav(self.active_section.clone())]
    }

    // --- Modals ---

    /// Show a modal and lock page scroll. The projects modal always
    /// re-renders the full catalog, whatever filter was last selected.
    pub fn open_modal(&mut self, kind: ModalKind) -> Vec<Action> {
        self.set_open(kind, true);
        let mut actions = vec![Action::ShowModal(kind), Action::LockScroll];
        if kind == ModalKind::Projects {
            actions.push(Action::RenderProjects(filter_projects(self.catalog, &FilterTag::All)));
        }
        actions
    }

    /// Hide a modal and restore page scroll. Safe to call when already closed.
    pub fn close_modal(&mut self, kind: ModalKind) -> Vec<Action> {
        self.set_open(kind, false);
        vec![Action::HideModal(kind), Action::UnlockScroll]
    }

    /// Close `kind` when the click landed on its backdrop, not its content.
    pub fn backdrop_click(&mut self, kind: ModalKind, on_backdrop: bool) -> Vec<Action> {
        if on_backdrop { self.close_modal(kind) } else { Vec::new() }
    }

    /// Escape closes every open modal that listens for it.
    pub fn key_down(&mut self, key: &str) -> Vec<Action> {
        if key != ESCAPE_KEY {
            return Vec::new();
        }
        let dismissed: Vec<ModalKind> = ModalKind::ALL
            .into_iter()
            .filter(|kind| kind.closes_on_escape() && self.is_open(*kind))
            .collect();
        dismissed.into_iter().flat_map(|kind| self.close_modal(kind)).collect()
    }

    // --- Projects ---

    /// Highlight the clicked filter button and render the projects its tag selects.
    pub fn select_filter(&mut self, button: usize, tag: FilterTag) -> Vec<Action> {
        log::debug!("filter {} selected", tag.as_str());
        let projects = filter_projects(self.catalog, &tag);
        self.filter = tag;
        vec![Action::MarkFilter(button), Action::RenderProjects(projects)]
    }
}

/// Independently wired page features.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Theme,
    SmoothScroll,
    NavHighlight,
    AboutModal,
    ProjectsModal,
    ProjectFilter,
}

impl Feature {
    pub const ALL: [Self; 6] = [
        Self::Theme,
        Self::SmoothScroll,
        Self::NavHighlight,
        Self::AboutModal,
        Self::ProjectsModal,
        Self::ProjectFilter,
    ];

    /// Elements this feature cannot work without, in lookup order.
    #[must_use]
    pub fn requires(self) -> &'static [PageElement] {
        match self {
            Self::Theme => &[PageElement::Root, PageElement::ThemeToggle],
            Self::SmoothScroll => &[PageElement::InPageAnchors],
            Self::NavHighlight => &[PageElement::NavLinks, PageElement::Sections],
            Self::AboutModal => &[PageElement::AboutModal, PageElement::AboutClose],
            Self::ProjectsModal => &[PageElement::ProjectsModal, PageElement::ProjectsClose, PageElement::ProjectsGrid],
            Self::ProjectFilter => &[PageElement::ProjectsGrid, PageElement::FilterButtons],
        }
    }

    /// First required element absent from `present`, if any.
    #[must_use]
    pub fn missing(self, present: &[PageElement]) -> Option<PageElement> {
        self.requires().iter().copied().find(|element| !present.contains(element))
    }
}

/// Features that can be wired given the elements found on the page.
#[must_use]
pub fn features_for(present: &[PageElement]) -> Vec<Feature> {
    Feature::ALL.into_iter().filter(|feature| feature.missing(present).is_none()).collect()
}

/// Whether the stored or OS-preferred theme can be applied at load.
///
/// Only the `<html>` root is needed; the toggle and its icon are not.
#[must_use]
pub fn applies_initial_theme(present: &[PageElement]) -> bool {
    present.contains(&PageElement::Root)
}

/// Elements of the DOM contract that features depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageElement {
    Root,
    ThemeToggle,
    InPageAnchors,
    NavLinks,
    Sections,
    AboutModal,
    AboutClose,
    ProjectsModal,
    ProjectsClose,
    ProjectsGrid,
    FilterButtons,
}

impl PageElement {
    /// Selector reported when the element is missing.
    #[must_use]
    pub fn selector(self) -> String {
        match self {
            Self::Root => "html".to_owned(),
            Self::ThemeToggle => format!("#{THEME_TOGGLE_ID}"),
            Self::InPageAnchors => IN_PAGE_ANCHOR_SELECTOR.to_owned(),
            Self::NavLinks => NAV_LINK_SELECTOR.to_owned(),
            Self::Sections => SECTION_SELECTOR.to_owned(),
            Self::AboutModal => format!("#{ABOUT_MODAL_ID}"),
            Self::AboutClose => format!("#{ABOUT_MODAL_ID} {CLOSE_MODAL_SELECTOR}"),
            Self::ProjectsModal => format!("#{PROJECTS_MODAL_ID}"),
            Self::ProjectsClose => format!("#{PROJECTS_MODAL_ID} {CLOSE_MODAL_SELECTOR}"),
            Self::ProjectsGrid => PROJECTS_GRID_SELECTOR.to_owned(),
            Self::FilterButtons => FILTER_BUTTON_SELECTOR.to_owned(),
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Theme => "theme toggle",
            Self::SmoothScroll => "smooth scroll",
            Self::NavHighlight => "nav highlight",
            Self::AboutModal => "about modal",
            Self::ProjectsModal => "projects modal",
            Self::ProjectFilter => "project filter",
        };
        f.write_str(name)
    }
}

/// Outcome of mounting: which features are live and why the others are not.
#[derive(Debug, Default)]
pub struct MountReport {
    pub wired: Vec<Feature>,
    pub failed: Vec<(Feature, DomError)>,
}

impl MountReport {
    /// Record the result of wiring one feature.
    pub fn record(&mut self, feature: Feature, result: Result<(), DomError>) {
        match result {
            Ok(()) => self.wired.push(feature),
            Err(err) => self.failed.push((feature, err)),
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Emit one log line per feature.
    pub fn log(&self) {
        for feature in &self.wired {
            log::info!("{feature} ready");
        }
        for (feature, err) in &self.failed {
            log::warn!("{feature} disabled: {err}");
        }
    }
}
