//! Element handles and the code that applies [`Action`]s to them.
//!
//! Handles are grouped per feature and each group is optional: a feature
//! whose elements were not found at mount simply has nothing to apply to,
//! and actions aimed at it are logged and skipped.

use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::consts::{ACTIVE_CLASS, THEME_ATTRIBUTE};
use crate::dom::warn_on_err;
use crate::modal::ModalKind;
use crate::nav::{NavMap, SectionOffset};
use crate::page::Action;
use crate::render::render_cards;
use crate::storage::PreferenceStore;

/// `<html>` root and, when the toggle has one, its icon.
pub struct ThemeView {
    pub root: Element,
    pub icon: Option<Element>,
}

/// Nav links (in document order), page sections, and their validated pairing.
pub struct NavView {
    pub links: Vec<Element>,
    pub sections: Vec<HtmlElement>,
    pub map: NavMap,
}

pub struct PageView {
    pub document: Document,
    pub body: Option<HtmlElement>,
    pub store: PreferenceStore,
    pub theme: Option<ThemeView>,
    pub nav: Option<NavView>,
    pub about: Option<HtmlElement>,
    pub projects: Option<HtmlElement>,
    /// Container for project cards, shared by the projects modal and the filters.
    pub grid: Option<Element>,
    /// Filter buttons in document order; [`Action::MarkFilter`] indexes into this.
    pub filters: Vec<Element>,
}

impl PageView {
    #[must_use]
    pub fn modal_element(&self, kind: ModalKind) -> Option<&HtmlElement> {
        match kind {
            ModalKind::About => self.about.as_ref(),
            ModalKind::Projects => self.projects.as_ref(),
        }
    }

    /// Current top offset of every section, in document order.
    #[must_use]
    pub fn section_offsets(&self) -> Vec<SectionOffset> {
        self.nav.as_ref().map_or_else(Vec::new, |nav| {
            nav.sections
                .iter()
                .map(|section| SectionOffset::new(section.id(), f64::from(section.offset_top())))
                .collect()
        })
    }

    pub fn apply_all(&self, actions: &[Action]) {
        for action in actions {
            self.apply(action);
        }
    }

    pub fn apply(&self, action: &Action) {
        match action {
            Action::ApplyTheme(theme) => {
                let Some(view) = &self.theme else {
                    log::debug!("no theme elements; skipping {theme:?}");
                    return;
                };
                warn_on_err("set data-theme", view.root.set_attribute(THEME_ATTRIBUTE, theme.as_str()));
                if let Some(icon) = &view.icon {
                    icon.set_class_name(theme.icon_class());
                }
            }
            Action::PersistTheme(theme) => self.store.save(theme.as_str()),
            Action::ShowModal(kind) => {
                if let Some(modal) = self.modal_element(*kind) {
                    warn_on_err("show modal", modal.class_list().add_1(ACTIVE_CLASS));
                }
            }
            Action::HideModal(kind) => {
                if let Some(modal) = self.modal_element(*kind) {
                    warn_on_err("hide modal", modal.class_list().remove_1(ACTIVE_CLASS));
                }
            }
            Action::LockScroll => {
                if let Some(body) = &self.body {
                    warn_on_err("lock scroll", body.style().set_property("overflow", "hidden"));
                }
            }
            Action::UnlockScroll => {
                if let Some(body) = &self.body {
                    warn_on_err("unlock scroll", body.style().remove_property("overflow"));
                }
            }
            Action::RenderProjects(projects) => {
                let Some(grid) = &self.grid else {
                    log::debug!("no projects grid; skipping render of {} cards", projects.len());
                    return;
                };
                grid.set_inner_html(&render_cards(projects));
            }
            Action::MarkFilter(clicked) => {
                for (index, button) in self.filters.iter().enumerate() {
                    mark_active(button, index == *clicked);
                }
            }
            Action::HighlightNav(current) => {
                let Some(nav) = &self.nav else { return };
                let flags = nav.map.highlight_flags(current.as_deref());
                for (link, active) in nav.links.iter().zip(flags) {
                    mark_active(link, active);
                }
            }
            Action::ScrollIntoView(id) => {
                let Some(target) = self.document.get_element_by_id(id) else {
                    log::debug!("scroll target #{id} vanished");
                    return;
                };
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
    }
}

/// Clear the active marker from `element`, then re-add it when `active`.
fn mark_active(element: &Element, active: bool) {
    let classes = element.class_list();
    warn_on_err("clear active", classes.remove_1(ACTIVE_CLASS));
    if active {
        warn_on_err("set active", classes.add_1(ACTIVE_CLASS));
    }
}
