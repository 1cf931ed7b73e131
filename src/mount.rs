//! Composition root: finds the page's elements, builds the [`PageView`], and
//! wires DOM events into [`PageCore`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Elements are collected per feature. A missing element disables only the
//! features that need it and is reported in the returned [`MountReport`];
//! everything else is still wired.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, Window};

use crate::catalog::{CATALOG, FilterTag};
use crate::config::PageConfig;
use crate::consts::{
    CLOSE_MODAL_SELECTOR, DARK_SCHEME_QUERY, FILTER_ATTRIBUTE, FILTER_BUTTON_SELECTOR, IN_PAGE_ANCHOR_SELECTOR,
    NAV_LINK_SELECTOR, PROJECTS_GRID_SELECTOR, SECTION_SELECTOR, THEME_ATTRIBUTE, THEME_ICON_SELECTOR,
    THEME_TOGGLE_ID,
};
use crate::dom::{self, DomError, listen};
use crate::modal::ModalKind;
use crate::nav::{NavMap, fragment};
use crate::page::{Action, Feature, MountReport, PageCore, PageElement, applies_initial_theme};
use crate::storage::PreferenceStore;
use crate::view::{NavView, PageView, ThemeView};

/// Live page: behavior state plus the elements it drives.
pub struct Page {
    core: RefCell<PageCore>,
    view: PageView,
}

impl Page {
    /// Run a handler against the core and apply the resulting actions.
    ///
    /// The core borrow is released before any DOM call, so actions that
    /// synchronously fire further events cannot re-enter a live borrow.
    pub fn dispatch(&self, handler: impl FnOnce(&mut PageCore) -> Vec<Action>) {
        let actions = handler(&mut self.core.borrow_mut());
        self.view.apply_all(&actions);
    }
}

/// Elements found before any listener is installed.
struct Collected {
    view: PageView,
    theme_toggle: Option<HtmlElement>,
    anchors: Vec<Element>,
    about_controls: Option<ModalControls>,
    projects_controls: Option<ModalControls>,
    filter_tags: Vec<FilterTag>,
    inventory: Inventory,
}

/// Close button and opening anchors for one modal.
struct ModalControls {
    close: Element,
    triggers: Vec<Element>,
}

/// Which contract elements were found, and why the others were not.
#[derive(Default)]
struct Inventory {
    present: Vec<PageElement>,
    errors: Vec<(PageElement, DomError)>,
}

impl Inventory {
    fn take<T>(&mut self, element: PageElement, result: Result<T, DomError>) -> Option<T> {
        match result {
            Ok(found) => {
                self.present.push(element);
                Some(found)
            }
            Err(err) => {
                self.errors.push((element, err));
                None
            }
        }
    }

    /// Like [`Inventory::take`], but an empty match counts as missing.
    fn take_list<T>(&mut self, element: PageElement, result: Result<Vec<T>, DomError>) -> Vec<T> {
        let result = result.and_then(|found| {
            if found.is_empty() { Err(DomError::missing(element.selector())) } else { Ok(found) }
        });
        self.take(element, result).unwrap_or_default()
    }

    /// `Ok` when every element `feature` needs was found, else the first lookup error.
    fn check(&self, feature: Feature) -> Result<(), DomError> {
        let Some(missing) = feature.missing(&self.present) else {
            return Ok(());
        };
        Err(self
            .errors
            .iter()
            .find(|(element, _)| *element == missing)
            .map_or_else(|| DomError::missing(missing.selector()), |(_, err)| err.clone()))
    }
}

/// Find every element, apply the initial theme, and wire every feature whose
/// elements were all found.
///
/// # Errors
///
/// Fails only when the window has no document. Missing feature elements
/// are reported in the returned [`MountReport`].
pub fn mount(window: &Window, config: &PageConfig) -> Result<MountReport, DomError> {
    let document = &dom::document(window)?;
    let Collected { view, theme_toggle, anchors, about_controls, projects_controls, filter_tags, inventory } =
        collect(window, document, config);

    let page = Rc::new(Page {
        core: RefCell::new(PageCore::new(CATALOG, config.scroll_offset_px)),
        view,
    });

    if applies_initial_theme(&inventory.present) {
        apply_initial_theme(&page, window);
    }

    let mut report = MountReport::default();
    for feature in Feature::ALL {
        let result = inventory.check(feature).and_then(|()| match feature {
            Feature::Theme => wire_theme(&page, required(theme_toggle.as_ref(), PageElement::ThemeToggle)?),
            Feature::SmoothScroll => wire_smooth_scroll(&page, document, &anchors),
            Feature::NavHighlight => wire_nav_highlight(&page, window),
            Feature::AboutModal => wire_modal(
                &page,
                document,
                ModalKind::About,
                required(about_controls.as_ref(), PageElement::AboutClose)?,
            ),
            Feature::ProjectsModal => wire_modal(
                &page,
                document,
                ModalKind::Projects,
                required(projects_controls.as_ref(), PageElement::ProjectsClose)?,
            ),
            Feature::ProjectFilter => wire_filters(&page, &filter_tags),
        });
        report.record(feature, result);
    }

    Ok(report)
}

fn required<T>(value: Option<&T>, element: PageElement) -> Result<&T, DomError> {
    value.ok_or_else(|| DomError::missing(element.selector()))
}

// ── Collection ──────────────────────────────────────────────────

fn collect(window: &Window, document: &Document, config: &PageConfig) -> Collected {
    let mut inventory = Inventory::default();

    let body = match dom::body(document) {
        Ok(body) => Some(body),
        Err(err) => {
            log::warn!("modals cannot lock scroll: {err}");
            None
        }
    };

    let root = inventory.take(PageElement::Root, document.document_element().ok_or_else(|| DomError::missing(PageElement::Root.selector())));
    let theme_toggle = inventory.take(PageElement::ThemeToggle, dom::by_id(document, THEME_TOGGLE_ID));
    let icon = theme_toggle.as_ref().and_then(|toggle| match dom::query(toggle, THEME_ICON_SELECTOR) {
        Ok(icon) => Some(icon),
        Err(err) => {
            log::warn!("theme icon not updated: {err}");
            None
        }
    });
    let theme = root.map(|root| ThemeView { root, icon });

    let anchors = inventory.take_list(PageElement::InPageAnchors, dom::query_all(document, IN_PAGE_ANCHOR_SELECTOR));
    let nav = collect_nav(document, &mut inventory);

    let (about, about_controls) =
        collect_modal(document, ModalKind::About, PageElement::AboutModal, PageElement::AboutClose, &mut inventory);
    let (projects, projects_controls) = collect_modal(
        document,
        ModalKind::Projects,
        PageElement::ProjectsModal,
        PageElement::ProjectsClose,
        &mut inventory,
    );

    let grid = inventory.take(PageElement::ProjectsGrid, dom::query_document(document, PROJECTS_GRID_SELECTOR));
    let filters = inventory.take_list(PageElement::FilterButtons, dom::query_all(document, FILTER_BUTTON_SELECTOR));
    let filter_tags = filters
        .iter()
        .map(|button| FilterTag::parse(&button.get_attribute(FILTER_ATTRIBUTE).unwrap_or_default()))
        .collect();

    let view = PageView {
        document: document.clone(),
        body,
        store: PreferenceStore::open(window, &config.storage_key),
        theme,
        nav,
        about,
        projects,
        grid,
        filters,
    };

    Collected { view, theme_toggle, anchors, about_controls, projects_controls, filter_tags, inventory }
}

fn collect_nav(document: &Document, inventory: &mut Inventory) -> Option<NavView> {
    let links = inventory.take_list(PageElement::NavLinks, dom::query_all(document, NAV_LINK_SELECTOR));
    let sections = dom::query_all(document, SECTION_SELECTOR).map(|found| {
        found.into_iter().flat_map(|section| section.dyn_into::<HtmlElement>()).collect::<Vec<_>>()
    });
    let sections = inventory.take_list(PageElement::Sections, sections);
    if links.is_empty() || sections.is_empty() {
        return None;
    }

    let hrefs: Vec<String> = links.iter().map(|link| link.get_attribute("href").unwrap_or_default()).collect();
    let ids: Vec<String> = sections.iter().map(|section| section.id()).collect();
    let map = NavMap::build(&hrefs, &ids);
    if !map.unmatched().is_empty() {
        log::warn!("nav links with no matching section: {}", map.unmatched().join(", "));
    }
    Some(NavView { links, sections, map })
}

fn collect_modal(
    document: &Document,
    kind: ModalKind,
    modal_element: PageElement,
    close_element: PageElement,
    inventory: &mut Inventory,
) -> (Option<HtmlElement>, Option<ModalControls>) {
    let Some(modal) = inventory.take(modal_element, dom::by_id(document, kind.element_id())) else {
        return (None, None);
    };
    let Some(close) = inventory.take(close_element, dom::query(&modal, CLOSE_MODAL_SELECTOR)) else {
        return (Some(modal), None);
    };
    let triggers = match dom::query_all(document, kind.trigger_selector()) {
        Ok(triggers) => triggers,
        Err(err) => {
            log::warn!("{} modal triggers not found: {err}", kind.label());
            Vec::new()
        }
    };
    if triggers.is_empty() {
        log::debug!("{} modal has no triggers", kind.label());
    }
    (Some(modal), Some(ModalControls { close, triggers }))
}

// ── Wiring ──────────────────────────────────────────────────────

fn apply_initial_theme(page: &Page, window: &Window) {
    let prefers_dark = match window.match_media(DARK_SCHEME_QUERY) {
        Ok(query) => query.is_some_and(|q| q.matches()),
        Err(err) => {
            log::debug!("matchMedia failed: {}", DomError::from(err));
            false
        }
    };
    let stored = page.view.store.load();
    page.dispatch(|core| core.load_theme(stored.as_deref(), prefers_dark));
}

fn wire_theme(page: &Rc<Page>, toggle: &HtmlElement) -> Result<(), DomError> {
    let page = Rc::clone(page);
    listen(toggle, "click", move |_| {
        let applied = page.view.theme.as_ref().and_then(|view| view.root.get_attribute(THEME_ATTRIBUTE));
        page.dispatch(|core| core.toggle_theme(applied.as_deref()));
    })
}

fn wire_smooth_scroll(page: &Rc<Page>, document: &Document, anchors: &[Element]) -> Result<(), DomError> {
    for anchor in anchors {
        let page = Rc::clone(page);
        let document = document.clone();
        let source = anchor.clone();
        listen(anchor, "click", move |event| {
            event.prevent_default();
            let href = source.get_attribute("href").unwrap_or_default();
            let target_exists = fragment(&href)
                .filter(|id| !id.is_empty())
                .is_some_and(|id| document.get_element_by_id(id).is_some());
            page.dispatch(|core| core.follow_anchor(&href, target_exists));
        })?;
    }
    Ok(())
}

fn wire_nav_highlight(page: &Rc<Page>, window: &Window) -> Result<(), DomError> {
    let page = Rc::clone(page);
    let source = window.clone();
    listen(window, "scroll", move |_| {
        let scroll_y = match source.scroll_y() {
            Ok(y) => y,
            Err(err) => {
                log::warn!("scrollY unavailable: {}", DomError::from(err));
                return;
            }
        };
        let sections = page.view.section_offsets();
        page.dispatch(|core| core.on_scroll(scroll_y, &sections));
    })
}

fn wire_modal(page: &Rc<Page>, document: &Document, kind: ModalKind, controls: &ModalControls) -> Result<(), DomError> {
    for trigger in &controls.triggers {
        let page = Rc::clone(page);
        listen(trigger, "click", move |event| {
            event.prevent_default();
            page.dispatch(|core| core.open_modal(kind));
        })?;
    }

    {
        let page = Rc::clone(page);
        listen(&controls.close, "click", move |_| page.dispatch(|core| core.close_modal(kind)))?;
    }

    if let Some(modal) = page.view.modal_element(kind) {
        let backdrop: JsValue = modal.clone().into();
        let page = Rc::clone(page);
        listen(modal, "click", move |event| {
            let on_backdrop = event.target().is_some_and(|target| JsValue::from(target) == backdrop);
            page.dispatch(|core| core.backdrop_click(kind, on_backdrop));
        })?;
    }

    if kind.closes_on_escape() {
        let page = Rc::clone(page);
        listen(document, "keydown", move |event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else { return };
            let key = key_event.key();
            page.dispatch(|core| core.key_down(&key));
        })?;
    }
    Ok(())
}

fn wire_filters(page: &Rc<Page>, tags: &[FilterTag]) -> Result<(), DomError> {
    for (index, (button, tag)) in page.view.filters.iter().zip(tags).enumerate() {
        let page_for_click = Rc::clone(page);
        let tag = tag.clone();
        listen(button, "click", move |_| page_for_click.dispatch(|core| core.select_filter(index, tag.clone())))?;
    }
    Ok(())
}
