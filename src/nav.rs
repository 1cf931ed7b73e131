//! In-page navigation: anchor fragments, active-section detection, and the
//! pairing between nav links and page sections.
//!
//! Sections are identified by their `id`; nav links point at them through
//! the `#fragment` of their `href`. [`NavMap`] makes that pairing explicit
//! once at mount so a broken link is reported up front instead of silently
//! never highlighting.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// The part of `href` after a leading `#`, or `None` for other links.
#[must_use]
pub fn fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

/// A page section's id and its top offset in document pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

impl SectionOffset {
    #[must_use]
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

/// Id of the section currently considered in view.
///
/// Scans every section in document order and keeps the last one whose top,
/// less `threshold_px`, is at or above `scroll_y`. Returns `None` while the
/// page is scrolled above every section.
#[must_use]
pub fn active_section(sections: &[SectionOffset], scroll_y: f64, threshold_px: f64) -> Option<&str> {
    let mut current = None;
    for section in sections {
        if scroll_y >= section.top - threshold_px {
            current = Some(section.id.as_str());
        }
    }
    current
}

/// Validated pairing of nav links (in document order) to section ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavMap {
    /// Section id each link resolves to, indexed like the DOM links.
    targets: Vec<Option<String>>,
    unmatched: Vec<String>,
}

impl NavMap {
    /// Pair each link href with the section its fragment names.
    ///
    /// Links without a `#fragment`, or whose fragment names no section, stay
    /// in the map (so indices line up with the DOM links) but never highlight
    /// and are listed in [`NavMap::unmatched`].
    #[must_use]
    pub fn build<S: AsRef<str>>(link_hrefs: &[S], section_ids: &[S]) -> Self {
        let mut targets = Vec::with_capacity(link_hrefs.len());
        let mut unmatched = Vec::new();
        for href in link_hrefs {
            let href = href.as_ref();
            let section = fragment(href)
                .filter(|frag| section_ids.iter().any(|id| id.as_ref() == *frag))
                .map(str::to_owned);
            if section.is_none() {
                unmatched.push(href.to_owned());
            }
            targets.push(section);
        }
        Self { targets, unmatched }
    }

    /// Hrefs of links that point at no existing section.
    #[must_use]
    pub fn unmatched(&self) -> &[String] {
        &self.unmatched
    }

    /// One flag per link: whether it should carry the active marker.
    #[must_use]
    pub fn highlight_flags(&self, current: Option<&str>) -> Vec<bool> {
        self.targets
            .iter()
            .map(|section| current.is_some() && section.as_deref() == current)
            .collect()
    }
}
