use super::*;

#[test]
fn element_ids_match_page_markup() {
    assert_eq!(ModalKind::About.element_id(), "aboutModal");
    assert_eq!(ModalKind::Projects.element_id(), "projectsModal");
}

#[test]
fn trigger_selectors_target_exact_fragments() {
    assert_eq!(ModalKind::About.trigger_selector(), "a[href=\"#about\"]");
    assert_eq!(ModalKind::Projects.trigger_selector(), "a[href=\"#projects\"]");
}

#[test]
fn only_about_closes_on_escape() {
    assert!(ModalKind::About.closes_on_escape());
    assert!(!ModalKind::Projects.closes_on_escape());
}

#[test]
fn all_lists_each_kind_once() {
    assert_eq!(ModalKind::ALL, [ModalKind::About, ModalKind::Projects]);
    assert_ne!(ModalKind::About.label(), ModalKind::Projects.label());
}
