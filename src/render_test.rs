use super::*;
use crate::catalog::{CATALOG, FilterTag, filter_projects};

fn render_card(project: &ProjectRecord) -> String {
    render_cards(&[project])
}

fn sample() -> ProjectRecord {
    ProjectRecord {
        name: "Matrix3D",
        description: "A simple 3D Viewer engine built with C#",
        technologies: &["C#", "OpenGL"],
        url: "https://github.com/Alex6683-bot/Matrix3D",
    }
}

// =============================================================
// Single card
// =============================================================

#[test]
fn card_contains_name_description_and_link() {
    let html = render_card(&sample());
    assert!(html.starts_with("<div class=\"project-card\""));
    assert!(html.contains("<h3>Matrix3D</h3>"));
    assert!(html.contains("<p>A simple 3D Viewer engine built with C#</p>"));
    assert!(html.contains("href=\"https://github.com/Alex6683-bot/Matrix3D\""));
    assert!(html.contains("target=\"_blank\""));
    assert!(html.contains("<i class=\"fab fa-github\"></i> View Project"));
}

#[test]
fn card_has_one_tag_per_technology_in_order() {
    let html = render_card(&sample());
    assert!(html.contains("<div class=\"project-tech\"><span>C#</span><span>OpenGL</span></div>"));
}

#[test]
fn card_carries_technologies_as_json_attribute() {
    let html = render_card(&sample());
    assert!(html.contains("data-technologies=\"[&quot;C#&quot;,&quot;OpenGL&quot;]\""));
}

#[test]
fn card_escapes_interpolated_text() {
    let project = ProjectRecord {
        name: "<script>",
        description: "a & b",
        technologies: &["\"quoted\""],
        url: "https://example.com/?a=1&b='2'",
    };
    let html = render_card(&project);
    assert!(html.contains("<h3>&lt;script&gt;</h3>"));
    assert!(html.contains("<p>a &amp; b</p>"));
    assert!(html.contains("<span>&quot;quoted&quot;</span>"));
    assert!(html.contains("href=\"https://example.com/?a=1&amp;b=&#39;2&#39;\""));
    assert!(!html.contains("<script>"));
}

// =============================================================
// render_cards
// =============================================================

#[test]
fn empty_selection_renders_empty_grid() {
    let none = filter_projects(CATALOG, &FilterTag::parse("Rust"));
    assert_eq!(render_cards(&none), "");
}

#[test]
fn full_catalog_renders_six_cards_in_order() {
    let all = filter_projects(CATALOG, &FilterTag::All);
    let html = render_cards(&all);
    assert_eq!(html.matches("class=\"project-card\"").count(), 6);
    let first = html.find("<h3>Matrix3D</h3>");
    let last = html.find("<h3>Simple-Console-Arithmetic-Interpreter</h3>");
    assert!(first.is_some() && last.is_some());
    assert!(first < last);
}

#[test]
fn render_cards_is_concatenation_of_cards() {
    let all = filter_projects(CATALOG, &FilterTag::parse("OpenGL"));
    let expected: String = all.iter().map(|p| render_card(p)).collect();
    assert!(!expected.is_empty());
    assert_eq!(render_cards(&all), expected);
}

// =============================================================
// escape_html
// =============================================================

#[test]
fn escape_html_leaves_plain_text_untouched() {
    assert_eq!(escape_html("C# and OpenGL"), "C# and OpenGL");
}
