//! Project card markup.
//!
//! Produces the HTML string that replaces the projects grid contents on every
//! render. Output is a pure function of its input; writing it into the DOM is
//! left to [`crate::view::PageView`]. Every interpolated value is escaped.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::catalog::ProjectRecord;

/// Markup for all `projects`, concatenated in order. Empty input renders nothing.
#[must_use]
pub fn render_cards(projects: &[&ProjectRecord]) -> String {
    projects.iter().fold(String::new(), |mut out, project| {
        write_card(&mut out, project);
        out
    })
}

fn write_card(out: &mut String, project: &ProjectRecord) {
    let technologies_json = serde_json::to_string(project.technologies).unwrap_or_else(|_| "[]".to_owned());
    let tags: String = project
        .technologies
        .iter()
        .map(|tech| format!("<span>{}</span>", escape_html(tech)))
        .collect();

    out.push_str(&format!(
        concat!(
            "<div class=\"project-card\" data-technologies=\"{tech_json}\">",
            "<h3>{name}</h3>",
            "<p>{description}</p>",
            "<div class=\"project-tech\">{tags}</div>",
            "<div class=\"project-links\">",
            "<a href=\"{url}\" class=\"project-link\" target=\"_blank\" rel=\"noopener noreferrer\">",
            "<i class=\"fab fa-github\"></i> View Project",
            "</a>",
            "</div>",
            "</div>",
        ),
        tech_json = escape_html(&technologies_json),
        name = escape_html(project.name),
        description = escape_html(project.description),
        tags = tags,
        url = escape_html(project.url),
    ));
}

/// Escape text for use in element content and double-quoted attributes.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
