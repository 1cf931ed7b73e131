use super::*;

fn names(projects: &[&ProjectRecord]) -> Vec<&'static str> {
    projects.iter().map(|p| p.name).collect()
}

// =============================================================
// CATALOG
// =============================================================

#[test]
fn catalog_has_six_projects_in_display_order() {
    let all: Vec<_> = CATALOG.iter().map(|p| p.name).collect();
    assert_eq!(
        all,
        vec![
            "Matrix3D",
            "MazeGenerator",
            "GLRenderer",
            "Sprite-Deets-App",
            "WPF-ToDo-Application",
            "Simple-Console-Arithmetic-Interpreter",
        ]
    );
}

#[test]
fn catalog_urls_point_at_project_repos() {
    for project in CATALOG {
        assert!(project.url.starts_with("https://github.com/"), "{}", project.url);
        assert!(project.url.ends_with(project.name), "{}", project.url);
        assert!(!project.technologies.is_empty(), "{}", project.name);
    }
}

// =============================================================
// FilterTag
// =============================================================

#[test]
fn filter_tag_parses_all_sentinel() {
    assert_eq!(FilterTag::parse("all"), FilterTag::All);
    assert_eq!(FilterTag::parse("All"), FilterTag::Technology("All".into()));
    assert_eq!(FilterTag::parse("C#"), FilterTag::Technology("C#".into()));
}

#[test]
fn filter_tag_as_str_round_trips_data_attribute() {
    assert_eq!(FilterTag::All.as_str(), "all");
    assert_eq!(FilterTag::parse("OpenGL").as_str(), "OpenGL");
}

// =============================================================
// filter_projects
// =============================================================

#[test]
fn filter_all_returns_whole_catalog_in_order() {
    let result = filter_projects(CATALOG, &FilterTag::All);
    assert_eq!(result.len(), 6);
    for (got, want) in result.iter().zip(CATALOG) {
        assert_eq!(*got, want);
    }
}

#[test]
fn filter_opengl_returns_matrix_and_maze() {
    let result = filter_projects(CATALOG, &FilterTag::parse("OpenGL"));
    assert_eq!(names(&result), vec!["Matrix3D", "MazeGenerator"]);
}

#[test]
fn filter_csharp_matches_exact_tag() {
    let result = filter_projects(CATALOG, &FilterTag::parse("C#"));
    assert_eq!(
        names(&result),
        vec![
            "Matrix3D",
            "MazeGenerator",
            "GLRenderer",
            "WPF-ToDo-Application",
            "Simple-Console-Arithmetic-Interpreter",
        ]
    );
}

#[test]
fn filter_is_case_sensitive() {
    assert!(filter_projects(CATALOG, &FilterTag::parse("opengl")).is_empty());
    assert!(filter_projects(CATALOG, &FilterTag::parse("c#")).is_empty());
}

#[test]
fn filter_unknown_tag_is_empty() {
    assert!(filter_projects(CATALOG, &FilterTag::parse("Rust")).is_empty());
    assert!(filter_projects(CATALOG, &FilterTag::parse("")).is_empty());
}

#[test]
fn filter_over_empty_catalog_is_empty() {
    assert!(filter_projects(&[], &FilterTag::All).is_empty());
}
