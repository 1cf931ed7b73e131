//! Project catalog: the compiled-in project list and technology filtering.
//!
//! The catalog is small and static, so filtering is a linear scan that
//! returns borrowed records in catalog order.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::consts::FILTER_ALL;

/// A single portfolio project shown in the projects modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRecord {
    pub name: &'static str,
    pub description: &'static str,
    /// Technology tags, in display order. Filtering matches these exactly.
    pub technologies: &'static [&'static str],
    pub url: &'static str,
}

impl ProjectRecord {
    /// Whether this project lists `tag` among its technologies (case-sensitive).
    #[must_use]
    pub fn uses(&self, tag: &str) -> bool {
        self.technologies.contains(&tag)
    }
}

/// Every project, in display order.
pub const CATALOG: &[ProjectRecord] = &[
    ProjectRecord {
        name: "Matrix3D",
        description: "A simple 3D Viewer engine built with C#",
        technologies: &["C#", "OpenGL"],
        url: "https://github.com/Alex6683-bot/Matrix3D",
    },
    ProjectRecord {
        name: "MazeGenerator",
        description: "Simple Maze Generator made with OpenGL",
        technologies: &["C#", "OpenGL"],
        url: "https://github.com/Alex6683-bot/MazeGenerator",
    },
    ProjectRecord {
        name: "GLRenderer",
        description: "A set of abstraction classes for rendering meshes and scenes in OpenTK",
        technologies: &["C#", "OpenTK"],
        url: "https://github.com/Alex6683-bot/GLRenderer",
    },
    ProjectRecord {
        name: "Sprite-Deets-App",
        description: "A tool to assist editing sprite metadata for importing into any game engine",
        technologies: &["TypeScript", "HTML"],
        url: "https://github.com/Alex6683-bot/Sprite-Deets-App",
    },
    ProjectRecord {
        name: "WPF-ToDo-Application",
        description: "Simple WPF ToDo app built with MVVM architecture",
        technologies: &["C#", "WPF"],
        url: "https://github.com/Alex6683-bot/WPF-ToDo-Application",
    },
    ProjectRecord {
        name: "Simple-Console-Arithmetic-Interpreter",
        description: "A console-based arithmetic expression interpreter",
        technologies: &["C#"],
        url: "https://github.com/Alex6683-bot/Simple-Console-Arithmetic-Interpreter",
    },
];

/// Filter selected by a filter button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FilterTag {
    /// Show the whole catalog.
    #[default]
    All,
    /// Show projects listing this exact technology.
    Technology(String),
}

impl FilterTag {
    /// Parse a `data-filter` value. Only the literal `"all"` means everything.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == FILTER_ALL { Self::All } else { Self::Technology(raw.to_owned()) }
    }

    /// The `data-filter` value this tag came from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => FILTER_ALL,
            Self::Technology(tag) => tag,
        }
    }

    #[must_use]
    pub fn matches(&self, project: &ProjectRecord) -> bool {
        match self {
            Self::All => true,
            Self::Technology(tag) => project.uses(tag),
        }
    }
}

/// Projects selected by `tag`, preserving catalog order.
///
/// A tag no project uses yields an empty list.
#[must_use]
pub fn filter_projects<'a>(catalog: &'a [ProjectRecord], tag: &FilterTag) -> Vec<&'a ProjectRecord> {
    catalog.iter().filter(|p| tag.matches(p)).collect()
}
