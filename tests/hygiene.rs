//! Hygiene: scans `src/` for patterns the crate keeps at zero.
//!
//! Production code runs inside the visitor's browser tab, where a panic kills
//! every feature on the page at once. Each budget below is a ceiling; if one
//! has to rise, lower another first.

use std::fs;
use std::path::Path;

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

const BUDGETS: &[Budget] = &[
    // Panics.
    Budget { pattern: ".unwrap()", max: 0, why: "propagate or log instead" },
    Budget { pattern: ".expect(", max: 0, why: "propagate or log instead" },
    Budget { pattern: "panic!(", max: 0, why: "a panic disables the whole page" },
    Budget { pattern: "unreachable!(", max: 0, why: "a panic disables the whole page" },
    Budget { pattern: "todo!(", max: 0, why: "stubs must not ship" },
    Budget { pattern: "unimplemented!(", max: 0, why: "stubs must not ship" },
    // Silent loss.
    Budget { pattern: "let _ =", max: 0, why: "use dom::warn_on_err for best-effort DOM writes" },
    Budget { pattern: ".ok()", max: 0, why: "inspect the error before dropping it" },
    // Logging goes through the `log` facade.
    Budget { pattern: "web_sys::console::", max: 0, why: "use log macros" },
    // Structure.
    Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete unused code" },
];

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`; `*_test.rs` files are excluded.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

#[test]
fn source_tree_is_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")), "run from the crate root");
}

#[test]
fn pattern_budgets_hold() {
    let files = source_files();
    let mut violations = Vec::new();
    for budget in BUDGETS {
        let found = hits(&files, budget.pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget.max {
            let detail = found.iter().map(|(path, c)| format!("    {path}: {c}")).collect::<Vec<_>>().join("\n");
            violations.push(format!(
                "`{}` budget exceeded: found {count}, max {} ({})\n{detail}",
                budget.pattern, budget.max, budget.why
            ));
        }
    }
    assert!(violations.is_empty(), "{}", violations.join("\n"));
}

#[test]
fn every_module_with_tests_links_its_test_file() {
    for file in source_files() {
        let stem = file.path.trim_end_matches(".rs");
        let test_path = format!("{stem}_test.rs");
        if Path::new(&test_path).exists() {
            let file_name = Path::new(&test_path).file_name().map(|n| n.to_string_lossy().to_string());
            let Some(file_name) = file_name else { continue };
            assert!(
                file.content.contains(&format!("#[path = \"{file_name}\"]")),
                "{} has a sibling {file_name} that is never compiled",
                file.path
            );
        }
    }
}
