//! Hygiene — enforces coding standards at test time
//!
//! Scans the plot crate's production sources for antipatterns. Every budget
//! is zero and stays zero: a panic would take down the renderer, and a
//! silently discarded error violates the best-effort persistence contract
//! (failures are logged, never dropped).

use std::fs;
use std::path::{Path, PathBuf};

/// Banned pattern and why it is banned here.
const BANNED: &[(&str, &str)] = &[
    (".unwrap()", "panics on Err/None"),
    (".expect(", "panics on Err/None"),
    ("panic!(", "explicit panic"),
    ("unreachable!(", "explicit panic"),
    ("todo!(", "unfinished code"),
    ("unimplemented!(", "unfinished code"),
    ("let _ =", "silently discards a result"),
    (".ok()", "silently discards an error"),
    ("#[allow(dead_code)]", "unused code kept alive"),
];

/// Production `.rs` files under `src/`, skipping `*_test.rs` siblings.
fn production_sources() -> Vec<(PathBuf, String)> {
    let mut files = Vec::new();
    walk(Path::new("src"), &mut files);
    files
}

fn walk(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, out);
            continue;
        }
        if path.extension().is_none_or(|e| e != "rs") {
            continue;
        }
        if path.to_string_lossy().ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((path, content));
        }
    }
}

#[test]
fn production_sources_were_found() {
    // Guards against the scan silently going blind after a layout change.
    assert!(
        production_sources().len() >= 5,
        "hygiene scan found too few source files; was src/ moved?"
    );
}

#[test]
fn no_banned_patterns_in_production_code() {
    let files = production_sources();
    let mut violations = Vec::new();

    for (pattern, reason) in BANNED {
        for (path, content) in &files {
            for (idx, line) in content.lines().enumerate() {
                if line.contains(pattern) {
                    violations.push(format!(
                        "  {}:{}: `{pattern}` ({reason})",
                        path.display(),
                        idx + 1
                    ));
                }
            }
        }
    }

    assert!(
        violations.is_empty(),
        "banned patterns in production code:\n{}",
        violations.join("\n")
    );
}
