//! Hygiene: source scan for patterns the page must never ship.
//!
//! A clipboard or image failure must never crash hydration, so production
//! client code carries zero panicking shortcuts and zero silent discards.
//! Every budget is zero; test files (`*_test.rs`) are exempt.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::Path;

struct Rule {
    pattern: &'static str,
    max: usize,
}

const RULES: &[Rule] = &[
    Rule { pattern: ".unwrap()", max: 0 },
    Rule { pattern: ".expect(", max: 0 },
    Rule { pattern: "panic!(", max: 0 },
    Rule { pattern: "unreachable!(", max: 0 },
    Rule { pattern: "todo!(", max: 0 },
    Rule { pattern: "unimplemented!(", max: 0 },
    Rule { pattern: "let _ =", max: 0 },
    Rule { pattern: ".ok()", max: 0 },
    Rule { pattern: "#[allow(dead_code)]", max: 0 },
];

struct SourceFile {
    path: String,
    content: String,
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new(env!("CARGO_MANIFEST_DIR")).join("src").as_path(), &mut files);
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
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path: path_str, content });
            }
        }
    }
}

fn count_in_source(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file
                .content
                .lines()
                .filter(|line| line.contains(pattern))
                .count();
            (count > 0).then(|| (file.path.clone(), count))
        })
        .collect()
}

fn format_hits(hits: &[(String, usize)]) -> String {
    hits.iter()
        .map(|(path, count)| format!("  {path}: {count}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn source_tree_is_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("lib.rs")));
}

#[test]
fn pattern_budgets_hold() {
    let files = source_files();
    let mut failures = Vec::new();
    for rule in RULES {
        let hits = count_in_source(&files, rule.pattern);
        let count: usize = hits.iter().map(|(_, c)| c).sum();
        if count > rule.max {
            failures.push(format!("`{}` budget exceeded: found {count}, max {}.\n{}", rule.pattern, rule.max, format_hits(&hits)));
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}
