//! Architectural Enforcement Integration Tests
//!
//! Source scans that keep the workspace honest:
//! - The animator core stays headless (no terminal, CLI or printing)
//! - Timing goes through `tokio::time`, never a blocking thread sleep
//! - Production code propagates errors instead of panicking
//!
//! The scanners are line based. Everything from a file's `#[cfg(test)]`
//! marker onward counts as test code, and `//` comments are ignored.

use std::fs;
use std::path::{Path, PathBuf};

/// A rule broken at a specific line
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Violation {
    /// File containing the line
    pub path: PathBuf,
    /// 1-based line number
    pub line_number: usize,
    /// The offending line, trimmed
    pub line: String,
    /// What was found
    pub reason: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{} - {}: {}",
            self.path.display(),
            self.line_number,
            self.reason,
            self.line
        )
    }
}

/// Directory of a workspace crate's sources, e.g. `workspace_dir("showcase/core/src")`
pub fn workspace_dir(relative: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .join(relative)
}

/// All `.rs` files under `dir`
pub fn rust_files(dir: &Path) -> Vec<PathBuf> {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().and_then(|s| s.to_str()) == Some("rs"))
        .map(walkdir::DirEntry::into_path)
        .collect()
}

/// Code part of each production line: `(line_index, code)`
///
/// Stops at the first `#[cfg(test)]`; strips `//` comments.
pub fn production_lines(content: &str) -> Vec<(usize, &str)> {
    content
        .lines()
        .enumerate()
        .take_while(|(_, line)| line.trim() != "#[cfg(test)]")
        .map(|(idx, line)| (idx, line.split("//").next().unwrap_or(line)))
        .filter(|(_, code)| !code.trim().is_empty())
        .collect()
}

/// Scan every production line under `dir` with `check`
///
/// `check` returns a reason when the line breaks the rule.
pub fn scan_directory<F>(dir: &Path, check: F) -> Vec<Violation>
where
    F: Fn(&Path, &str) -> Option<String>,
{
    let mut violations = Vec::new();

    for path in rust_files(dir) {
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };

        for (idx, code) in production_lines(&content) {
            if let Some(reason) = check(&path, code) {
                violations.push(Violation {
                    path: path.clone(),
                    line_number: idx + 1,
                    line: code.trim().to_string(),
                    reason,
                });
            }
        }
    }

    violations
}

/// Print violations and fail the test
///
/// # Panics
///
/// Panics when `violations` is not empty.
pub fn assert_no_violations(rule: &str, violations: &[Violation]) {
    if violations.is_empty() {
        return;
    }

    eprintln!("\n❌ {rule}\n");
    for violation in violations {
        eprintln!("  ❌ {violation}");
    }

    panic!(
        "\nFound {} violation(s) of: {rule}\nFix these before merging!",
        violations.len()
    );
}
