//! Integration Test: Headless Core
//!
//! **Policy**: `showcase-core` only produces state and projections. Terminal
//! layout, argument parsing, subscriber setup and printing belong to the
//! driver crate.

use architectural_enforcement::{assert_no_violations, scan_directory, workspace_dir};

const FORBIDDEN: &[(&str, &str)] = &[
    ("textwrap::", "Terminal layout"),
    ("crossterm", "Terminal backend"),
    ("ratatui", "Terminal UI"),
    ("clap::", "Argument parsing"),
    ("tracing_subscriber", "Subscriber setup"),
    ("println!", "Printing to stdout"),
    ("eprintln!", "Printing to stderr"),
    ("std::io::stdout", "Writing to stdout"),
];

#[test]
fn test_core_has_no_presentation_code() {
    let violations = scan_directory(&workspace_dir("showcase/core/src"), |_, code| {
        FORBIDDEN
            .iter()
            .find(|(needle, _)| code.contains(needle))
            .map(|(_, reason)| (*reason).to_string())
    });

    assert_no_violations("Presentation code in showcase-core", &violations);
}

#[test]
fn test_core_manifest_has_no_terminal_dependencies() {
    let manifest = std::fs::read_to_string(workspace_dir("showcase/core/Cargo.toml"))
        .expect("core manifest");

    for crate_name in ["textwrap", "crossterm", "ratatui", "clap", "tracing-subscriber"] {
        assert!(
            !manifest
                .lines()
                .any(|line| line.trim_start().starts_with(crate_name)),
            "showcase-core must not depend on {crate_name}"
        );
    }
}
