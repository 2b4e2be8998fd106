use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use todo_fmt_engine::{FormatMode, Formatter};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn load(file: &str) -> (String, FormatMode) {
    let path = fixtures_dir().join(file);
    let text = std::fs::read_to_string(&path).unwrap();
    (text, FormatMode::for_path(Some(&path)))
}

/// Snapshots live next to their fixtures.
fn snapshot_settings() -> insta::Settings {
    let mut settings = insta::Settings::clone_current();
    settings.set_snapshot_path(fixtures_dir());
    settings.set_prepend_module_to_snapshot(false);
    settings
}

/// Formats and prunes a fixture, checking that formatting is stable.
fn format_fixture(file: &str) -> (String, String) {
    let (text, mode) = load(file);
    let formatter = Formatter::default();

    let formatted = formatter.format(&text, mode);
    assert_eq!(
        formatter.format(&formatted, mode),
        formatted,
        "formatting {file} twice changed the output"
    );

    (formatted, formatter.prune_completed(&text, mode))
}

#[test]
fn fixture_sprint() {
    let (formatted, pruned) = format_fixture("sprint.todo");
    snapshot_settings().bind(|| {
        insta::assert_snapshot!("sprint", formatted);
        insta::assert_snapshot!("sprint_pruned", pruned);
    });
}

#[test]
fn fixture_journal() {
    let (formatted, pruned) = format_fixture("journal.notes");
    snapshot_settings().bind(|| {
        insta::assert_snapshot!("journal", formatted);
        insta::assert_snapshot!("journal_pruned", pruned);
    });
}

#[test]
fn unterminated_block_runs_to_end_of_input() {
    let (text, mode) = load("unterminated.todo");
    assert_eq!(mode, FormatMode::Todo);
    assert_eq!(
        Formatter::default().format(&text, mode),
        "- b\n- a\n\n\"\"\"\n+ inside\n- never sorted\n\n"
    );
}
