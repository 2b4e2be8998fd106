use std::path::Path;

use serde::{Deserialize, Serialize};

/// Formatting variant, chosen per file.
///
/// `Notes` keeps single blank lines inside groups and packs groups tightly;
/// `Todo` drops blank lines and separates every group with one blank line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatMode {
    #[default]
    Notes,
    Todo,
}

impl FormatMode {
    /// Picks the mode from a file's extension: `.todo` files are todo lists,
    /// everything else (including buffers with no file) is treated as notes.
    pub fn for_path(path: Option<&Path>) -> Self {
        match path.and_then(Path::extension) {
            Some(ext) if ext == "todo" => FormatMode::Todo,
            _ => FormatMode::Notes,
        }
    }

    pub fn is_notes(self) -> bool {
        matches!(self, FormatMode::Notes)
    }

    pub(crate) fn group_separator(self) -> &'static str {
        match self {
            FormatMode::Notes => "\n",
            FormatMode::Todo => "\n\n",
        }
    }

    pub(crate) fn ending(self) -> &'static str {
        match self {
            FormatMode::Notes => "",
            FormatMode::Todo => "\n",
        }
    }
}

impl From<bool> for FormatMode {
    /// `true` selects notes mode.
    fn from(notes: bool) -> Self {
        if notes {
            FormatMode::Notes
        } else {
            FormatMode::Todo
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("work.todo"), FormatMode::Todo)]
    #[case(Some("dir/plan.todo"), FormatMode::Todo)]
    #[case(Some("journal.notes"), FormatMode::Notes)]
    #[case(Some("README"), FormatMode::Notes)]
    #[case(Some("archive.todo.bak"), FormatMode::Notes)]
    #[case(None, FormatMode::Notes)]
    fn mode_from_path(#[case] path: Option<&str>, #[case] expected: FormatMode) {
        assert_eq!(FormatMode::for_path(path.map(Path::new)), expected);
    }

    #[test]
    fn mode_from_flag() {
        assert_eq!(FormatMode::from(true), FormatMode::Notes);
        assert_eq!(FormatMode::from(false), FormatMode::Todo);
    }
}
