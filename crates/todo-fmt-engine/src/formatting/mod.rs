//! # Formatting
//!
//! Regroups and sorts a todo buffer in three stages.
//!
//! 1. **Line Classification** (`classify`): each stripped line is judged on its
//!    own: list item (with its bullet), blank, or other text.
//! 2. **Grouping** (`grouper`): a `GroupBuilder` walks the lines with two
//!    explicit states, the open delimited block (if any) and whether a list is
//!    being built, and cuts the buffer into `Group`s.
//! 3. **Rendering** (`render`): every group is stably sorted by bullet rank and
//!    the groups are joined with mode-dependent spacing.
//!
//! ## Key Invariants
//!
//! - Sorting never moves a line across a group boundary
//! - Lines of equal rank keep their input order
//! - Delimited blocks (`fence`) are raw zones: never stripped, classified or sorted

pub mod classify;
pub mod fence;
pub mod grouper;
pub mod render;

use std::sync::LazyLock;

use log::debug;
use thiserror::Error;

use crate::{catalog::Catalog, mode::FormatMode};

pub use classify::{LineClass, LineClassifier};
pub use fence::Fences;
pub use grouper::{Group, GroupBuilder};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid block delimiter {0:?}: delimiters must be non-empty single lines")]
    InvalidDelimiter(String),

    #[error("Invalid rule character {0:?}")]
    InvalidRuleChar(char),
}

static DEFAULT_FORMATTER: LazyLock<Formatter> = LazyLock::new(Formatter::default);

/// Formats `text` with the default bullet catalog.
pub fn format(text: &str, mode: FormatMode) -> String {
    DEFAULT_FORMATTER.format(text, mode)
}

/// Configured formatter. Holds only immutable settings, so one instance can
/// be shared freely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formatter {
    classifier: LineClassifier,
    fences: Fences,
}

impl Formatter {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            classifier: LineClassifier::new(catalog),
            fences: Fences::default(),
        }
    }

    /// Replaces the characters a rule line may be drawn with.
    pub fn with_rule_chars(
        mut self,
        rule_chars: impl IntoIterator<Item = char>,
    ) -> Result<Self, FormatError> {
        let rule_chars: Vec<char> = rule_chars.into_iter().collect();
        if let Some(&bad) = rule_chars.iter().find(|c| c.is_whitespace()) {
            return Err(FormatError::InvalidRuleChar(bad));
        }
        self.classifier = self.classifier.with_rule_chars(rule_chars);
        Ok(self)
    }

    /// Replaces the delimiters that fence off verbatim blocks.
    pub fn with_delimiters<I, S>(mut self, tokens: I) -> Result<Self, FormatError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fences = Fences::new(tokens)?;
        Ok(self)
    }

    pub fn catalog(&self) -> &Catalog {
        self.classifier.catalog()
    }

    pub fn classifier(&self) -> &LineClassifier {
        &self.classifier
    }

    pub fn fences(&self) -> &Fences {
        &self.fences
    }

    /// Splits `text` into groups without sorting them.
    pub fn parse<'a>(&self, text: &'a str, mode: FormatMode) -> Vec<Group<'a>> {
        let mut builder = GroupBuilder::new(&self.classifier, &self.fences, mode);
        for line in text.split('\n') {
            builder.push(line);
        }
        let groups = builder.finish();
        debug!("parsed {} groups in {mode:?} mode", groups.len());
        groups
    }

    pub fn render(&self, groups: &[Group<'_>], mode: FormatMode) -> String {
        render::render(&self.classifier, &self.fences, groups, mode)
    }

    /// Regroups, sorts and respaces `text`.
    pub fn format(&self, text: &str, mode: FormatMode) -> String {
        let groups = self.parse(text, mode);
        self.render(&groups, mode)
    }

    /// Formats `text` after dropping every item carrying the completed
    /// bullet. Delimited blocks are left alone.
    pub fn prune_completed(&self, text: &str, mode: FormatMode) -> String {
        let done = self.catalog().completed_rank();
        let before = self.parse(text, mode);
        let count = before.len();

        let groups: Vec<Group<'_>> = before
            .into_iter()
            .filter_map(|mut group| {
                if !group.is_passthrough(&self.fences) {
                    group.lines.retain(|line| self.classifier.rank(line) != done);
                }
                (!group.is_empty()).then_some(group)
            })
            .collect();
        debug!(
            "pruned completed items, {} of {count} groups left",
            groups.len()
        );

        self.render(&groups, mode)
    }
}
