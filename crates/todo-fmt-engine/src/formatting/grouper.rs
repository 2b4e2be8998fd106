use std::borrow::Cow;

use log::trace;
use serde::Serialize;

use crate::mode::FormatMode;

use super::{
    classify::{LineClass, LineClassifier, inject_separator},
    fence::Fences,
};

/// A run of contiguous source lines that is sorted as one unit.
///
/// Lines borrow from the input unless they were rewritten (stripped lines
/// still borrow; repaired bullets and stretched rules are owned).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Group<'a> {
    pub lines: Vec<Cow<'a, str>>,
}

impl Group<'_> {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.lines.first().map(AsRef::as_ref)
    }

    /// A group led by a delimiter is a fenced block and is never sorted.
    pub fn is_passthrough(&self, fences: &Fences) -> bool {
        self.first().is_some_and(|line| fences.is_delimiter(line))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockState<'a> {
    Closed,
    /// Holds the delimiter that will close the block.
    Open(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupState {
    None,
    /// Inside a run of list items.
    Building,
}

/// Line-at-a-time state machine that partitions a buffer into groups.
pub struct GroupBuilder<'c, 'a> {
    classifier: &'c LineClassifier,
    fences: &'c Fences,
    mode: FormatMode,
    block: BlockState<'a>,
    list: GroupState,
    current: Vec<Cow<'a, str>>,
    out: Vec<Group<'a>>,
}

impl<'c, 'a> GroupBuilder<'c, 'a> {
    pub fn new(classifier: &'c LineClassifier, fences: &'c Fences, mode: FormatMode) -> Self {
        Self {
            classifier,
            fences,
            mode,
            block: BlockState::Closed,
            list: GroupState::None,
            current: vec![],
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &'a str) {
        if let BlockState::Open(opener) = self.block {
            self.current.push(Cow::Borrowed(line));
            if Fences::closes(opener, line) {
                trace!("closing block {opener:?}");
                self.block = BlockState::Closed;
                self.flush();
            }
            return;
        }

        if self.fences.is_delimiter(line) {
            trace!("opening block {line:?}");
            self.flush();
            self.list = GroupState::None;
            self.current.push(Cow::Borrowed(line));
            self.block = BlockState::Open(line);
            return;
        }

        let line = line.trim();
        match self.classifier.classify(line) {
            LineClass::ListItem {
                needs_space_fix, ..
            } => {
                self.list = GroupState::Building;
                let line = if needs_space_fix {
                    Cow::Owned(inject_separator(line))
                } else {
                    Cow::Borrowed(line)
                };
                self.current.push(line);
            }
            _ if self.list == GroupState::Building => {
                self.list = GroupState::None;
                self.flush();
                // Todo mode drops the blank line that ends a list.
                if !line.is_empty() || self.mode.is_notes() {
                    self.current.push(Cow::Borrowed(line));
                }
            }
            LineClass::Blank => {
                if self.mode.is_notes() && self.current.last().is_some_and(|l| !l.is_empty()) {
                    self.current.push(Cow::Borrowed(line));
                }
                self.flush();
            }
            LineClass::Text => {
                let target = self.current.last().map_or(0, |prev| prev.chars().count());
                let line = self.classifier.expand_heading(line, target);
                if self.mode.is_notes() {
                    self.flush();
                }
                self.current.push(line);
            }
        }
    }

    pub fn finish(mut self) -> Vec<Group<'a>> {
        if let BlockState::Open(opener) = self.block {
            trace!("unterminated block {opener:?} at end of input");
        }
        self.flush();
        self.out
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.out.push(Group {
                lines: std::mem::take(&mut self.current),
            });
        }
    }
}
