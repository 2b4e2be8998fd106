//! Line-level rewrites of bullets: relabeling a selection and nudging
//! priorities up or down. Both leave grouping and order to a later format.

use crate::formatting::{
    Formatter,
    classify::{classify_symbol, first_word},
};

impl Formatter {
    /// Forces every non-blank line onto the `target` bullet.
    ///
    /// A line that already carries a known bullet, separated or glued to its
    /// text, has that bullet swapped. Other lines get `target` prepended.
    pub fn relabel(&self, lines: &str, target: char) -> String {
        lines
            .split('\n')
            .map(|line| self.relabel_line(line, target))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn relabel_line(&self, line: &str, target: char) -> String {
        let trimmed = line.trim_start();
        if trimmed.trim_end().is_empty() {
            return line.to_string();
        }

        let rest = match classify_symbol(trimmed) {
            (Some(symbol), glued) if self.classifier().is_recognized(symbol) => {
                let after = &trimmed[symbol.len_utf8()..];
                if glued {
                    after
                } else {
                    after.strip_prefix(' ').unwrap_or(after)
                }
            }
            _ => trimmed,
        };

        let indent = &line[..line.len() - trimmed.len()];
        if rest.is_empty() {
            format!("{indent}{target}")
        } else {
            format!("{indent}{target} {rest}")
        }
    }

    /// Moves each list item one rank towards the top of the catalog, or
    /// towards the bottom when `toward_lower` is set. Bullets already at the
    /// edge, and lines without a bullet, are left as they are.
    pub fn shift_priority(&self, lines: &str, toward_lower: bool) -> String {
        lines
            .split('\n')
            .map(|line| self.shift_line(line, toward_lower))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn shift_line(&self, line: &str, toward_lower: bool) -> String {
        let trimmed = line.trim_start();
        let rank = self.classifier().rank(trimmed);
        if rank == 0 {
            return line.to_string();
        }

        let catalog = self.catalog();
        let shifted = if toward_lower {
            rank.checked_add(1)
        } else {
            rank.checked_sub(1)
        };
        let Some(bullet) = shifted.and_then(|r| catalog.by_rank(r)) else {
            return line.to_string();
        };

        let indent = &line[..line.len() - trimmed.len()];
        let old = first_word(trimmed);
        format!("{indent}{}{}", bullet.symbol, &trimmed[old.len()..])
    }
}
