use std::str::FromStr;

use anyhow::{Result, bail};
use todo_fmt_engine::TextSpan;

/// Inclusive, 1-based line range as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    first: usize,
    last: usize,
}

impl LineRange {
    pub fn new(first: usize, last: usize) -> Result<Self, String> {
        if first == 0 {
            return Err("line numbers start at 1".to_string());
        }
        if last < first {
            return Err(format!("range {first}:{last} ends before it starts"));
        }
        Ok(Self { first, last })
    }

    /// Byte span of the range within `text`, excluding the final newline.
    /// A range running past the end is clipped to the last line.
    pub fn span_in(&self, text: &str) -> Result<TextSpan> {
        let starts: Vec<usize> = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        if self.first > starts.len() {
            bail!(
                "line {} is past the end of the file ({} lines)",
                self.first,
                starts.len()
            );
        }

        let start = starts[self.first - 1];
        let end = starts
            .get(self.last)
            .map_or(text.len(), |&next| next - 1);
        Ok(TextSpan::new(start, end))
    }
}

impl FromStr for LineRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |n: &str| {
            n.trim()
                .parse::<usize>()
                .map_err(|e| format!("invalid line number '{n}': {e}"))
        };
        match s.split_once(':') {
            Some((first, last)) => Self::new(parse(first)?, parse(last)?),
            None => {
                let line = parse(s)?;
                Self::new(line, line)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("3", 3, 3)]
    #[case("2:4", 2, 4)]
    #[case(" 1 : 1 ", 1, 1)]
    fn parses(#[case] input: &str, #[case] first: usize, #[case] last: usize) {
        assert_eq!(input.parse(), Ok(LineRange { first, last }));
    }

    #[rstest]
    #[case("0")]
    #[case("4:2")]
    #[case("a:b")]
    #[case("")]
    fn rejects(#[case] input: &str) {
        assert!(input.parse::<LineRange>().is_err());
    }

    #[rstest]
    #[case(1, 1, TextSpan::new(0, 3))]
    #[case(2, 3, TextSpan::new(4, 11))]
    #[case(3, 9, TextSpan::new(8, 12))]
    #[case(4, 4, TextSpan::new(12, 12))]
    fn spans(#[case] first: usize, #[case] last: usize, #[case] expected: TextSpan) {
        // Four lines, the last one empty.
        let text = "- a\n- b\n- c\n";
        let range = LineRange::new(first, last).unwrap();
        assert_eq!(range.span_in(text).unwrap(), expected);
    }

    #[test]
    fn past_the_end_is_an_error() {
        let range = LineRange::new(5, 5).unwrap();
        assert!(range.span_in("- a\n- b").is_err());
    }
}
