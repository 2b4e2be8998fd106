//! # Host Integration
//!
//! The formatter itself only maps text to text. Hosts (editors, the CLI)
//! supply a buffer through [`SpanEditor`], pick a [`FormatMode`](crate::FormatMode),
//! and drive the commands in [`TodoCommands`].
//!
//! ## Modules
//!
//! - **`span`**: `TextSpan` byte ranges and span merging
//! - **`buffer`**: `RopeBuffer`, an xi-rope backed `SpanEditor`
//! - **`settings`**: `HostSettings` key-value toggles
//! - **`commands`**: `TodoCommands` (format, mark-as, promote, pre-save)

pub mod buffer;
pub mod commands;
pub mod settings;
pub mod span;

use thiserror::Error;

pub use buffer::RopeBuffer;
pub use commands::TodoCommands;
pub use settings::HostSettings;
pub use span::TextSpan;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HostError {
    #[error("Span {}..{} is outside the buffer (length {})", .span.start, .span.end, .len)]
    SpanOutOfBounds { span: TextSpan, len: usize },

    #[error("Span {}..{} does not fall on character boundaries", .0.start, .0.end)]
    NotCharBoundary(TextSpan),

    #[error("Unknown bullet style: {0}")]
    UnknownBullet(String),
}

/// Capability to read and replace regions of a host buffer.
pub trait SpanEditor {
    /// Buffer length in bytes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn substr(&self, span: TextSpan) -> Result<String, HostError>;

    fn replace(&mut self, span: TextSpan, text: &str) -> Result<(), HostError>;

    /// Widens `span` to cover whole lines, excluding the final newline.
    fn line_span(&self, span: TextSpan) -> Result<TextSpan, HostError> {
        let len = self.len();
        if span.start > span.end || span.end > len {
            return Err(HostError::SpanOutOfBounds { span, len });
        }
        let text = self.substr(TextSpan::new(0, len))?;
        if !text.is_char_boundary(span.start) || !text.is_char_boundary(span.end) {
            return Err(HostError::NotCharBoundary(span));
        }

        let start = text[..span.start].rfind('\n').map_or(0, |i| i + 1);
        let end = text[span.end..].find('\n').map_or(len, |i| span.end + i);
        Ok(TextSpan::new(start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TextSpan::caret(0), TextSpan::new(0, 3))]
    #[case(TextSpan::caret(3), TextSpan::new(0, 3))]
    #[case(TextSpan::caret(4), TextSpan::new(4, 7))]
    #[case(TextSpan::new(1, 5), TextSpan::new(0, 7))]
    #[case(TextSpan::caret(9), TextSpan::new(8, 11))]
    fn line_span_widens_to_lines(#[case] span: TextSpan, #[case] expected: TextSpan) {
        let buffer = RopeBuffer::new("- a\n- b\n- c");
        assert_eq!(buffer.line_span(span).unwrap(), expected);
    }

    #[test]
    fn line_span_out_of_bounds() {
        let buffer = RopeBuffer::new("- a");
        assert!(matches!(
            buffer.line_span(TextSpan::new(0, 10)),
            Err(HostError::SpanOutOfBounds { .. })
        ));
    }
}
