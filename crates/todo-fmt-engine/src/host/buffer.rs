use xi_rope::{Rope, delta::Builder};

use super::{HostError, SpanEditor, TextSpan};

/// In-memory [`SpanEditor`] backed by an `xi_rope::Rope`.
///
/// Replacements are compiled to deltas and applied to the rope, the same way
/// an editor buffer would receive them.
#[derive(Debug, Clone)]
pub struct RopeBuffer {
    rope: Rope,
}

impl RopeBuffer {
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from(text),
        }
    }

    /// The whole buffer as an owned string.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    fn check(&self, span: TextSpan) -> Result<(), HostError> {
        let len = self.rope.len();
        if span.start > span.end || span.end > len {
            return Err(HostError::SpanOutOfBounds { span, len });
        }
        let text = self.rope.slice_to_cow(0..len);
        if !text.is_char_boundary(span.start) || !text.is_char_boundary(span.end) {
            return Err(HostError::NotCharBoundary(span));
        }
        Ok(())
    }
}

impl From<&str> for RopeBuffer {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl SpanEditor for RopeBuffer {
    fn len(&self) -> usize {
        self.rope.len()
    }

    fn substr(&self, span: TextSpan) -> Result<String, HostError> {
        self.check(span)?;
        Ok(self.rope.slice_to_cow(span.start..span.end).into_owned())
    }

    fn replace(&mut self, span: TextSpan, text: &str) -> Result<(), HostError> {
        self.check(span)?;
        let mut builder = Builder::new(self.rope.len());
        builder.replace(span.start..span.end, Rope::from(text));
        let delta = builder.build();
        self.rope = delta.apply(&self.rope);
        Ok(())
    }
}
