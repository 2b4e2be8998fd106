use super::FormatError;

/// Delimiters that open and close a passthrough block by default.
pub const DEFAULT_DELIMITERS: [&str; 3] = ["'''", "\"\"\"", "```"];

/// Set of literal tokens that fence off verbatim text.
///
/// A token only counts when it is the entire, unstripped line, and a block
/// is closed only by the same token that opened it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fences {
    tokens: Vec<String>,
}

impl Fences {
    pub fn new<I, S>(tokens: I) -> Result<Self, FormatError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens = tokens
            .into_iter()
            .map(|t| {
                let t: String = t.into();
                if t.is_empty() || t.contains('\n') {
                    Err(FormatError::InvalidDelimiter(t))
                } else {
                    Ok(t)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { tokens })
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn is_delimiter(&self, line: &str) -> bool {
        self.tokens.iter().any(|t| t == line)
    }

    /// True when `line` closes a block opened by `opener`.
    pub fn closes(opener: &str, line: &str) -> bool {
        opener == line
    }
}

impl Default for Fences {
    fn default() -> Self {
        Self {
            tokens: DEFAULT_DELIMITERS.iter().map(|t| t.to_string()).collect(),
        }
    }
}
