use std::borrow::Cow;

use crate::catalog::Catalog;

/// Characters a short typed rule may be made of.
pub const DEFAULT_RULE_CHARS: [char; 3] = ['-', '=', '~'];

/// What a single stripped line is, judged without surrounding context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass {
    /// Starts with a recognized bullet. `needs_space_fix` is set when the
    /// bullet is glued to the following text (`-item`).
    ListItem { symbol: char, needs_space_fix: bool },
    /// Empty after stripping.
    Blank,
    /// Anything else, headings and rules included.
    Text,
}

/// Text before the first space, or the whole line.
pub fn first_word(line: &str) -> &str {
    line.split_once(' ').map_or(line, |(word, _)| word)
}

/// True when every character of `s` is the same. Empty strings qualify.
pub fn is_repeated_char(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => true,
    }
}

/// Inserts one space after the first character: `-item` becomes `- item`.
pub fn inject_separator(line: &str) -> String {
    let split = line.chars().next().map_or(0, char::len_utf8);
    let (head, tail) = line.split_at(split);
    format!("{head} {tail}")
}

/// Guesses the bullet a line starts with.
///
/// A first word of several characters is taken as a bullet glued to its
/// text, unless it is one character repeated (`---`), which is a rule.
pub fn classify_symbol(line: &str) -> (Option<char>, bool) {
    let word = first_word(line);
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (None, _) => (None, false),
        (Some(c), None) => (Some(c), false),
        (Some(_), Some(_)) if is_repeated_char(word) => (None, false),
        (Some(c), Some(_)) => (Some(c), true),
    }
}

/// Classifies lines against a bullet catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClassifier {
    catalog: Catalog,
    rule_chars: Vec<char>,
}

impl LineClassifier {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            rule_chars: DEFAULT_RULE_CHARS.to_vec(),
        }
    }

    pub fn with_rule_chars(mut self, rule_chars: impl IntoIterator<Item = char>) -> Self {
        self.rule_chars = rule_chars.into_iter().collect();
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rule_chars(&self) -> &[char] {
        &self.rule_chars
    }

    pub fn is_recognized(&self, symbol: char) -> bool {
        self.catalog.contains(symbol)
    }

    /// Sort key of a line: the catalog rank of its first word, or 0 when the
    /// first word is not exactly one known bullet.
    pub fn rank(&self, line: &str) -> u32 {
        let mut chars = first_word(line).chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => self.catalog.rank_of(symbol).unwrap_or(0),
            _ => 0,
        }
    }

    /// Classifies an already stripped line.
    pub fn classify(&self, line: &str) -> LineClass {
        if line.is_empty() {
            return LineClass::Blank;
        }
        match classify_symbol(line) {
            (Some(symbol), needs_space_fix) if self.is_recognized(symbol) => LineClass::ListItem {
                symbol,
                needs_space_fix,
            },
            _ => LineClass::Text,
        }
    }

    /// Stretches a rule such as `---` to `target_length` characters.
    ///
    /// Lines that are not a single repeated rule character come back
    /// untouched, as does everything when `target_length` is 0.
    pub fn expand_heading<'a>(&self, line: &'a str, target_length: usize) -> Cow<'a, str> {
        let Some(first) = line.chars().next() else {
            return Cow::Borrowed(line);
        };
        if target_length == 0 || !self.rule_chars.contains(&first) || !is_repeated_char(line) {
            return Cow::Borrowed(line);
        }
        if line.chars().count() == target_length {
            return Cow::Borrowed(line);
        }
        Cow::Owned(first.to_string().repeat(target_length))
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}
