use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The built-in bullet catalog, highest priority first.
pub const DEFAULT_BULLETS: [(&str, char); 9] = [
    ("doing", '<'),
    ("paused", '>'),
    ("hp_todo", '*'),
    ("todo", '-'),
    ("lp_todo", '•'),
    ("unsure", '?'),
    ("list", '«'),
    ("delegated", '»'),
    ("done", '+'),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Bullet catalog must contain at least one bullet")]
    Empty,

    #[error("Duplicate bullet name: {0}")]
    DuplicateName(String),

    #[error("Bullet '{name}' reuses symbol '{symbol}'")]
    DuplicateSymbol { name: String, symbol: char },

    #[error("Bullet '{0}' has a whitespace symbol")]
    WhitespaceSymbol(String),
}

/// A named priority symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bullet {
    pub name: String,
    pub symbol: char,
}

/// Ordered set of bullets. A bullet's rank is its 1-based position, so the
/// first entry sorts to the top of a group and the last (the "completed"
/// bullet) sorts to the bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    bullets: Vec<Bullet>,
}

impl Catalog {
    pub fn new<I, S>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = (S, char)>,
        S: Into<String>,
    {
        let mut bullets: Vec<Bullet> = Vec::new();
        for (name, symbol) in entries {
            let name = name.into();
            if symbol.is_whitespace() {
                return Err(CatalogError::WhitespaceSymbol(name));
            }
            if bullets.iter().any(|b| b.name == name) {
                return Err(CatalogError::DuplicateName(name));
            }
            if bullets.iter().any(|b| b.symbol == symbol) {
                return Err(CatalogError::DuplicateSymbol { name, symbol });
            }
            bullets.push(Bullet { name, symbol });
        }

        if bullets.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { bullets })
    }

    pub fn len(&self) -> usize {
        self.bullets.len()
    }

    /// Always false: construction rejects empty catalogs.
    pub fn is_empty(&self) -> bool {
        self.bullets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bullet> {
        self.bullets.iter()
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.rank_of(symbol).is_some()
    }

    /// Rank of `symbol`, starting at 1. Rank 0 is reserved for lines
    /// without a recognized bullet.
    pub fn rank_of(&self, symbol: char) -> Option<u32> {
        self.bullets
            .iter()
            .position(|b| b.symbol == symbol)
            .map(|i| i as u32 + 1)
    }

    pub fn by_rank(&self, rank: u32) -> Option<&Bullet> {
        let index = usize::try_from(rank).ok()?.checked_sub(1)?;
        self.bullets.get(index)
    }

    pub fn by_name(&self, name: &str) -> Option<&Bullet> {
        self.bullets.iter().find(|b| b.name == name)
    }

    pub fn by_symbol(&self, symbol: char) -> Option<&Bullet> {
        self.bullets.iter().find(|b| b.symbol == symbol)
    }

    /// The lowest priority bullet, used to mark finished items.
    pub fn completed(&self) -> &Bullet {
        // Non-empty by construction.
        &self.bullets[self.bullets.len() - 1]
    }

    pub fn completed_rank(&self) -> u32 {
        self.bullets.len() as u32
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            bullets: DEFAULT_BULLETS
                .iter()
                .map(|&(name, symbol)| Bullet {
                    name: name.to_string(),
                    symbol,
                })
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Bullet;
    type IntoIter = std::slice::Iter<'a, Bullet>;

    fn into_iter(self) -> Self::IntoIter {
        self.bullets.iter()
    }
}
