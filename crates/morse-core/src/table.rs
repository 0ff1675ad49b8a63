//! Character to code tables.
//!
//! A [`TableSet`] pairs the forward mapping (character → code string) with
//! the reverse mapping derived from it. Tables are built whole through a
//! validating factory and never mutated afterwards; switching alphabets
//! means building a new table.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use log::{debug, warn};

use crate::error::TableError;

/// Case convention applied to text before forward lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CaseFold {
    /// Uppercase input before lookup
    #[default]
    Upper,
    /// Lowercase input before lookup
    Lower,
    /// Look characters up as given
    Preserve,
}

impl CaseFold {
    /// Fold a character.
    ///
    /// Returns `None` when the folded form is not a single character
    /// (`'ß'` uppercases to `"SS"`), which can never match a table key.
    #[must_use]
    pub fn fold(self, ch: char) -> Option<char> {
        match self {
            Self::Upper => single(ch.to_uppercase()),
            Self::Lower => single(ch.to_lowercase()),
            Self::Preserve => Some(ch),
        }
    }
}

fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    let first = chars.next()?;
    match chars.next() {
        Some(_) => None,
        None => Some(first),
    }
}

/// Forward and reverse mapping for one alphabet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableSet {
    /// Character to code
    forward: BTreeMap<char, String>,
    /// Keys in first-insertion order
    order: Vec<char>,
    /// Code to character, derived from `forward`
    reverse: BTreeMap<String, char>,
    /// Case convention of the keys
    case_fold: CaseFold,
}

impl TableSet {
    /// Build a table from string keyed entries.
    ///
    /// Entries are taken in iteration order. A repeated key replaces the
    /// earlier code; a repeated code leaves only the later character
    /// reachable by decode.
    ///
    /// # Errors
    ///
    /// [`TableError::InvalidKey`] when a key is not exactly one character.
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut pairs = Vec::new();
        for (key, code) in entries {
            let key = key.as_ref();
            let mut chars = key.chars();
            let ch = match (chars.next(), chars.next()) {
                (Some(ch), None) => ch,
                _ => {
                    return Err(TableError::InvalidKey {
                        key: key.to_string(),
                    })
                }
            };
            pairs.push((ch, code.into()));
        }
        Ok(Self::build(pairs))
    }

    /// Build a table from character keyed entries.
    pub fn from_chars<I, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (char, V)>,
        V: Into<String>,
    {
        Self::build(entries.into_iter().map(|(ch, code)| (ch, code.into())))
    }

    fn build(pairs: impl IntoIterator<Item = (char, String)>) -> Self {
        let mut forward = BTreeMap::new();
        let mut order = Vec::new();
        for (ch, code) in pairs {
            if forward.insert(ch, code).is_none() {
                order.push(ch);
            }
        }

        let mut reverse = BTreeMap::new();
        for ch in &order {
            if let Some(code) = forward.get(ch) {
                reverse.insert(code.clone(), *ch);
            }
        }

        let table = Self {
            forward,
            order,
            reverse,
            case_fold: CaseFold::default(),
        };

        debug!(
            "built table: {} characters, {} codes",
            table.forward.len(),
            table.reverse.len()
        );
        for ch in table.shadowed() {
            warn!("{:?} shares its code with a later entry and cannot be decoded", ch);
        }

        table
    }

    /// Use a different case convention for forward lookup.
    #[must_use]
    pub fn with_case_fold(mut self, case_fold: CaseFold) -> Self {
        self.case_fold = case_fold;
        self
    }

    /// Case convention of this table.
    #[must_use]
    pub fn case_fold(&self) -> CaseFold {
        self.case_fold
    }

    /// Code for a text character, after case folding.
    #[must_use]
    pub fn encode_char(&self, ch: char) -> Option<&str> {
        self.case_fold.fold(ch).and_then(|key| self.code_for(key))
    }

    /// Code stored under an exact key.
    #[must_use]
    pub fn code_for(&self, key: char) -> Option<&str> {
        self.forward.get(&key).map(String::as_str)
    }

    /// Character for a code string.
    #[must_use]
    pub fn char_for(&self, code: &str) -> Option<char> {
        self.reverse.get(code).copied()
    }

    /// Characters that decode can never produce because a later entry
    /// took over their code.
    #[must_use]
    pub fn shadowed(&self) -> Vec<char> {
        self.iter()
            .filter(|(ch, code)| self.char_for(code) != Some(*ch))
            .map(|(ch, _)| ch)
            .collect()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.order
            .iter()
            .filter_map(move |ch| self.code_for(*ch).map(|code| (*ch, code)))
    }

    /// Number of characters in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Check if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

impl Default for TableSet {
    fn default() -> Self {
        Self::itu()
    }
}
