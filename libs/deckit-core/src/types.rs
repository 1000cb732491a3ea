//! Core types for deck compilation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One vocabulary item with the raw text of its card fields.
///
/// Empty strings are treated the same as absent fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phrase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,
}

impl WordEntry {
    /// Create an entry with no fields set.
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ..Self::default()
        }
    }

    pub fn definition(&self) -> Option<&str> {
        non_empty(&self.definition)
    }

    pub fn example(&self) -> Option<&str> {
        non_empty(&self.example)
    }

    pub fn phrase(&self) -> Option<&str> {
        non_empty(&self.phrase)
    }

    pub fn pronunciation(&self) -> Option<&str> {
        non_empty(&self.pronunciation)
    }

    /// A card is only worth writing with a definition or an example.
    pub fn has_content(&self) -> bool {
        self.definition().is_some() || self.example().is_some()
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// A two-word phrase containing the looked up word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    pub lead: String,
    pub trail: String,
}

impl Phrase {
    pub fn new(lead: impl Into<String>, trail: impl Into<String>) -> Self {
        Self {
            lead: lead.into(),
            trail: trail.into(),
        }
    }
}

impl std::fmt::Display for Phrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.lead, self.trail)
    }
}

/// Insertion-ordered collection of entries keyed by word.
///
/// Re-inserting a word replaces its entry but keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    entries: Vec<WordEntry>,
    index: HashMap<String, usize>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the one it replaced.
    pub fn insert(&mut self, entry: WordEntry) -> Option<WordEntry> {
        match self.index.get(&entry.word) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos], entry)),
            None => {
                self.index.insert(entry.word.clone(), self.entries.len());
                self.entries.push(entry);
                None
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<&WordEntry> {
        self.index.get(word).map(|&pos| &self.entries[pos])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordEntry> {
        self.entries.iter()
    }

    /// Words in deck order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.word.as_str())
    }
}

impl FromIterator<WordEntry> for Deck {
    fn from_iter<I: IntoIterator<Item = WordEntry>>(iter: I) -> Self {
        let mut deck = Deck::new();
        for entry in iter {
            deck.insert(entry);
        }
        deck
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a WordEntry;
    type IntoIter = std::slice::Iter<'a, WordEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Tokens recognised by the word list parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerConfig {
    /// Prefix of a marker line.
    pub open: String,
    /// Suffix of a marker line.
    pub close: String,
    /// Prefix of a commented out word.
    pub skip: String,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            open: "<!--".to_string(),
            close: "-->".to_string(),
            skip: "/*".to_string(),
        }
    }
}
