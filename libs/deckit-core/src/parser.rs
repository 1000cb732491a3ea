//! Word list parser.
//!
//! # Format
//! ```markdown
//! <!-- new words start from here -->
//! foo
//! bar
//! /*zug*/
//! <!-- old words from here on -->
//! boo
//! ```
//!
//! Each marker line toggles collection, so only the words between the first
//! two markers are picked up here. Lines starting with the skip token are
//! commented out.

use crate::error::{DeckError, Result};
use crate::types::MarkerConfig;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parse word list content into the ordered, distinct words to look up.
pub fn parse_word_list(content: &str, markers: &MarkerConfig) -> Vec<String> {
    let mut parser = Parser::new(markers);
    for line in content.lines() {
        parser.process_line(line);
    }
    parser.finish()
}

/// Read and parse a word list file.
pub fn read_word_list(path: impl AsRef<Path>, markers: &MarkerConfig) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| DeckError::from_io(path, e))?;
    let words = parse_word_list(&content, markers);
    tracing::debug!("Parsed {} words from {}", words.len(), path.display());
    Ok(words)
}

enum LineType<'a> {
    Marker,
    Skipped,
    Empty,
    Word(&'a str),
}

struct Parser<'m> {
    markers: &'m MarkerConfig,
    collecting: bool,
    words: Vec<String>,
    seen: HashSet<String>,
}

impl<'m> Parser<'m> {
    fn new(markers: &'m MarkerConfig) -> Self {
        Self {
            markers,
            collecting: false,
            words: Vec::new(),
            seen: HashSet::new(),
        }
    }

    fn process_line(&mut self, line: &str) {
        match self.parse_line(line) {
            LineType::Marker => self.collecting = !self.collecting,
            LineType::Word(word) if self.collecting => {
                if self.seen.insert(word.to_string()) {
                    self.words.push(word.to_string());
                }
            }
            LineType::Word(_) | LineType::Skipped | LineType::Empty => {}
        }
    }

    fn parse_line<'a>(&self, line: &'a str) -> LineType<'a> {
        let trimmed = line.trim();

        if self.is_marker(line, trimmed) {
            LineType::Marker
        } else if line.starts_with(&self.markers.open) {
            // An unterminated comment line is never a word
            LineType::Skipped
        } else if line.starts_with(&self.markers.skip) {
            LineType::Skipped
        } else if trimmed.is_empty() {
            LineType::Empty
        } else {
            LineType::Word(trimmed)
        }
    }

    /// `<!-- text -->` on one line, or a line holding only a bare token.
    fn is_marker(&self, line: &str, trimmed: &str) -> bool {
        let full = line.starts_with(&self.markers.open) && trimmed.ends_with(&self.markers.close);
        full || trimmed == self.markers.open || trimmed == self.markers.close
    }

    fn finish(self) -> Vec<String> {
        self.words
    }
}
