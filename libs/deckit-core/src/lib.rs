//! Core library for compiling Anki import decks from word lists.
//!
//! Provides:
//! - Word list parser with new/old word markers
//! - Lookup provider seam and sequential deck compilation
//! - Card formatter producing `front;back` import lines
//! - Shared types (WordEntry, Deck, MarkerConfig, etc.)

pub mod credentials;
pub mod error;
pub mod formatter;
pub mod lookup;
pub mod parser;
pub mod types;

pub use credentials::read_api_key;
pub use error::{DeckError, LookupError, Result};
pub use formatter::{
    format_card, render_deck, save_deck, write_deck, CardOutcome, CardStyle, DeckSummary,
    SkipReason,
};
pub use lookup::{compile_deck, lookup_entry, LookupOptions, LookupProvider};
pub use parser::{parse_word_list, read_word_list};
pub use types::{Deck, MarkerConfig, Phrase, WordEntry};
