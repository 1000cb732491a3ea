//! Dictionary lookup seam and deck compilation.

use crate::error::{DeckError, LookupError, Result};
use crate::formatter::LINE_BREAK;
use crate::types::{Deck, Phrase, WordEntry};
use serde::{Deserialize, Serialize};

/// Source of lexical data for a word.
///
/// Calls are awaited one at a time; implementations do not need to be
/// shareable across tasks.
#[allow(async_fn_in_trait)]
pub trait LookupProvider {
    /// All available definitions, best first.
    async fn definitions(&self, word: &str) -> std::result::Result<Vec<String>, LookupError>;

    /// Example sentences using the word.
    async fn examples(&self, word: &str) -> std::result::Result<Vec<String>, LookupError>;

    /// Two-word phrases containing the word.
    async fn phrases(&self, word: &str) -> std::result::Result<Vec<Phrase>, LookupError>;

    /// Phonetic transcription, if the service has one.
    async fn pronunciation(&self, word: &str) -> std::result::Result<Option<String>, LookupError>;
}

/// Options for turning lookup results into entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupOptions {
    /// Maximum number of example sentences kept per word.
    pub example_limit: usize,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self { example_limit: 2 }
    }
}

/// Look up a single word and collect the raw card fields.
pub async fn lookup_entry<P: LookupProvider>(
    provider: &P,
    word: &str,
    options: &LookupOptions,
) -> std::result::Result<WordEntry, LookupError> {
    let definitions = provider.definitions(word).await?;
    let phrases = provider.phrases(word).await?;
    let examples = provider.examples(word).await?;
    let pronunciation = provider.pronunciation(word).await?;

    Ok(WordEntry {
        word: word.to_string(),
        definition: join_lines(definitions.iter().map(String::as_str)),
        phrase: join_phrases(&phrases),
        example: join_lines(
            examples
                .iter()
                .take(options.example_limit)
                .map(String::as_str),
        ),
        pronunciation: pronunciation.filter(|p| !p.trim().is_empty()),
    })
}

/// Look up every word in order and build the deck.
///
/// The first failing lookup aborts the whole batch.
pub async fn compile_deck<P: LookupProvider>(
    provider: &P,
    words: &[String],
    options: &LookupOptions,
) -> Result<Deck> {
    let mut deck = Deck::new();
    let total = words.len();

    for (idx, word) in words.iter().enumerate() {
        let entry = lookup_entry(provider, word, options)
            .await
            .map_err(|source| DeckError::Lookup {
                word: word.clone(),
                source,
            })?;
        tracing::info!("[{}/{}] Looked up \"{}\"", idx + 1, total, word);

        if deck.insert(entry).is_some() {
            tracing::debug!("Replaced earlier entry for \"{}\"", word);
        }
    }

    Ok(deck)
}

/// Each line followed by a line break, or `None` when there are no lines.
fn join_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Option<String> {
    let joined: String = lines
        .filter(|line| !line.trim().is_empty())
        .map(|line| format!("{}{}", line, LINE_BREAK))
        .collect();
    (!joined.is_empty()).then_some(joined)
}

fn join_phrases(phrases: &[Phrase]) -> Option<String> {
    if phrases.is_empty() {
        return None;
    }
    let joined = phrases
        .iter()
        .map(Phrase::to_string)
        .collect::<Vec<_>>()
        .join(" | ");
    Some(format!("{}{}", joined, LINE_BREAK))
}
