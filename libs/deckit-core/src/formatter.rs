//! Anki import formatting.
//!
//! Each card becomes one `front;back` line. The front holds the word and its
//! pronunciation, the back holds the definition, phrase and example fields
//! separated by horizontal rules.

use crate::error::{DeckError, Result};
use crate::types::{Deck, WordEntry};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Line break inside a field.
pub const LINE_BREAK: &str = "<br />";
/// Separator between fields on the card back.
pub const RULE: &str = "<hr />";
/// Delimiter between card front and back.
pub const DELIMITER: char = ';';

/// Colors and annotations applied to card fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardStyle {
    pub pronunciation_color: String,
    pub phrase_color: String,
    pub example_color: String,
    pub annotation_color: String,
    /// Usage labels muted inside definitions.
    pub annotations: Vec<String>,
    pub lowercase_definitions: bool,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            pronunciation_color: "gray".to_string(),
            phrase_color: "green".to_string(),
            example_color: "purple".to_string(),
            annotation_color: "gray".to_string(),
            annotations: vec!["Informal".to_string(), "Slang".to_string()],
            lowercase_definitions: true,
        }
    }
}

/// Why a word produced no card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Neither a definition nor an example was found.
    Empty,
    /// The word cannot be written as a single import line.
    InvalidWord(String),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "no definition or examples found"),
            Self::InvalidWord(reason) => write!(f, "{}", reason),
        }
    }
}

/// Result of formatting a single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardOutcome {
    /// A finished import line, without the trailing newline.
    Card(String),
    Skipped { word: String, reason: SkipReason },
}

/// Counts reported after writing a deck.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeckSummary {
    pub written: usize,
    pub skipped: Vec<String>,
}

/// Wrap text in a colored span.
pub fn span(text: &str, color: &str) -> String {
    format!("<span style=\"color:{}\">{}</span>", color, text)
}

/// Wrap text in bold tags.
pub fn bold(text: &str) -> String {
    format!("<b>{}</b>", text)
}

/// Format one entry into an import line.
pub fn format_card(entry: &WordEntry, style: &CardStyle) -> CardOutcome {
    let word = entry.word.as_str();
    let skipped = |reason| CardOutcome::Skipped {
        word: word.to_string(),
        reason,
    };

    if word.trim().is_empty() {
        return skipped(SkipReason::InvalidWord("blank word".to_string()));
    }
    if word.contains(['\n', '\r']) {
        return skipped(SkipReason::InvalidWord("word contains a line break".to_string()));
    }
    if !entry.has_content() {
        return skipped(SkipReason::Empty);
    }

    let mut line = card_front(entry, style);
    line.push(DELIMITER);
    line.push_str(&card_back(entry, style));
    CardOutcome::Card(line)
}

/// Format every entry in deck order.
pub fn render_deck(deck: &Deck, style: &CardStyle) -> Vec<CardOutcome> {
    deck.iter().map(|entry| format_card(entry, style)).collect()
}

/// Write the deck as import lines, skipping cards that cannot be formatted.
pub fn write_deck<W: Write>(
    deck: &Deck,
    style: &CardStyle,
    writer: &mut W,
) -> Result<DeckSummary> {
    let mut summary = DeckSummary::default();

    for outcome in render_deck(deck, style) {
        match outcome {
            CardOutcome::Card(line) => {
                writeln!(writer, "{}", line)?;
                summary.written += 1;
            }
            CardOutcome::Skipped { word, reason } => {
                tracing::warn!("Skipping \"{}\" ({})", word, reason);
                summary.skipped.push(word);
            }
        }
    }

    writer.flush()?;
    Ok(summary)
}

/// Create `path` and write the deck into it.
pub fn save_deck(
    deck: &Deck,
    style: &CardStyle,
    path: impl AsRef<Path>,
) -> Result<DeckSummary> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| DeckError::from_output_io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_deck(deck, style, &mut writer)
}

fn card_front(entry: &WordEntry, style: &CardStyle) -> String {
    let mut front = sanitize(&entry.word);
    if let Some(pronunciation) = entry.pronunciation() {
        front.push_str(LINE_BREAK);
        front.push_str(&span(&sanitize(pronunciation), &style.pronunciation_color));
    }
    front
}

fn card_back(entry: &WordEntry, style: &CardStyle) -> String {
    fn field(text: Option<&str>) -> Option<&str> {
        text.map(trim_rules).filter(|t| !t.is_empty())
    }
    let fields = [
        field(entry.definition()).map(|text| style_definition(text, style)),
        field(entry.phrase()).map(|text| span(text, &style.phrase_color)),
        field(entry.example())
            .map(|text| span(&emphasize(text, &entry.word), &style.example_color)),
    ];

    let mut back = String::new();
    for field in fields.into_iter().flatten() {
        back.push_str(&sanitize(&field));
        back.push_str(RULE);
    }

    // No line break right before a section divider
    let collapsed_from = format!("{}</span>{}", LINE_BREAK, RULE);
    let back = back.replace(&collapsed_from, &format!("</span>{}", RULE));

    match back.strip_suffix(RULE) {
        Some(trimmed) => trimmed.to_string(),
        None => back,
    }
}

fn style_definition(text: &str, style: &CardStyle) -> String {
    let annotated = style.annotations.iter().fold(text.to_string(), |acc, label| {
        replace_in_text(&acc, label, &span(label, &style.annotation_color))
    });

    if style.lowercase_definitions {
        annotated.to_lowercase()
    } else {
        annotated
    }
}

/// Bold every occurrence of `word` in the example text.
fn emphasize(text: &str, word: &str) -> String {
    replace_in_text(text, word, &bold(word))
}

/// Rules at the end of a field would survive the final chop.
fn trim_rules(text: &str) -> &str {
    let mut text = text;
    while let Some(trimmed) = text.strip_suffix(RULE) {
        text = trimmed;
    }
    text
}

/// `;` would split the card, so it becomes `,`.
fn sanitize(text: &str) -> String {
    text.replace(DELIMITER, ",")
}

/// Replace `needle` only in text outside of markup tags.
///
/// A tag starts with `<` followed by a letter or `/`; any other `<` is text.
fn replace_in_text(text: &str, needle: &str, replacement: &str) -> String {
    if needle.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut from = 0;

    while let Some(pos) = rest[from..].find('<') {
        let open = from + pos;
        let is_tag = rest[open + 1..].starts_with(|c: char| c.is_ascii_alphabetic() || c == '/');
        match rest[open..].find('>') {
            Some(len) if is_tag => {
                let end = open + len + 1;
                out.push_str(&rest[..open].replace(needle, replacement));
                out.push_str(&rest[open..end]);
                rest = &rest[end..];
                from = 0;
            }
            _ => from = open + 1,
        }
    }

    out.push_str(&rest.replace(needle, replacement));
    out
}
