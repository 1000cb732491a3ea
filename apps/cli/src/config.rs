//! Command line and environment configuration.

use clap::Parser;
use deckit_core::{LookupOptions, MarkerConfig};
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "https://api.wordnik.com/v4";

/// Process a word list and write a file Anki can import.
///
/// Every option can also be set through its environment variable; a `.env`
/// file in the working directory is loaded first.
#[derive(Parser, Debug, Clone)]
#[command(name = "deckit", version, about = "Compile English-English Anki decks with Wordnik")]
pub struct Cli {
    /// Text file with the Wordnik API key on its first line
    pub api_key: PathBuf,

    /// Word list; new words go between marker lines
    pub words_in: PathBuf,

    /// Anki import file to write
    pub deck_out: PathBuf,

    /// Prefix of a marker line
    #[arg(long, env = "DECKIT_OPEN_MARKER", default_value = "<!--", allow_hyphen_values = true)]
    pub open_marker: String,

    /// Suffix of a marker line
    #[arg(long, env = "DECKIT_CLOSE_MARKER", default_value = "-->", allow_hyphen_values = true)]
    pub close_marker: String,

    /// Prefix of a commented out word
    #[arg(long, env = "DECKIT_SKIP_MARKER", default_value = "/*", allow_hyphen_values = true)]
    pub skip_marker: String,

    /// Maximum number of example sentences per card
    #[arg(long, env = "DECKIT_EXAMPLE_LIMIT", default_value_t = 2)]
    pub example_limit: usize,

    /// Wordnik API base URL
    #[arg(long, env = "WORDNIK_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

impl Cli {
    pub fn markers(&self) -> MarkerConfig {
        MarkerConfig {
            open: self.open_marker.clone(),
            close: self.close_marker.clone(),
            skip: self.skip_marker.clone(),
        }
    }

    pub fn lookup_options(&self) -> LookupOptions {
        LookupOptions {
            example_limit: self.example_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn positional_paths_and_defaults() {
        let cli = Cli::try_parse_from(["deckit", "key", "words.md", "deck.txt"]).unwrap();
        assert_eq!(cli.api_key, PathBuf::from("key"));
        assert_eq!(cli.words_in, PathBuf::from("words.md"));
        assert_eq!(cli.deck_out, PathBuf::from("deck.txt"));
        assert_eq!(cli.markers(), MarkerConfig::default());
        assert_eq!(cli.lookup_options(), LookupOptions::default());
        assert_eq!(cli.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn marker_overrides() {
        let cli = Cli::try_parse_from([
            "deckit",
            "key",
            "words.md",
            "deck.txt",
            "--open-marker",
            "<--",
            "--skip-marker",
            "#",
            "--example-limit",
            "5",
        ])
        .unwrap();
        assert_eq!(cli.markers().open, "<--");
        assert_eq!(cli.markers().close, "-->");
        assert_eq!(cli.markers().skip, "#");
        assert_eq!(cli.lookup_options().example_limit, 5);
    }

    #[test]
    fn missing_output_path_is_rejected() {
        assert!(Cli::try_parse_from(["deckit", "key", "words.md"]).is_err());
    }
}
