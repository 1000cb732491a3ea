pub mod config;
pub mod wordnik;

use anyhow::Context;
use deckit_core::{compile_deck, read_api_key, read_word_list, save_deck, CardStyle, DeckSummary};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Cli;
use crate::wordnik::WordnikClient;

/// Install the log subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Look up every new word in the list and write the import file.
pub async fn run(cli: Cli) -> anyhow::Result<DeckSummary> {
    let api_key = read_api_key(&cli.api_key).context("could not read the Wordnik API key")?;
    let words = read_word_list(&cli.words_in, &cli.markers())
        .context("could not read the word list")?;

    tracing::info!("Using Wordnik API at {}", cli.api_url);
    let client = WordnikClient::new(&cli.api_url, api_key)?;
    client
        .verify_key()
        .await
        .context("there was a problem with Wordnik")?;

    tracing::info!("Commencing lookup of {} words (it may take a while)...", words.len());
    let deck = compile_deck(&client, &words, &cli.lookup_options())
        .await
        .context("Wordnik lookup failed")?;

    tracing::info!("Constructing import deck...");
    let summary = save_deck(&deck, &CardStyle::default(), &cli.deck_out)
        .context("could not write resulting deck")?;

    tracing::info!(
        "Deck compilation complete! {} cards written, {} skipped. You may now import {} using Anki.",
        summary.written,
        summary.skipped.len(),
        cli.deck_out.display()
    );
    Ok(summary)
}
