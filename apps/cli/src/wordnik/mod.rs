//! Wordnik HTTP client.
//!
//! Implements [`LookupProvider`] on top of the Wordnik v4 REST API. The key
//! is sent as the `api_key` query parameter on every request.

mod models;

pub use models::TokenStatus;

use chrono::Duration;
use deckit_core::{LookupError, LookupProvider, Phrase};
use models::{ApiMessage, Bigram, Definition, ExampleSearchResults, Pronunciation};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

/// Wordnik API client.
pub struct WordnikClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl WordnikClient {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self, LookupError> {
        let base = Url::parse(base_url)
            .map_err(|e| LookupError::Parse(format!("invalid API URL {}: {}", base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(LookupError::Parse(format!("invalid API URL {}", base_url)));
        }

        Ok(Self {
            client: Client::new(),
            base_url: base,
            api_key: api_key.into(),
        })
    }

    /// Check the key against the token status endpoint and log the quota.
    pub async fn verify_key(&self) -> Result<TokenStatus, LookupError> {
        let url = self.endpoint(&["account.json", "apiTokenStatus"]);

        match self.get_json::<TokenStatus>(url).await? {
            Some(status) if status.valid => {
                tracing::info!(
                    "API key is valid. Requests performed: {} Remaining calls: {} Quota reset in: {}",
                    status.total_requests,
                    status.remaining_calls,
                    format_reset(status.resets_in_millis)
                );
                Ok(status)
            }
            _ => Err(LookupError::InvalidCredential(
                "key was rejected by Wordnik".to_string(),
            )),
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`, a base URL always has path segments
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn word_url(&self, word: &str, resource: &str) -> Url {
        self.endpoint(&["word.json", word, resource])
    }

    /// GET a JSON resource. A 404 means Wordnik has nothing for it.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<Option<T>, LookupError> {
        let resp = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(LookupError::InvalidCredential(error_message(resp).await));
        }
        if !status.is_success() {
            return Err(LookupError::Service {
                status: status.as_u16(),
                message: error_message(resp).await,
            });
        }

        resp.json()
            .await
            .map(Some)
            .map_err(|e| LookupError::Parse(e.to_string()))
    }
}

impl LookupProvider for WordnikClient {
    async fn definitions(&self, word: &str) -> Result<Vec<String>, LookupError> {
        let definitions: Vec<Definition> = self
            .get_json(self.word_url(word, "definitions"))
            .await?
            .unwrap_or_default();
        Ok(definitions.into_iter().filter_map(|d| d.text).collect())
    }

    async fn examples(&self, word: &str) -> Result<Vec<String>, LookupError> {
        let results: ExampleSearchResults = self
            .get_json(self.word_url(word, "examples"))
            .await?
            .unwrap_or_default();
        Ok(results.examples.into_iter().filter_map(|e| e.text).collect())
    }

    async fn phrases(&self, word: &str) -> Result<Vec<Phrase>, LookupError> {
        let bigrams: Vec<Bigram> = self
            .get_json(self.word_url(word, "phrases"))
            .await?
            .unwrap_or_default();
        Ok(bigrams
            .into_iter()
            .filter_map(|b| Some(Phrase::new(b.gram1?, b.gram2?)))
            .collect())
    }

    async fn pronunciation(&self, word: &str) -> Result<Option<String>, LookupError> {
        let pronunciations: Vec<Pronunciation> = self
            .get_json(self.word_url(word, "pronunciations"))
            .await?
            .unwrap_or_default();
        Ok(pronunciations.into_iter().next().and_then(|p| p.raw))
    }
}

async fn error_message(resp: reqwest::Response) -> String {
    let body = resp.text().await.unwrap_or_default();
    match serde_json::from_str::<ApiMessage>(&body) {
        Ok(api) => api.message,
        Err(_) => body,
    }
}

/// Render a quota reset delay as `H:MM:SS`.
fn format_reset(millis: i64) -> String {
    // A reset already in the past reads as zero
    let delay = Duration::milliseconds(millis.max(0));
    format!(
        "{}:{:02}:{:02}",
        delay.num_hours(),
        delay.num_minutes() % 60,
        delay.num_seconds() % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn word_urls_are_encoded() {
        let client = WordnikClient::new("https://api.wordnik.com/v4", "key").unwrap();
        assert_eq!(
            client.word_url("ice cream", "definitions").as_str(),
            "https://api.wordnik.com/v4/word.json/ice%20cream/definitions"
        );
    }

    #[test]
    fn trailing_slash_in_base_url() {
        let client = WordnikClient::new("http://localhost:8080/v4/", "key").unwrap();
        assert_eq!(
            client.endpoint(&["account.json", "apiTokenStatus"]).as_str(),
            "http://localhost:8080/v4/account.json/apiTokenStatus"
        );
    }

    #[test]
    fn invalid_base_url() {
        assert!(matches!(
            WordnikClient::new("not a url", "key"),
            Err(LookupError::Parse(_))
        ));
        assert!(matches!(
            WordnikClient::new("mailto:me@example.com", "key"),
            Err(LookupError::Parse(_))
        ));
    }

    #[test]
    fn reset_delay_format() {
        assert_eq!(format_reset(0), "0:00:00");
        assert_eq!(format_reset(3_723_000), "1:02:03");
        assert_eq!(format_reset(59_999), "0:00:59");
    }

    #[test]
    fn reset_in_the_past_reads_as_zero() {
        assert_eq!(format_reset(-65_000), "0:00:00");
        assert_eq!(format_reset(i64::MIN), "0:00:00");
    }
}
